//! Elapsed-time tracking for a running game.

use std::time::{Duration, Instant};

/// Length of one timer tick.
///
/// The timer only ever counts whole seconds; partial seconds carry over to the next update.
pub(crate) const TICK: Duration = Duration::from_secs(1);

/// Whole-second stopwatch for a single game.
///
/// The timer is started when the game screen is entered and stopped the moment the player reaches
/// an end tile. It cannot be paused and resumed. The event loop drives it through
/// [`update`](GameTimer::update), which converts wall-clock time into ticks.
#[derive(Clone, Debug)]
pub struct GameTimer {
    /// Seconds counted so far.
    seconds: u64,
    /// Whether ticks are still being counted.
    running: bool,
    /// Instant the last counted tick ended at.
    last_tick: Instant,
}

impl Default for GameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTimer {
    /// Creates a stopped timer at zero seconds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seconds: 0,
            running: false,
            last_tick: Instant::now(),
        }
    }

    /// Resets the count to zero and starts counting from now.
    pub fn start(&mut self) {
        self.seconds = 0;
        self.running = true;
        self.last_tick = Instant::now();
    }

    /// Stops counting. The elapsed seconds are kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the timer is counting.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds counted since the timer was started.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.seconds
    }

    /// Counts one second if the timer is running.
    pub fn tick(&mut self) {
        if self.running {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    /// Converts the wall-clock time since the last tick into whole-second ticks.
    pub fn update(&mut self) {
        self.advance_to(Instant::now());
    }

    /// Counts every whole second between the last tick and `now`.
    ///
    /// The remainder below one second is kept for the next call so the count does not drift with
    /// the polling interval.
    pub(crate) fn advance_to(&mut self, now: Instant) {
        while self.running && now.saturating_duration_since(self.last_tick) >= TICK {
            self.last_tick += TICK;
            self.tick();
        }
    }
}
