//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    cell::TileType,
    highscores::{self, ScoreEntry},
    state::GameSession,
    types::{GameOverItem, MainMenuItem, MenuItem, MenuType, Screen},
    App,
};

/// Text drawn for a wall tile. Each tile is two terminal cells wide to keep it roughly square.
const WALL: &str = "  ";

/// Text drawn for an open tile.
const OPEN: &str = "  ";

/// Text drawn for an end tile.
const END: &str = "[]";

/// Text drawn for the player token.
const PLAYER: &str = "()";

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors if the in-game screen is shown without a running session or
/// the maze does not fit the terminal's coordinate range.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item, app.status.as_deref()),
        Screen::Tutorial => tutorial(frame),
        Screen::HighScores => high_scores(frame, &app.high_scores),
        Screen::InGame => in_game(
            frame,
            app.session
                .as_ref()
                .ok_or_eyre("no game session to render")?,
        )?,
        Screen::NameEntry => name_entry(frame, app)?,
        Screen::GameOver(item) => game_over(frame, item, app.last_score.as_ref()),
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Style of menu entries that are not highlighted.
fn content_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style of the highlighted menu entry.
fn active_content_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Green)
}

/// Returns a rectangle of the given size centered within `area`, clamped to its bounds.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Renders the generic layout structure shared by the main and game-over menus.
///
/// This function creates the centered, bordered block the menu is drawn in and returns one row per
/// menu entry inside it. The specific entries are rendered by the caller.
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let [_, space, _] = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .areas(frame.area());
    let [_, space, _] = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .areas(space);

    let [layout] = Layout::vertical([Constraint::Max(u16::from(menu.value()) + 2)])
        .flex(Flex::Center)
        .areas(space);

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(menu.value())]).split(inner_space)
}

/// Renders the entries of a menu, highlighting the selected one.
fn render_menu<T: MenuItem>(frame: &mut Frame, menu: MenuType, selected: T) {
    let rows = init_menu(frame, menu);

    for (item, row) in T::ALL.iter().zip(rows.iter()) {
        let style = if *item == selected {
            active_content_style()
        } else {
            content_style()
        };
        frame.render_widget(Line::styled(item.label(), style).centered(), *row);
    }
}

/// Renders a single message line along the bottom edge of the frame.
fn status_line(frame: &mut Frame, message: &str, color: Color) {
    let area = frame.area();
    let [_, bottom] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    frame.render_widget(
        Line::styled(message.to_owned(), Style::default().fg(color)).centered(),
        bottom,
    );
}

/// Renders the main menu screen with navigation options.
///
/// A pending error message, such as a failed maze load, is shown below the menu.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem, status: Option<&str>) {
    clear(frame);

    render_menu(frame, MenuType::MainMenu, item);

    if let Some(message) = status {
        status_line(frame, message, Color::Red);
    }
}

/// Renders the game-over screen with the recorded time and the follow-up options.
pub(crate) fn game_over(frame: &mut Frame, item: GameOverItem, score: Option<&ScoreEntry>) {
    clear(frame);

    render_menu(frame, MenuType::GameOver, item);

    if let Some(score) = score {
        status_line(
            frame,
            &format!("{}: {} seconds", score.name, score.seconds),
            Color::Green,
        );
    }
}

/// Renders a bordered page of text lines centered in the frame.
fn page(frame: &mut Frame, title: &str, lines: Vec<Line<'_>>) {
    clear(frame);

    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or_default()
        .max(title.len())
        .saturating_add(4);
    let height = lines.len().saturating_add(2);
    let area = centered(
        frame.area(),
        u16::try_from(width).unwrap_or(u16::MAX),
        u16::try_from(height).unwrap_or(u16::MAX),
    );

    let block = Block::bordered()
        .title(title.to_owned())
        .title_bottom("(h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// Renders the tutorial page: the goal, the controls and a legend of the tiles.
pub(crate) fn tutorial(frame: &mut Frame) {
    let legend = |sample: &'static str, style: Style, text: &'static str| {
        Line::from(vec![Span::styled(sample, style), Span::raw(text)])
    };

    let lines = vec![
        Line::raw("Goal: navigate through the maze and reach the flag as fast as possible!"),
        Line::raw(""),
        Line::raw("Controls: (w) up - (s) down - (a) left - (d) right"),
        Line::raw("Arrow keys work too. (esc) leaves the game."),
        Line::raw(""),
        legend(PLAYER, player_style(), " player"),
        legend(WALL, wall_style(), " wall"),
        legend(END, end_style(), " flag (end)"),
    ];

    page(frame, "Maze Explorer Tutorial", lines);
}

/// Renders the high-score table.
pub(crate) fn high_scores(frame: &mut Frame, entries: &[ScoreEntry]) {
    let lines = if entries.is_empty() {
        vec![Line::raw(highscores::NO_SCORES)]
    } else {
        highscores::ranking_lines(entries)
            .into_iter()
            .map(Line::raw)
            .collect()
    };

    page(frame, "High Scores", lines);
}

/// Style of wall tiles.
fn wall_style() -> Style {
    Style::default().bg(Color::Green)
}

/// Style of end tiles.
fn end_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style of the player token.
fn player_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Builds one styled line per maze row, with the player token drawn over its tile.
pub(crate) fn maze_lines(session: &GameSession) -> Vec<Line<'static>> {
    let grid = session.grid();
    let player = session.player();

    let mut lines: Vec<Line<'static>> = (0..grid.row_count()).map(|_| Line::default()).collect();
    for (position, tile) in grid.cells() {
        let span = if position == player {
            Span::styled(PLAYER, player_style())
        } else {
            match tile.kind() {
                TileType::Wall => Span::styled(WALL, wall_style()),
                TileType::End => Span::styled(END, end_style()),
                TileType::Open => Span::raw(OPEN),
            }
        };

        if let Some(line) = lines.get_mut(position.row) {
            line.push_span(span);
        }
    }

    lines
}

/// Renders the in-game screen: the maze, the player and the running timer.
///
/// # Errors
///
/// This function may return errors if the maze is larger than the terminal coordinate range.
pub(crate) fn in_game(frame: &mut Frame, session: &GameSession) -> Result<()> {
    clear(frame);

    let grid = session.grid();
    let maze_width = u16::try_from(grid.column_count().saturating_mul(WALL.len()))?;
    let maze_height = u16::try_from(grid.row_count())?;

    let [maze_content_area, tooltip_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(frame.area());

    let maze_area = centered(maze_content_area, maze_width, maze_height);
    frame.render_widget(Paragraph::new(maze_lines(session)), maze_area);

    let tooltip_block = Block::bordered()
        .title(format!("{} - (w/a/s/d) move / (esc) return to menu", session.label()))
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let timer = Line::raw(format!("Time: {}s", session.elapsed_seconds())).centered();

    frame.render_widget(
        Paragraph::new(timer).block(tooltip_block),
        tooltip_area,
    );

    Ok(())
}

/// Renders the name prompt shown after the maze has been solved.
///
/// # Errors
///
/// This function may return errors if no finished session is available.
pub(crate) fn name_entry(frame: &mut Frame, app: &App) -> Result<()> {
    clear(frame);

    let session = app
        .session
        .as_ref()
        .ok_or_eyre("no finished game to record")?;

    let lines = vec![
        Line::raw("You escaped the maze!"),
        Line::raw(format!("Time: {} seconds", session.elapsed_seconds())),
        Line::raw(""),
        Line::raw("Enter your name:"),
        Line::styled(format!("{}_", app.name_input), active_content_style()),
    ];

    let area = centered(frame.area(), 44, u16::try_from(lines.len() + 2)?);
    let block = Block::bordered()
        .title("Player Name")
        .title_bottom("(enter) save / (esc) skip")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );

    Ok(())
}
