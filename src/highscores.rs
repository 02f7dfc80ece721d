//! Persistent high-score table.
//!
//! Scores live in a plain UTF-8 file with one `name,seconds` record per line. The file is only
//! ever appended to; reading it back skips any line that is not a well-formed record, so manual
//! edits or a half-written last line never break the table.

use std::{
    fmt,
    fs::{self, OpenOptions},
    io::{ErrorKind, Write as _},
    path::{Path, PathBuf},
    str::from_utf8,
};

use color_eyre::eyre::{Result, WrapErr as _};
use log::{debug, info};

/// Name recorded when the player does not enter one.
pub const ANONYMOUS: &str = "Anonymous";

/// Single high-score record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScoreEntry {
    /// Name the player entered.
    pub name: String,
    /// Time taken to reach the end tile, in whole seconds.
    pub seconds: u64,
}

impl ScoreEntry {
    /// Builds a record from its fields.
    #[must_use]
    pub const fn new(name: String, seconds: u64) -> Self {
        Self { name, seconds }
    }

    /// Parses one line of the score file.
    ///
    /// Returns [`None`] unless the line holds exactly two comma-separated fields with a
    /// non-negative integer in the second one. Whitespace around the number is not accepted.
    fn parse_record(line: &str) -> Option<Self> {
        let mut fields = line.split(',');
        let name = fields.next()?;
        let seconds = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        let seconds = seconds.parse().ok()?;
        Some(Self::new(name.to_owned(), seconds))
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{},{}", self.name, self.seconds)
    }
}

/// Cleans a player name so it fits in a single record.
///
/// Commas would split the record into extra fields and control characters would break it across
/// lines, so both become spaces. A name that ends up blank is replaced with [`ANONYMOUS`].
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|character| {
            if character == ',' || character.is_control() {
                ' '
            } else {
                character
            }
        })
        .collect();
    let trimmed = cleaned.trim();

    if trimmed.is_empty() {
        ANONYMOUS.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Message shown in place of an empty high-score table.
pub const NO_SCORES: &str = "No high scores yet";

/// Formats records as a ranked list, one line per record starting at rank 1.
#[must_use]
pub fn ranking_lines(entries: &[ScoreEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {} - {} seconds", index + 1, entry.name, entry.seconds))
        .collect()
}

/// Append-only score file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreStore {
    /// Location of the backing file.
    path: PathBuf,
}

impl ScoreStore {
    /// Creates a store backed by the file at `path`. The file does not need to exist yet.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a record to the score file.
    ///
    /// The name goes through [`sanitize_name`] first. The file and its parent directories are
    /// created when missing; existing records are never touched.
    ///
    /// # Errors
    ///
    /// This function may return errors if the directories cannot be created or the file cannot be
    /// opened or written.
    pub fn append(&self, name: &str, seconds: u64) -> Result<ScoreEntry> {
        let entry = ScoreEntry::new(sanitize_name(name), seconds);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).wrap_err_with(|| {
                    format!("failed to create score directory {}", parent.display())
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .wrap_err_with(|| format!("failed to open score file {}", self.path.display()))?;
        writeln!(file, "{entry}")
            .wrap_err_with(|| format!("failed to write score file {}", self.path.display()))?;

        info!("recorded score {entry} in {}", self.path.display());

        Ok(entry)
    }

    /// Reads every well-formed record, in file order.
    ///
    /// A missing file holds no records. Lines that are not valid UTF-8 are skipped like any
    /// other malformed record.
    ///
    /// # Errors
    ///
    /// This function may return errors if the file exists but cannot be read.
    pub fn load(&self) -> Result<Vec<ScoreEntry>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err).wrap_err_with(|| {
                    format!("failed to read score file {}", self.path.display())
                })
            }
        };

        Ok(contents
            .split(|byte| *byte == b'\n')
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .filter_map(|(index, line)| {
                let entry = from_utf8(line)
                    .ok()
                    .map(|text| text.strip_suffix('\r').unwrap_or(text))
                    .and_then(ScoreEntry::parse_record);
                if entry.is_none() {
                    debug!("skipping malformed score record on line {}", index + 1);
                }
                entry
            })
            .collect())
    }

    /// Returns the `count` best records, fastest first.
    ///
    /// Records with equal times keep their file order.
    ///
    /// # Errors
    ///
    /// See [`ScoreStore::load`].
    pub fn top(&self, count: usize) -> Result<Vec<ScoreEntry>> {
        let mut entries = self.load()?;
        entries.sort_by_key(|entry| entry.seconds);
        entries.truncate(count);

        Ok(entries)
    }
}
