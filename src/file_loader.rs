//! Maze file discovery and loading.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use rand::{seq::IndexedRandom as _, Rng};
use thiserror::Error;

use crate::level::{parse_maze, MazeGrid, ParseError};

/// File name prefix shared by all maze files.
const MAZE_FILE_PREFIX: &str = "maze";

/// File name suffix shared by all maze files.
const MAZE_FILE_SUFFIX: &str = ".txt";

/// Reasons a maze could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The maze directory holds no `maze<number>.txt` file.
    #[error("no maze files found in {}", .directory.display())]
    NoMazeFilesFound {
        /// Directory that was scanned.
        directory: PathBuf,
    },
    /// A file or directory could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// A maze file was read but is not a valid maze.
    #[error("invalid maze file {}", .path.display())]
    Parse {
        /// Path of the rejected file.
        path: PathBuf,
        /// Validation failure.
        source: ParseError,
    },
}

/// Maze file found on disk.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MazeFile {
    /// Number between the `maze` prefix and the `.txt` extension.
    pub number: u32,
    /// Full path of the file.
    pub path: PathBuf,
}

impl MazeFile {
    /// File name of the maze, used as its display label.
    #[must_use]
    pub fn label(&self) -> String {
        maze_label(&self.path)
    }
}

/// Extracts the maze number from a file name of the form `maze<number>.txt`.
///
/// Only ASCII digits are accepted between prefix and suffix, so names like `maze.txt`,
/// `maze-1.txt` or `maze1.txt.bak` yield [`None`]. A number too large for a `u32` also yields
/// [`None`] and is logged as a warning.
#[must_use]
pub fn maze_number(file_name: &str) -> Option<u32> {
    let digits = file_name
        .strip_prefix(MAZE_FILE_PREFIX)?
        .strip_suffix(MAZE_FILE_SUFFIX)?;

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    match digits.parse() {
        Ok(number) => Some(number),
        Err(err) => {
            warn!("ignoring maze file {file_name}: number {digits} is out of range: {err}");
            None
        }
    }
}

/// Display label of a maze path: its file name, or the whole path when it has none.
#[must_use]
pub fn maze_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Scans a directory for maze files.
///
/// Subdirectories and files with non UTF-8 names are skipped. A directory that does not exist
/// holds no mazes. The result is ordered by maze number.
///
/// # Errors
///
/// This function may return [`LoadError::Io`] if the directory or one of its entries cannot be
/// read.
pub fn discover_mazes(directory: &Path) -> Result<Vec<MazeFile>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: directory.to_path_buf(),
        source,
    };

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("maze directory {} does not exist", directory.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(io_error(err)),
    };

    let mut mazes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(io_error)?;
        if entry.file_type().map_err(io_error)?.is_dir() {
            continue;
        }

        let Some(number) = entry.file_name().to_str().and_then(maze_number) else {
            continue;
        };
        mazes.push(MazeFile {
            number,
            path: entry.path(),
        });
    }

    mazes.sort();
    debug!("found {} maze files in {}", mazes.len(), directory.display());

    Ok(mazes)
}

/// Picks one maze file uniformly at random.
///
/// # Errors
///
/// - [`LoadError::NoMazeFilesFound`] if the directory holds no maze file
/// - [`LoadError::Io`] if the directory cannot be scanned
pub fn choose_maze<R>(directory: &Path, rng: &mut R) -> Result<MazeFile, LoadError>
where
    R: Rng + ?Sized,
{
    let mazes = discover_mazes(directory)?;

    mazes
        .choose(rng)
        .cloned()
        .ok_or_else(|| LoadError::NoMazeFilesFound {
            directory: directory.to_path_buf(),
        })
}

/// Reads and parses a single maze file.
///
/// # Errors
///
/// - [`LoadError::Io`] if the file cannot be read
/// - [`LoadError::Parse`] if its contents are not a valid maze
pub fn load_maze(path: &Path) -> Result<MazeGrid, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_maze(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Picks a random maze file from a directory and loads it.
///
/// # Errors
///
/// See [`choose_maze`] and [`load_maze`].
pub fn load_random_maze<R>(
    directory: &Path,
    rng: &mut R,
) -> Result<(MazeFile, MazeGrid), LoadError>
where
    R: Rng + ?Sized,
{
    let file = choose_maze(directory, rng)?;
    let grid = load_maze(&file.path)?;

    info!(
        "loaded maze {} ({}x{})",
        file.path.display(),
        grid.row_count(),
        grid.column_count()
    );

    Ok((file, grid))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::{rngs::StdRng, SeedableRng as _};
    use tempfile::{tempdir, TempDir};

    use super::*;

    /// Creates a directory holding the given files.
    fn maze_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempdir().expect("failed to create temp dir");
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).expect("failed to write maze file");
        }
        dir
    }

    #[test]
    fn test_maze_number_accepts_numbered_names() {
        assert_eq!(maze_number("maze1.txt"), Some(1));
        assert_eq!(maze_number("maze42.txt"), Some(42));
        assert_eq!(maze_number("maze007.txt"), Some(7));
    }

    #[test]
    fn test_maze_number_rejects_other_names() {
        for name in [
            "maze.txt",
            "maze-1.txt",
            "mazeA.txt",
            "maze1.txt.bak",
            "Maze1.txt",
            "maze1.TXT",
            "level1.txt",
            "maze+1.txt",
            "maze99999999999.txt",
        ] {
            assert_eq!(maze_number(name), None, "{name} should not be a maze file");
        }
    }

    #[test]
    fn test_maze_number_range() {
        assert_eq!(maze_number("maze4294967295.txt"), Some(u32::MAX));
        assert_eq!(maze_number("maze4294967296.txt"), None);
    }

    #[test]
    fn test_out_of_range_number_is_not_a_maze_file() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("maze99999999999.txt"), "0*").expect("failed to write maze");

        assert!(discover_mazes(dir.path())
            .expect("scanning should succeed")
            .is_empty());
        assert!(matches!(
            choose_maze(dir.path(), &mut StdRng::seed_from_u64(7)),
            Err(LoadError::NoMazeFilesFound { .. })
        ));
    }

    #[test]
    fn test_discover_filters_and_orders() {
        let dir = maze_dir(&[
            ("maze10.txt", "0*"),
            ("maze2.txt", "0*"),
            ("maze1.txt", "0*"),
            ("notes.txt", "hello"),
            ("maze.txt", "0*"),
        ]);
        fs::create_dir(dir.path().join("maze3.txt")).expect("failed to create directory");

        let numbers: Vec<u32> = discover_mazes(dir.path())
            .expect("scan should succeed")
            .into_iter()
            .map(|file| file.number)
            .collect();

        assert_eq!(numbers, vec![1, 2, 10]);
    }

    #[test]
    fn test_missing_directory_has_no_mazes() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("nowhere");

        assert!(discover_mazes(&missing).expect("missing dir is empty").is_empty());
        assert!(matches!(
            choose_maze(&missing, &mut StdRng::seed_from_u64(1)),
            Err(LoadError::NoMazeFilesFound { .. })
        ));
    }

    #[test]
    fn test_empty_directory_reports_no_maze_files() {
        let dir = maze_dir(&[("readme.md", "no mazes here")]);

        let result = choose_maze(dir.path(), &mut StdRng::seed_from_u64(7));

        assert!(
            matches!(result, Err(LoadError::NoMazeFilesFound { ref directory }) if directory == dir.path()),
            "unexpected result {result:?}"
        );
    }

    #[test]
    fn test_choose_maze_reaches_every_file() {
        let dir = maze_dir(&[("maze1.txt", "0*"), ("maze2.txt", "0*"), ("maze3.txt", "0*")]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = BTreeSet::new();
        for _ in 0..200 {
            let file = choose_maze(dir.path(), &mut rng).expect("a maze should be chosen");
            let _ = seen.insert(file.number);
        }

        assert_eq!(seen.into_iter().collect::<Vec<u32>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_load_random_maze_parses_file() {
        let dir = maze_dir(&[("maze5.txt", "000\n010\n00*\n")]);

        let (file, grid) = load_random_maze(dir.path(), &mut StdRng::seed_from_u64(3))
            .expect("maze should load");

        assert_eq!(file.number, 5);
        assert_eq!(file.label(), "maze5.txt");
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 3);
    }

    #[test]
    fn test_load_maze_reports_parse_errors() {
        let dir = maze_dir(&[("maze1.txt", "000\n0#0\n00*\n")]);

        let result = load_maze(&dir.path().join("maze1.txt"));

        assert!(
            matches!(
                result,
                Err(LoadError::Parse {
                    source: ParseError::InvalidTileCharacter {
                        row: 1,
                        column: 1,
                        character: '#',
                    },
                    ..
                })
            ),
            "unexpected result {result:?}"
        );
    }

    #[test]
    fn test_load_maze_reports_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");

        let result = load_maze(&dir.path().join("maze9.txt"));

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_maze_label_uses_file_name() {
        assert_eq!(maze_label(Path::new("resources/mazes/maze3.txt")), "maze3.txt");
    }
}
