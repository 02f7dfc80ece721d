//! File-backed logging setup.
//!
//! The terminal is owned by the user interface, so log records are written to a file instead of
//! standard error.

use std::fs::{self, OpenOptions};

use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::{Builder, Target};
use log::info;

use crate::config::Config;

/// Installs the global logger when a log file is configured.
///
/// The configured level can be overridden through the `RUST_LOG` environment variable. Without a
/// log file this does nothing and every log macro becomes a no-op.
///
/// # Errors
///
/// This function may return errors if the log file cannot be opened or a global logger is
/// already installed.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).wrap_err_with(|| {
                format!("failed to create log directory {}", parent.display())
            })?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to install logger")?;

    info!("{} {} starting", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_without_log_file_is_noop() {
        let config = Config::default();

        assert!(init(&config).is_ok());
        assert!(init(&config).is_ok(), "repeated calls must not fail");
    }

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            log_file: Some(dir.path().to_path_buf()),
            ..Config::default()
        };

        assert!(init(&config).is_err(), "a directory cannot be opened as log file");
    }
}
