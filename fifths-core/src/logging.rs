use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::Error;

/// Default log location: `<config dir>/fifths/fifths.log`, or the temp dir.
pub fn default_log_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("fifths")
        .join("fifths.log")
}

/// Install the global file logger at the default location.
pub fn init_logging(verbose: bool) -> Result<PathBuf, Error> {
    init_logging_with_fallback(
        &default_log_path(),
        &std::env::temp_dir().join("fifths.log"),
        verbose,
    )
}

/// Install the global file logger at `primary`, or at `fallback` when
/// `primary` cannot be opened. Returns the path actually in use.
pub fn init_logging_with_fallback(
    primary: &Path,
    fallback: &Path,
    verbose: bool,
) -> Result<PathBuf, Error> {
    match init_logging_to(primary, verbose) {
        Err(Error::Io(e)) => {
            eprintln!(
                "cannot write {}: {}; logging to {}",
                primary.display(),
                e,
                fallback.display()
            );
            init_logging_to(fallback, verbose)?;
            Ok(fallback.to_path_buf())
        }
        other => other.map(|_| primary.to_path_buf()),
    }
}

/// Install the global file logger appending to `path`. Debug level when
/// `verbose`, warnings only otherwise. Fails if a logger is already set.
pub fn init_logging_to(path: &Path, verbose: bool) -> Result<(), Error> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    WriteLogger::init(level, Config::default(), file)?;

    log::info!("fifths logging started (level: {:?})", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_path_is_under_fifths() {
        assert!(default_log_path().ends_with("fifths/fifths.log"));
    }
}
