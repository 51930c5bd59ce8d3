//! File logging with daily rotation.
//!
//! Logs never go to stdout, which carries the resolved configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::macros::format_description;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Prefix of log file names.
const LOG_PREFIX: &str = "tokenwind";

/// Rotated files older than this are removed at startup.
const RETENTION: Duration = Duration::from_secs(2 * 24 * 60 * 60);

/// Initialize logging into `log_dir`.
///
/// `RUST_LOG` directives are honored on top of the debug default.
pub fn init(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let pruned = prune_logs(log_dir, RETENTION)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_PREFIX);

    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(
        local_offset,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    );

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(Level::DEBUG.into()))
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::debug!(dir = %log_dir.display(), pruned, "Logging initialized");
    Ok(())
}

/// Remove rotated log files older than `max_age`; returns how many were removed.
///
/// Files without the log prefix are left alone.
pub fn prune_logs(log_dir: &Path, max_age: Duration) -> Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }

    let cutoff = SystemTime::now()
        .checked_sub(max_age)
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let mut removed = 0;

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let is_log = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_PREFIX));
        if !is_log {
            continue;
        }

        let expired = fs::metadata(&path)
            .and_then(|m| m.modified())
            .is_ok_and(|modified| modified < cutoff);
        if expired && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_prune_keeps_recent_and_foreign_files() {
        let dir = env::temp_dir().join(format!("tokenwind-logger-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let recent = dir.join("tokenwind.2026-10-17");
        let foreign = dir.join("other.log");
        fs::write(&recent, "recent").unwrap();
        fs::write(&foreign, "foreign").unwrap();

        assert_eq!(prune_logs(&dir, RETENTION).unwrap(), 0);
        assert!(recent.exists());
        assert!(foreign.exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_prune_missing_directory_is_ok() {
        let dir = env::temp_dir().join("tokenwind-logger-test-missing");
        assert_eq!(prune_logs(&dir, RETENTION).unwrap(), 0);
    }
}
