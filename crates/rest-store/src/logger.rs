//! Logging setup using simplelog
//!
//! Logs always go to stderr. With `log_file` configured they are also written
//! to that file. A relative path is taken from the cache directory
//! (~/.cache/rest-store/ on Linux) and a directory gets a timestamped file
//! per run.

use anyhow::{Context, Result};
use rest_store_config::AppConfig;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Resolve the configured log file for this run
fn log_file_path(configured: &Path) -> Result<PathBuf> {
    let path = if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        rest_store_config::cache_dir()?.join(configured)
    };

    if path.is_dir() {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        return Ok(path.join(format!("rest-store-{}.log", timestamp)));
    }

    Ok(path)
}

/// Parse a `RUST_LOG`-style level name
fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize logging
///
/// Level comes from `RUST_LOG`, defaulting to info.
/// Returns the path of the log file when file logging is enabled.
pub fn init(config: &AppConfig) -> Result<Option<PathBuf>> {
    let level = std::env::var("RUST_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Info);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let log_file = if let Some(configured) = &config.log_file {
        let path = log_file_path(configured)?;
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        loggers.push(WriteLogger::new(level, log_config, file));
        Some(path)
    } else {
        None
    };

    CombinedLogger::init(loggers).context("Failed to initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level(" warn "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("rest_store=debug"), LevelFilter::Info);
    }

    #[test]
    fn test_relative_log_file_is_in_cache_dir() {
        let path = log_file_path(Path::new("run.log")).unwrap();
        assert_eq!(path, rest_store_config::cache_dir().unwrap().join("run.log"));
    }

    #[test]
    fn test_log_directory_gets_timestamped_file() {
        let dir = std::env::temp_dir();
        let path = log_file_path(&dir).unwrap();
        assert!(path.starts_with(&dir));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("log"));
    }
}
