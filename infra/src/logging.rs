//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over `LoggingConfig::level`. Console output
//! uses the configured format; the optional file sink never uses ANSI colors.

use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use mc_shared::config::{FileLoggingConfig, LogFormat, LoggingConfig};

use crate::InfrastructureError;

/// Install the global subscriber
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| InfrastructureError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let file_layer = config
        .file
        .as_ref()
        .map(open_log_file)
        .transpose()?
        .map(|file| format_layer(config.format, Mutex::new(file), false, config.source_location));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(format_layer(
            config.format,
            std::io::stdout,
            config.colored,
            config.source_location,
        ))
        .with(file_layer)
        .try_init();

    match installed {
        Ok(()) => {
            tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialized");
        }
        Err(_) => {
            tracing::debug!("Tracing subscriber already installed; keeping it");
        }
    }

    Ok(())
}

fn format_layer<S, W>(
    format: LogFormat,
    writer: W,
    ansi: bool,
    source_location: bool,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_file(source_location)
        .with_line_number(source_location)
        .with_target(true);

    match format {
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}

fn open_log_file(config: &FileLoggingConfig) -> Result<File, InfrastructureError> {
    fs::create_dir_all(&config.directory).map_err(|e| {
        InfrastructureError::Config(format!(
            "Cannot create log directory {}: {}",
            config.directory.display(),
            e
        ))
    })?;

    let path = config.directory.join(format!("{}.log", config.prefix));
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| InfrastructureError::Config(format!("Cannot open log file {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_directory() {
        let directory = std::env::temp_dir().join(format!("mc-logs-{}", uuid::Uuid::new_v4()));
        let config = FileLoggingConfig {
            directory: directory.clone(),
            prefix: "mentorconnect".to_string(),
        };

        open_log_file(&config).unwrap();
        assert!(directory.join("mentorconnect.log").exists());

        fs::remove_dir_all(directory).ok();
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig {
            format: LogFormat::Compact,
            ..LoggingConfig::default()
        };

        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
    }
}
