use crate::config::LoggingSettings;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt::writer::MakeWriterExt, EnvFilter};

/// Location of the log file, if file logging is enabled
pub fn log_file_path(settings: &LoggingSettings) -> Option<PathBuf> {
    if settings.directory.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(&settings.directory).join(&settings.file_name))
}

/// Install the process-wide tracing subscriber
///
/// Must be called once, before the server starts. `RUST_LOG` takes precedence
/// over the configured level. Output goes to stdout and, unless disabled, to
/// the configured log file.
pub fn init(settings: &LoggingSettings) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let file = match log_file_path(settings) {
        Some(path) => {
            fs::create_dir_all(&settings.directory)?;
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(Arc::new(file))
        }
        None => None,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match (settings.format.as_str(), file) {
        ("pretty", Some(file)) => subscriber
            .pretty()
            .with_writer(io::stdout.and(file))
            .init(),
        ("pretty", None) => subscriber.pretty().init(),
        (_, Some(file)) => subscriber
            .compact()
            .with_writer(io::stdout.and(file))
            .init(),
        (_, None) => subscriber.compact().init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(directory: &str) -> LoggingSettings {
        LoggingSettings {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: directory.to_string(),
            file_name: "dopc.log".to_string(),
        }
    }

    #[test]
    fn test_log_file_path() {
        assert_eq!(
            log_file_path(&settings("logs")),
            Some(PathBuf::from("logs").join("dopc.log"))
        );
    }

    #[test]
    fn test_empty_directory_disables_file() {
        assert_eq!(log_file_path(&settings("")), None);
    }
}
