//! This module provides the logging hooks for ese-core.
//!
//! Everything in the crate logs through the `log` facade. Nothing is printed
//! unless the host asks for it: `init_logging` installs an `env_logger` backend
//! once per process, configured from a `LoggingConfig`.

use std::fs::OpenOptions;
use std::io::Write;

use crate::config::LoggingConfig;
use crate::error::EseError;

/// Logs a structured key-value metric line at `debug` level, only in debug builds.
///
/// # Example
/// ```
/// use ese_core::log_metric;
/// let bytes = 11;
/// log_metric!("event"="analyze_text", "bytes"=bytes);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            log::debug!("ESE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

/// Installs the process-wide logger described by `config`.
///
/// Returns `Ok(true)` if this call installed the logger and `Ok(false)` if a
/// logger was already in place, in which case `config` is ignored.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, EseError> {
    let level = config.level_filter()?;

    let mut builder = env_logger::Builder::new();
    builder.is_test(false);
    builder.filter_level(level);

    // Custom formatter: just print the level and message
    builder.format(|buf, record| {
        writeln!(buf, "[{}] {}", record.level(), record.args())?;
        buf.flush()?;
        Ok(())
    });

    if let Some(filename) = &config.log_file {
        let file = OpenOptions::new().append(true).create(true).open(filename)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    Ok(builder.try_init().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_level_fails_before_touching_the_logger() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            log_file: None,
        };
        assert!(matches!(
            init_logging(&config),
            Err(EseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unopenable_log_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            // A directory cannot be opened for appending.
            log_file: Some(dir.path().to_string_lossy().into_owned()),
        };
        assert!(matches!(init_logging(&config), Err(EseError::Io(_))));
    }

    #[test]
    fn test_second_install_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ese.log");
        let config = LoggingConfig {
            level: "debug".to_string(),
            log_file: Some(path.to_string_lossy().into_owned()),
        };

        // Another test may have installed the logger first.
        let _ = init_logging(&config).unwrap();
        assert!(!init_logging(&config).unwrap());
        assert!(path.exists());
    }
}
