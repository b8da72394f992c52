use crate::build::LoggerOptions;
use crate::file::FileSink;
use crate::sink::{Stderr, Stdout};
use crate::types::Setting;
use crate::{Build, ErrorKind, Logger, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trackable::error::ErrorKindExt;

/// Configuration of a logger builder.
pub trait Config {
    /// Logger builder.
    type Builder: Build;

    /// Makes a logger builder associated with this configuration.
    fn try_to_builder(&self) -> Result<Self::Builder>;

    /// Builds a logger with this configuration.
    fn build_logger(&self) -> Result<Logger> {
        let builder = track!(self.try_to_builder())?;
        let logger = track!(builder.build())?;
        Ok(logger)
    }
}

/// The configuration of `LoggerOptions`.
///
/// Every field is optional. `facility` and `level` accept names or numbers;
/// values of any other shape are kept and rejected when the logger is built.
///
/// # Examples
///
/// ```
/// extern crate prio_logger;
/// extern crate serdeconv;
///
/// use prio_logger::{Config, LoggerConfig};
///
/// let toml = r#"
/// facility = "local3"
/// level = "info"
/// destination = "stderr"
/// "#;
/// let config: LoggerConfig = serdeconv::from_toml_str(toml).unwrap();
/// let logger = config.build_logger().unwrap();
/// assert_eq!(logger.facility(), 19);
/// assert_eq!(logger.level(), 6);
/// ```
///
/// File destination:
///
/// ```
/// extern crate prio_logger;
/// extern crate serdeconv;
///
/// use prio_logger::LoggerConfig;
///
/// let toml = r#"
/// facility = 3
/// destination = { file = "/var/log/app.log" }
/// "#;
/// let _config: LoggerConfig = serdeconv::from_toml_str(toml).unwrap();
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(default)]
pub struct LoggerConfig {
    /// Facility name or number (`1..=23`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Setting>,

    /// Level name or number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Setting>,

    /// Output destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
}
impl LoggerConfig {
    /// Creates a new `LoggerConfig` with nothing set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Parses a TOML configuration.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        track!(serdeconv::from_toml_str(toml).map_err(|e| ErrorKind::Invalid.cause(e)))
    }
}
impl Config for LoggerConfig {
    type Builder = LoggerOptions;
    fn try_to_builder(&self) -> Result<Self::Builder> {
        let mut options = LoggerOptions::new();
        if let Some(facility) = &self.facility {
            options.facility(facility.clone());
        }
        if let Some(level) = &self.level {
            options.level(level.clone());
        }
        match self.destination {
            Some(Destination::Stdout) => {
                options.sink(Stdout);
            }
            Some(Destination::Stderr) => {
                options.sink(Stderr);
            }
            Some(Destination::File(ref path)) => {
                options.sink(FileSink::new(path));
            }
            None => {}
        }
        Ok(options)
    }
}

/// The destination to which log lines will be written.
///
/// # Examples
///
/// The default value:
///
/// ```
/// use prio_logger::Destination;
///
/// assert_eq!(Destination::default(), Destination::Stdout);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Standard output.
    Stdout,

    /// Standard error.
    Stderr,

    /// A file, appended to.
    File(PathBuf),
}
impl Default for Destination {
    fn default() -> Self {
        Destination::Stdout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Leveled;
    use std::fs;

    #[test]
    fn empty_config_builds_the_default_logger() {
        let logger = LoggerConfig::from_toml_str("").unwrap().build_logger().unwrap();
        assert_eq!(logger.facility(), 1);
        assert_eq!(logger.level(), 5);
    }

    #[test]
    fn numbers_and_names_are_accepted() {
        let config = LoggerConfig::from_toml_str("facility = 2\nlevel = \"debug\"").unwrap();
        assert_eq!(config.facility, Some(Setting::Number(2)));
        assert_eq!(config.level, Some(Setting::Name("debug".to_owned())));
        let logger = config.build_logger().unwrap();
        assert_eq!(logger.facility(), 2);
        assert_eq!(logger.level(), 7);
    }

    #[test]
    fn structured_values_are_rejected_when_building() {
        let config = LoggerConfig::from_toml_str("facility = { name = \"user\" }").unwrap();
        let e = config.build_logger().unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::InvalidFacility("{..}".to_owned()));

        let config = LoggerConfig::from_toml_str("level = [7]").unwrap();
        let e = config.build_logger().unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::InvalidLevel("[..]".to_owned()));

        let config = LoggerConfig::from_toml_str("facility = true").unwrap();
        let e = config.build_logger().unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::InvalidFacility("true".to_owned()));
    }

    #[test]
    fn malformed_text_is_invalid() {
        let e = LoggerConfig::from_toml_str("facility = ").unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::Invalid);
    }

    #[test]
    fn file_destination_writes_prefixed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut config = LoggerConfig::new();
        config.facility = Some(Setting::from("local0"));
        config.destination = Some(Destination::File(path.clone()));

        let logger = config.build_logger().unwrap();
        logger.error(format_args!("disk full"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<131>disk full\n");
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let mut config = LoggerConfig::new();
        config.facility = Some(Setting::from("cron"));
        config.level = Some(Setting::from(6i64));
        let toml = serdeconv::to_toml_string(&config).unwrap();
        let parsed = LoggerConfig::from_toml_str(&toml).unwrap();
        assert_eq!(parsed.facility, config.facility);
        assert_eq!(parsed.level, config.level);
    }
}
