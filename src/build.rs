use crate::sink::Sink;
use crate::types::Setting;
use crate::{Logger, Result};
use std::fmt;
use std::sync::Arc;

/// This trait allows to build a logger instance.
pub trait Build {
    /// Builds a logger.
    fn build(&self) -> Result<Logger>;
}

/// Options accepted by `Logger::configure`.
///
/// Every option is optional: an unset option leaves the corresponding logger
/// setting as it is.
///
/// # Examples
///
/// ```
/// use prio_logger::{Build, LoggerOptions};
///
/// let logger = LoggerOptions::new().facility("local0").level("debug").build().unwrap();
/// assert_eq!(logger.facility(), 16);
/// assert_eq!(logger.level(), 7);
/// ```
#[derive(Clone, Default)]
pub struct LoggerOptions {
    pub(crate) facility: Option<Setting>,
    pub(crate) level: Option<Setting>,
    pub(crate) sink: Option<Arc<dyn Sink>>,
}
impl LoggerOptions {
    /// Makes a new `LoggerOptions` instance with nothing set.
    pub fn new() -> Self {
        LoggerOptions::default()
    }

    /// Sets the facility, as a name (`"daemon"`) or a number in `1..=23`.
    pub fn facility(&mut self, facility: impl Into<Setting>) -> &mut Self {
        self.facility = Some(facility.into());
        self
    }

    /// Sets the level threshold, as a name (`"warning"`) or a number.
    pub fn level(&mut self, level: impl Into<Setting>) -> &mut Self {
        self.level = Some(level.into());
        self
    }

    /// Sets the destination of log lines.
    pub fn sink(&mut self, sink: impl Sink + 'static) -> &mut Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Sets an already shared destination of log lines.
    pub fn sink_arc(&mut self, sink: Arc<dyn Sink>) -> &mut Self {
        self.sink = Some(sink);
        self
    }
}
impl Build for LoggerOptions {
    fn build(&self) -> Result<Logger> {
        let logger = Logger::new();
        track!(logger.configure(self))?;
        Ok(logger)
    }
}
impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("facility", &self.facility)
            .field("level", &self.level)
            .field("sink", &self.sink.as_ref().map(|_| ".."))
            .finish()
    }
}
