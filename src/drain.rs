//! `slog` integration.
use crate::logger::{Leveled, Logger};
use crate::types::Severity;
use slog::{Drain, Level, OwnedKVList, Record};
use std::result::Result as StdResult;

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Critical => Severity::Crit,
            Level::Error => Severity::Error,
            Level::Warning => Severity::Warning,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        }
    }
}

/// Records are written with their message only; key-value pairs are dropped.
impl Drain for Logger {
    type Ok = ();
    type Err = slog::Never;

    fn log(&self, record: &Record, _: &OwnedKVList) -> StdResult<Self::Ok, Self::Err> {
        self.emit(Severity::from(record.level()), *record.msg());
        Ok(())
    }

    fn is_enabled(&self, level: Level) -> bool {
        self.enabled(Severity::from(level))
    }
}

impl Logger {
    /// Turns this logger into the drain of a new `slog::Logger`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_logger::{Build, LoggerOptions};
    /// use prio_logger::sink::MemorySink;
    /// use slog::{info, o};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(MemorySink::new());
    /// let logger = LoggerOptions::new()
    ///     .facility("daemon")
    ///     .level("info")
    ///     .sink(sink.clone())
    ///     .build()
    ///     .unwrap()
    ///     .into_slog(o!());
    ///
    /// info!(logger, "listening on {}", 8080; "ignored" => true);
    /// assert_eq!(sink.contents(), "<30>listening on 8080\n");
    /// ```
    pub fn into_slog<T>(self, values: slog::OwnedKV<T>) -> slog::Logger
    where
        T: slog::SendSyncRefUnwindSafeKV + 'static,
    {
        slog::Logger::root(self, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::{Build, LoggerOptions};
    use slog::{crit, debug, o, trace, warn};
    use std::sync::Arc;

    #[test]
    fn slog_levels_map_to_syslog_severities() {
        let sink = Arc::new(MemorySink::new());
        let logger = LoggerOptions::new()
            .facility(1)
            .level(7)
            .sink(sink.clone())
            .build()
            .unwrap()
            .into_slog(o!("key" => "value"));

        crit!(logger, "down");
        warn!(logger, "slow");
        debug!(logger, "x = {}", 1);
        trace!(logger, "verbose");
        assert_eq!(
            sink.contents(),
            "<10>down\n<12>slow\n<15>x = 1\n<15>verbose\n"
        );
    }

    #[test]
    fn threshold_applies_to_slog_records() {
        let sink = Arc::new(MemorySink::new());
        let inner = LoggerOptions::new()
            .level("warning")
            .sink(sink.clone())
            .build()
            .unwrap();
        assert!(inner.is_enabled(Level::Error));
        assert!(!inner.is_enabled(Level::Info));

        let logger = inner.into_slog(o!());
        slog::info!(logger, "hidden");
        slog::error!(logger, "shown");
        assert_eq!(sink.contents(), "<11>shown\n");
    }
}
