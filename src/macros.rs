//! Level macros.
//!
//! Each macro takes a logger (or a reference to one) followed either by a
//! format string and its arguments, or, after a `;`, by values rendered with
//! their `Debug` representation and separated by spaces.
//!
//! ```
//! use prio_logger::{Build, LoggerOptions};
//! use prio_logger::sink::MemorySink;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = LoggerOptions::new().level("debug").sink(sink.clone()).build().unwrap();
//!
//! prio_logger::debug!(logger, "hello {}", "world");
//! prio_logger::debug!(logger; "peer", Some(7));
//! assert_eq!(sink.contents(), "<15>hello world\n<15>\"peer\" Some(7)\n");
//! ```

/// Logs at the given `Severity`.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr; $($value:expr),+ $(,)?) => {{
        use $crate::Leveled as _;
        $logger.emit(
            $severity,
            format_args!(
                "{}",
                $crate::Inspected(&[$(&$value as &dyn ::std::fmt::Debug),+])
            ),
        )
    }};
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        use $crate::Leveled as _;
        $logger.emit($severity, format_args!($($arg)+))
    }};
}

/// Logs at `emerg` level.
#[macro_export]
macro_rules! emerg {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::Emerg; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::Emerg, $($arg)+)
    };
}

/// Logs at `alert` level.
#[macro_export]
macro_rules! alert {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::Alert; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::Alert, $($arg)+)
    };
}

/// Logs at `crit` level.
#[macro_export]
macro_rules! crit {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::Crit; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::Crit, $($arg)+)
    };
}

/// Logs at `error` level.
#[macro_export]
macro_rules! error {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::Error; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::Error, $($arg)+)
    };
}

/// Logs at `warning` level.
#[macro_export]
macro_rules! warning {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::Warning; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::Warning, $($arg)+)
    };
}

/// Logs at `notice` level.
#[macro_export]
macro_rules! notice {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::Notice; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::Notice, $($arg)+)
    };
}

/// Logs at `info` level.
#[macro_export]
macro_rules! info {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::Info; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::Info, $($arg)+)
    };
}

/// Logs at `debug` level.
#[macro_export]
macro_rules! debug {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::Debug; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::Debug, $($arg)+)
    };
}

/// Alias of `notice!`.
#[macro_export]
macro_rules! log {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::LOG; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::LOG, $($arg)+)
    };
}

/// Alias of `warning!`.
#[macro_export]
macro_rules! warn {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::types::Severity::WARN; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::types::Severity::WARN, $($arg)+)
    };
}
