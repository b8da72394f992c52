//! The leveled logger.
use crate::build::LoggerOptions;
use crate::sink::{ErrorChannel, Sink, Stdout};
use crate::types::Severity;
use crate::{Facility, Result};
use once_cell::sync::Lazy;
use std::fmt::{self, Write};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};


static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide logger.
///
/// It is built with the default settings on first use. Reconfiguring it is
/// visible to every caller of this function; code that needs its own
/// settings should build and pass around its own `Logger` instead.
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// The eight syslog levels, as logging methods.
///
/// Every method funnels into `emit`. `log` and `warn` are aliases which
/// dispatch `Severity::LOG` and `Severity::WARN`, the same severities as
/// `notice` and `warning`.
pub trait Leveled {
    /// Logs `args` at `severity`.
    fn emit(&self, severity: Severity, args: fmt::Arguments);

    /// System is unusable.
    fn emerg(&self, args: fmt::Arguments) {
        self.emit(Severity::Emerg, args)
    }

    /// Action must be taken immediately.
    fn alert(&self, args: fmt::Arguments) {
        self.emit(Severity::Alert, args)
    }

    /// Critical conditions.
    fn crit(&self, args: fmt::Arguments) {
        self.emit(Severity::Crit, args)
    }

    /// Error conditions.
    fn error(&self, args: fmt::Arguments) {
        self.emit(Severity::Error, args)
    }

    /// Warning conditions.
    fn warning(&self, args: fmt::Arguments) {
        self.emit(Severity::Warning, args)
    }

    /// Normal but significant condition.
    fn notice(&self, args: fmt::Arguments) {
        self.emit(Severity::Notice, args)
    }

    /// Informational messages.
    fn info(&self, args: fmt::Arguments) {
        self.emit(Severity::Info, args)
    }

    /// Debug-level messages.
    fn debug(&self, args: fmt::Arguments) {
        self.emit(Severity::Debug, args)
    }

    /// Alias of `notice`.
    fn log(&self, args: fmt::Arguments) {
        self.emit(Severity::LOG, args)
    }

    /// Alias of `warning`.
    fn warn(&self, args: fmt::Arguments) {
        self.emit(Severity::WARN, args)
    }
}

struct State {
    facility: Facility,
    level: i64,
    sink: Arc<dyn Sink>,
}

/// A logger which writes `<PRI>message` lines, or bare lines to a terminal.
///
/// # Examples
///
/// ```
/// use prio_logger::{Build, Leveled, LoggerOptions};
/// use prio_logger::sink::MemorySink;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = LoggerOptions::new().level("warning").sink(sink.clone()).build().unwrap();
///
/// logger.debug(format_args!("filtered out"));
/// logger.warning(format_args!("low disk space"));
/// assert_eq!(sink.contents(), "<12>low disk space\n");
/// ```
pub struct Logger {
    state: RwLock<State>,
}
impl Logger {
    /// `log`, as a callable shared with `notice`.
    pub const LOG: fn(&Logger, fmt::Arguments) = <Logger as Leveled>::notice;

    /// `warn`, as a callable shared with `warning`.
    pub const WARN: fn(&Logger, fmt::Arguments) = <Logger as Leveled>::warning;

    /// Makes a logger for the `user` facility, at `notice` level, writing to
    /// the standard output.
    pub fn new() -> Self {
        Logger {
            state: RwLock::new(State {
                facility: Facility::default(),
                level: i64::from(Severity::default().code()),
                sink: Arc::new(Stdout),
            }),
        }
    }

    /// Applies the options that are set, leaving the others unchanged.
    ///
    /// Each option is validated and applied on its own: a rejected facility
    /// does not prevent a valid level (or sink) from being applied. The first
    /// error found is returned.
    pub fn configure(&self, options: &LoggerOptions) -> Result<()> {
        let facility = options.facility.as_ref().map(Facility::resolve);
        let level = options.level.as_ref().map(Severity::resolve_threshold);

        let mut state = self.write_state();
        if let Some(sink) = &options.sink {
            state.sink = Arc::clone(sink);
        }
        if let Some(Ok(f)) = facility {
            state.facility = f;
        }
        if let Some(Ok(l)) = level {
            state.level = l;
        }
        drop(state);

        if let Some(Err(e)) = facility {
            return Err(track!(e));
        }
        if let Some(Err(e)) = level {
            return Err(track!(e));
        }
        Ok(())
    }

    /// The numeric facility, in `1..=23`.
    pub fn facility(&self) -> u8 {
        self.read_state().facility.code()
    }

    /// The numeric level threshold.
    pub fn level(&self) -> i64 {
        self.read_state().level
    }

    /// The current sink.
    pub fn sink(&self) -> Arc<dyn Sink> {
        Arc::clone(&self.read_state().sink)
    }

    /// Whether messages at `severity` pass the threshold.
    pub fn enabled(&self, severity: Severity) -> bool {
        i64::from(severity.code()) <= self.read_state().level
    }

    fn read_state(&self) -> RwLockReadGuard<State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
impl Default for Logger {
    fn default() -> Self {
        Logger::new()
    }
}
impl Leveled for Logger {
    fn emit(&self, severity: Severity, args: fmt::Arguments) {
        let (facility, sink) = {
            let state = self.read_state();
            if i64::from(severity.code()) > state.level {
                return;
            }
            (state.facility, Arc::clone(&state.sink))
        };

        let mut line = String::new();
        let formatted = if sink.is_terminal() {
            writeln!(line, "{}", args)
        } else {
            writeln!(line, "<{}>{}", severity.priority(facility), args)
        };
        if formatted.is_err() {
            return;
        }
        write_line(&*sink, line.as_bytes());
    }
}
impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("Logger")
            .field("facility", &state.facility)
            .field("level", &state.level)
            .finish()
    }
}

/// Writes `line`, swallowing any failure.
///
/// While the write is in progress the sink's error channel absorbs errors
/// nobody observes, so that an error reported during the write is not left
/// unhandled. Concurrent writes share the absorption until the last returns.
fn write_line(sink: &dyn Sink, line: &[u8]) {
    let _absorbing = sink.error_channel().map(ErrorChannel::absorb);
    let _ = sink.write(line);
}
