use crate::{ErrorKind, Result};
use slog::Logger;
use slog_scope::GlobalLoggerGuard;
use std::fmt::{self, Debug, Write as _};
use trackable::error::ErrorKindExt;

/// Sets `logger` as the global `slog-scope` logger, and routes records of the
/// `log` crate facade to it.
///
/// The returned guard must be kept alive: dropping it resets the global
/// logger.
///
/// # Errors
///
/// Fails with `ErrorKind::Other` if a `log` backend was already installed, in
/// which case the global `slog-scope` logger is left as it was.
pub fn set_stdlog_logger(logger: Logger) -> Result<GlobalLoggerGuard> {
    track!(slog_stdlog::init().map_err(|e| ErrorKind::Other.cause(e)))?;
    Ok(slog_scope::set_global_logger(logger))
}

/// Renders `values` with their `Debug` representation, separated by single
/// spaces.
///
/// This is what the level macros use when they are given values instead of a
/// format string.
///
/// ```
/// use prio_logger::inspect;
///
/// assert_eq!(inspect(&[&"a", &Some(1), &[1, 2]]), r#""a" Some(1) [1, 2]"#);
/// ```
pub fn inspect(values: &[&dyn Debug]) -> String {
    Inspected(values).to_string()
}

/// `Display` adapter behind `inspect`, usable inside `format_args!`.
#[doc(hidden)]
pub struct Inspected<'a>(pub &'a [&'a dyn Debug]);
impl<'a> fmt::Display for Inspected<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_char(' ')?;
            }
            write!(f, "{:?}", v)?;
        }
        Ok(())
    }
}
