use trackable::error::ErrorKind as TrackableErrorKind;
use trackable::error::TrackableError;

/// The error type for this crate.
pub type Error = TrackableError<ErrorKind>;

/// A list of error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A facility that is out of range, unknown, or of an unsupported shape.
    ///
    /// Carries the rejected value.
    InvalidFacility(String),

    /// A level name that is unknown, or a level of an unsupported shape.
    ///
    /// Carries the rejected value.
    InvalidLevel(String),

    /// Invalid input.
    Invalid,

    /// Unknown error.
    Other,
}
impl TrackableErrorKind for ErrorKind {}
