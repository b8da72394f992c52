//! A leveled logger which writes lines prefixed with their syslog priority
//! (`<PRI>message`) when its output is piped, and plain lines when its output
//! is an interactive terminal.
//!
//! The prefix is what `logger --prio-prefix` and similar relays expect, so a
//! program can simply pipe its output into one of them:
//!
//! ```text
//! $ my-app | logger -t my-app --prio-prefix
//! ```
//!
//! # Examples
//!
//! Creates a logger via `LoggerOptions`:
//!
//! ```
//! use prio_logger::{Build, Leveled, LoggerOptions};
//! use prio_logger::sink::MemorySink;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = LoggerOptions::new()
//!     .facility("user")
//!     .level("debug")
//!     .sink(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! logger.debug(format_args!("hello {}", "world"));
//! prio_logger::warning!(logger, "{} retries left", 2);
//! assert_eq!(sink.contents(), "<15>hello world\n<12>2 retries left\n");
//! ```
//!
//! Creates a logger from configuration text (TOML):
//!
//! ```
//! use prio_logger::{Config, LoggerConfig};
//!
//! let config = LoggerConfig::from_toml_str(r#"
//! facility = "daemon"
//! level = "info"
//! destination = "stderr"
//! "#).unwrap();
//!
//! let logger = config.build_logger().unwrap();
//! prio_logger::info!(logger, "Hello World!");
//! ```
//!
//! Uses the process-wide logger:
//!
//! ```
//! use prio_logger::{default_logger, LoggerOptions};
//!
//! default_logger().configure(LoggerOptions::new().facility("local0")).unwrap();
//! prio_logger::notice!(default_logger(), "started");
//! ```
#![warn(missing_docs)]
#[macro_use]
extern crate trackable;

pub use build::{Build, LoggerOptions};
pub use config::{Config, Destination, LoggerConfig};
pub use error::{Error, ErrorKind};
pub use facility::{facilities, Facility};
pub use logger::{default_logger, Leveled, Logger};
pub use misc::{inspect, set_stdlog_logger};
#[doc(hidden)]
pub use misc::Inspected;
pub use types::levels;

pub mod file;
pub mod sink;
pub mod types;

mod build;
mod config;
mod drain;
mod error;
mod facility;
mod logger;
mod macros;
mod misc;

/// A specialized `Result` type for this crate.
pub type Result<T> = ::std::result::Result<T, Error>;
