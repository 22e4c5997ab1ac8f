//! Error types for table building and rendering.
//!
//! The build walk itself never fails — the layout algorithm is total over
//! the nested-data domain. Errors here come from three places only:
//!
//! - **I/O**: the output sink failed during `render`. Closed-pipe
//!   conditions are suppressed at the render boundary and never surface
//!   here; anything else is fatal.
//! - **Configuration**: an unknown color selector, rejected eagerly when
//!   options are parsed.
//! - **Conversion**: a `T: Serialize` input could not be turned into a
//!   [`Value`](crate::Value).

use std::fmt;
use std::io;
use thiserror::Error;

/// Errors that can occur while converting, building, or rendering tables.
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink failed during rendering (closed pipes excluded).
    #[error("write error: {0}")]
    Io(#[from] io::Error),

    /// An unrecognized color selector was supplied.
    #[error("unknown color option: {0} (expected auto, on, or off)")]
    UnknownColorChoice(String),

    /// A Rust value of this kind cannot be represented as nested data.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised through the serde bridge.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for values the serde bridge
    /// cannot represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multitable::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
