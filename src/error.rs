//! Error types for printing and value conversion.
//!
//! Rendering itself never fails: every value shape has a defined textual
//! form, and the [`crate::Value::Unsupported`] category absorbs anything
//! unrecognized. Errors can only come from two places:
//!
//! - Writing the rendered text to an [`std::io::Write`] sink
//! - Converting a `Serialize` type into a [`crate::Value`] via the serde
//!   bridge (e.g. a map with a non-scalar key)
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! // Maps keyed by anything other than a scalar cannot become a Value.
//! let bad: HashMap<Vec<i32>, i32> = HashMap::from([(vec![1], 2)]);
//! assert!(prettify::to_value(&bad).is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// All errors this crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing rendered text to the output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A map key could not be represented as a scalar [`crate::Key`].
    #[error("Unsupported map key: {0}")]
    UnsupportedKey(String),

    /// A `Serialize` implementation produced something the value model
    /// cannot hold.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised through `serde::ser::Error`.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported-key error for the serde bridge.
    pub fn unsupported_key(msg: &str) -> Self {
        Error::UnsupportedKey(msg.to_string())
    }

    /// Creates an unsupported-type error for the serde bridge.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
