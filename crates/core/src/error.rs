//! Error types for tabsearch.

use alloc::string::String;
use core::fmt;
use serde_json::Value;

/// Result type alias for tabsearch operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for building, compiling and executing queries.
#[derive(Debug)]
pub enum Error {
    /// The index mapping is missing, malformed or has no fields.
    Schema {
        message: String,
    },
    /// An operand of the wrong kind was passed to a builder method or combinator.
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    /// A column name is not part of the index mapping.
    ColumnNotFound {
        index: String,
        column: String,
    },
    /// An argument value is out of range.
    InvalidValue {
        message: String,
    },
    /// The server answered with a non-success status.
    /// Carries the server's `error` object when the body was parseable.
    Server {
        reason: Option<Value>,
    },
    /// The response lacks the member required by the execution mode.
    MalformedResponse {
        expected: String,
    },
    /// The request could not be sent or its body could not be read.
    Transport {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Schema { message } => {
                write!(f, "Schema error: {}", message)
            }
            Error::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
            Error::ColumnNotFound { index, column } => {
                write!(f, "Column {} not found in index {}", column, index)
            }
            Error::InvalidValue { message } => {
                write!(f, "Invalid value: {}", message)
            }
            Error::Server { reason: Some(reason) } => {
                write!(f, "Server error: {}", reason)
            }
            Error::Server { reason: None } => {
                write!(f, "Server error: no reason given")
            }
            Error::MalformedResponse { expected } => {
                write!(f, "Malformed response: missing {}", expected)
            }
            Error::Transport { message } => {
                write!(f, "Transport error: {}", message)
            }
        }
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates a schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        Error::Schema {
            message: message.into(),
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &'static str, got: &'static str) -> Self {
        Error::TypeMismatch { expected, got }
    }

    /// Creates a column not found error.
    pub fn column_not_found(index: impl Into<String>, column: impl Into<String>) -> Self {
        Error::ColumnNotFound {
            index: index.into(),
            column: column.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Error::InvalidValue {
            message: message.into(),
        }
    }

    /// Creates a server error.
    pub fn server(reason: Option<Value>) -> Self {
        Error::Server { reason }
    }

    /// Creates a malformed response error.
    pub fn malformed_response(expected: impl Into<String>) -> Self {
        Error::MalformedResponse {
            expected: expected.into(),
        }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport {
            message: message.into(),
        }
    }

    /// Returns true if this error came back from the remote service.
    pub fn is_server(&self) -> bool {
        matches!(self, Error::Server { .. })
    }
}
