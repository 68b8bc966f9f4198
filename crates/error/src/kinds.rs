//! Stock error kinds for argument and state guards.

use crate::constructor::{Cause, ConstructorSet, ErrorKind};
use thiserror::Error;

const DEFAULT_ARGUMENT_MESSAGE: &str = "value does not fall within the expected range";
const DEFAULT_NULL_MESSAGE: &str = "value cannot be null";
const DEFAULT_OPERATION_MESSAGE: &str = "operation is not valid due to the current state of the object";

/// An argument failed a precondition.
#[derive(Debug, Error)]
#[error("{message}{}", param_suffix(.param.as_deref()))]
pub struct ArgumentError {
    message: String,
    param: Option<String>,
    #[source]
    cause: Option<Cause>,
}

impl ArgumentError {
    /// Creates an error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            param: None,
            cause: None,
        }
    }

    /// Names the offending parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Attaches the underlying cause.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cause(mut self, cause: Option<Cause>) -> Self {
        self.cause = cause;
        self
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending parameter, if named.
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

impl Default for ArgumentError {
    fn default() -> Self {
        Self::new(DEFAULT_ARGUMENT_MESSAGE)
    }
}

impl ErrorKind for ArgumentError {
    fn constructors() -> ConstructorSet<Self> {
        ConstructorSet::new()
            .no_args(Self::default)
            .message(Self::new)
            .message_with_cause(|message, cause| Self::new(message).with_cause(cause))
            .public(|(message, param): (String, String)| Self::new(message).with_param(param))
    }
}

/// A required argument was absent.
///
/// Its single-string constructor takes the *parameter name*, so the message
/// path resolves to the `(message, cause)` shape instead.
#[derive(Debug, Error)]
#[error("{message}{}", param_suffix(.param.as_deref()))]
pub struct ArgumentNullError {
    message: String,
    param: Option<String>,
    #[source]
    cause: Option<Cause>,
}

impl ArgumentNullError {
    /// Creates an error naming the absent parameter.
    pub fn for_param(param: impl Into<String>) -> Self {
        Self {
            message: DEFAULT_NULL_MESSAGE.to_string(),
            param: Some(param.into()),
            cause: None,
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The absent parameter, if named.
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

impl Default for ArgumentNullError {
    fn default() -> Self {
        Self {
            message: DEFAULT_NULL_MESSAGE.to_string(),
            param: None,
            cause: None,
        }
    }
}

impl ErrorKind for ArgumentNullError {
    fn constructors() -> ConstructorSet<Self> {
        ConstructorSet::new()
            .no_args(Self::default)
            .public(|(param,): (String,)| Self::for_param(param))
            .message_with_cause(|message, cause| Self {
                message,
                param: None,
                cause,
            })
            .public(|(param, message): (String, String)| Self {
                message,
                param: Some(param),
                cause: None,
            })
    }
}

/// A call was made while the receiver was in the wrong state.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InvalidOperationError {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl InvalidOperationError {
    /// Creates an error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for InvalidOperationError {
    fn default() -> Self {
        Self::new(DEFAULT_OPERATION_MESSAGE)
    }
}

impl ErrorKind for InvalidOperationError {
    fn constructors() -> ConstructorSet<Self> {
        ConstructorSet::new()
            .no_args(Self::default)
            .message(Self::new)
            .message_with_cause(|message, cause| Self { message, cause })
    }
}

fn param_suffix(param: Option<&str>) -> String {
    param.map_or_else(String::new, |p| format!(" (parameter '{p}')"))
}
