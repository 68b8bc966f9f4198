//! Path-qualified validation errors.
//!
//! String fields use `Cow<'static, str>` so the stock codes and the fixed
//! reasons never allocate.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Machine-readable error codes emitted by the graph walk.
pub mod codes {
    /// A required value was absent or `None`.
    pub const REQUIRED: &str = "required";
    /// A collection held fewer items than its rule allows.
    pub const MIN_ITEMS: &str = "min_items";
    /// A collection held more items than its rule allows.
    pub const MAX_ITEMS: &str = "max_items";
    /// The walk reached the configured depth bound.
    pub const MAX_DEPTH: &str = "max_depth";
}

const REASON_ABSENT: &str = "required, found null/absent";
const REASON_NULL: &str = "required, found null";

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One violation found during a walk.
///
/// `path` locates the offending value from the root placeholder, e.g.
/// `$.Orders[3].Customer`. `reason` is the human-readable text used by
/// [`format_errors`](crate::format_errors); `code` and `params` carry the
/// same information for programmatic handling.
///
/// # Examples
///
/// ```rust,ignore
/// use bulwark_validator::{ValidationError, codes};
///
/// let error = ValidationError::max_items("$.Tags", 5, 6);
/// assert_eq!(error.code, codes::MAX_ITEMS);
/// assert_eq!(error.to_string(), "$.Tags: maximum item count is 5, found 6");
/// assert_eq!(error.param("actual"), Some("6"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code, one of [`codes`] for errors produced by the walk.
    pub code: Cow<'static, str>,

    /// Locator of the offending value.
    pub path: String,

    /// Human-readable reason.
    pub reason: Cow<'static, str>,

    /// Ordered key/value parameters, e.g. `[("min", "2"), ("actual", "0")]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates an error with an arbitrary code and reason.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        path: impl Into<String>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: code.into(),
            path: path.into(),
            reason: reason.into(),
            params: Vec::new(),
        }
    }

    /// A required value was absent (null reference or `None` of a reference-like type).
    pub fn required_absent(path: impl Into<String>) -> Self {
        Self::new(codes::REQUIRED, path, REASON_ABSENT)
    }

    /// A required nullable scalar was `None`.
    pub fn required_null(path: impl Into<String>) -> Self {
        Self::new(codes::REQUIRED, path, REASON_NULL)
    }

    /// A collection fell short of its minimum item count.
    pub fn min_items(path: impl Into<String>, min: usize, actual: usize) -> Self {
        Self::new(
            codes::MIN_ITEMS,
            path,
            format!("minimum item count is {min}, found {actual}"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// A collection exceeded its maximum item count.
    pub fn max_items(path: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::new(
            codes::MAX_ITEMS,
            path,
            format!("maximum item count is {max}, found {actual}"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// The walk stopped at a node nested deeper than `max`.
    pub fn max_depth(path: impl Into<String>, max: usize) -> Self {
        Self::new(
            codes::MAX_DEPTH,
            path,
            format!("maximum depth of {max} exceeded"),
        )
        .with_param("max", max.to_string())
    }

    /// Appends a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}
