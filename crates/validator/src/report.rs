//! Validation results and their text rendering.

use crate::foundation::ValidationError;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use std::fmt;

const HEADER: &str = "Following paths failed the validation checks:";

/// Renders errors as a multi-line message.
///
/// ```text
/// {prefix} - Following paths failed the validation checks:
///  >> $.Name: required, found null/absent
///  >> $.Tags: maximum item count is 5, found 6
/// ```
///
/// The prefix part is omitted when `prefix` is `None`. An empty error list
/// renders the header alone.
#[must_use]
pub fn format_errors(prefix: Option<&str>, errors: &[ValidationError]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    if let Some(prefix) = prefix {
        out.push_str(prefix);
        out.push_str(" - ");
    }
    out.push_str(HEADER);
    for error in errors {
        // Writing into a String cannot fail.
        let _ = write!(out, "\n >> {}: {}", error.path, error.reason);
    }
    out
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// Every violation found by one walk, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Wraps `errors`, kept in order.
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// `true` iff no violation was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Violations in traversal order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the report, returning its violations.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// `(is_valid, errors)`.
    #[must_use]
    pub fn into_parts(self) -> (bool, Vec<ValidationError>) {
        (self.errors.is_empty(), self.errors)
    }

    /// `Ok(())` when valid, the report itself otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }

    /// See [`format_errors`].
    #[must_use]
    pub fn format(&self, prefix: Option<&str>) -> String {
        format_errors(prefix, &self.errors)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(None))
    }
}

impl std::error::Error for ValidationReport {}

impl IntoIterator for ValidationReport {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}
