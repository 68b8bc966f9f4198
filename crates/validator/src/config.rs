//! Validator configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a [`ValidatorConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The root placeholder must not be empty.
    #[error("root placeholder must not be empty")]
    EmptyRoot,

    /// The JSON document could not be parsed.
    #[error("invalid validator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for a [`GraphValidator`](crate::GraphValidator).
///
/// Every field is optional when deserializing:
///
/// ```rust,ignore
/// let config = ValidatorConfig::from_json(r#"{ "root": "order", "max_depth": 16 }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Placeholder every error path starts with.
    pub root: String,

    /// Deepest container the walk enters, counting path segments from the
    /// root (depth 0). `None` walks without a bound and relies on the graph
    /// being acyclic.
    pub max_depth: Option<usize>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            root: "$".to_owned(),
            max_depth: None,
        }
    }
}

impl ValidatorConfig {
    /// Parses and checks a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the root placeholder that starts every path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Bounds how deep the walk descends.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Checks the settings for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.is_empty() {
            return Err(ConfigError::EmptyRoot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(
            ValidatorConfig::from_json("{}").unwrap(),
            ValidatorConfig::default()
        );
    }

    #[test]
    fn partial_document() {
        let config = ValidatorConfig::from_json(r#"{ "max_depth": 4 }"#).unwrap();
        assert_eq!(config.root, "$");
        assert_eq!(config.max_depth, Some(4));
    }

    #[test]
    fn empty_root_is_rejected() {
        let err = ValidatorConfig::from_json(r#"{ "root": "" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRoot));
        assert!(matches!(
            ValidatorConfig::default().with_root("").validate(),
            Err(ConfigError::EmptyRoot)
        ));
    }

    #[test]
    fn malformed_document() {
        let err = ValidatorConfig::from_json("{ root: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid validator config"));
    }
}
