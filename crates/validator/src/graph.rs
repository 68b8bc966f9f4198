//! Depth-first walk over a [`Validatable`] graph.

use crate::config::{ConfigError, ValidatorConfig};
use crate::foundation::{FieldPath, Node, Shape, Validatable, ValidationError, ValidationRule};
use crate::report::ValidationReport;

/// Validates a value with the default configuration.
///
/// The root is visited under [`ValidationRule::default`], so a `None` root
/// is valid. Use [`GraphValidator::validate_with_rule`] to require it.
pub fn validate<T: Validatable + ?Sized>(value: &T) -> ValidationReport {
    let mut walk = Walk::new(&ValidatorConfig::default());
    walk.visit(&value, &ValidationRule::default());
    walk.finish()
}

// ============================================================================
// GRAPH VALIDATOR
// ============================================================================

/// Walks object graphs and collects every rule violation.
///
/// Validation never fails: the outcome is always a [`ValidationReport`],
/// with errors in traversal order (pre-order, fields in declaration order,
/// items in iteration order).
///
/// The walk assumes the graph is acyclic. Reference cycles built with `Rc`
/// or `Arc` recurse until the stack overflows unless
/// [`ValidatorConfig::max_depth`] is set.
///
/// # Examples
///
/// ```rust,ignore
/// let validator = GraphValidator::with_config(
///     ValidatorConfig::default().with_root("order").with_max_depth(32),
/// )?;
/// let report = validator.validate(&order);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphValidator {
    config: ValidatorConfig,
}

impl GraphValidator {
    /// Creates a validator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from `config`, rejecting an invalid one.
    pub fn with_config(config: ValidatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `value` as a root without a rule of its own.
    #[must_use]
    pub fn validate(&self, value: &dyn Validatable) -> ValidationReport {
        self.validate_with_rule(value, ValidationRule::default())
    }

    /// Validates `value` as a root governed by `rule`.
    #[must_use]
    pub fn validate_with_rule(
        &self,
        value: &dyn Validatable,
        rule: ValidationRule,
    ) -> ValidationReport {
        let mut walk = Walk::new(&self.config);
        walk.visit(value, &rule);
        walk.finish()
    }
}

// ============================================================================
// WALK
// ============================================================================

struct Walk {
    path: FieldPath,
    max_depth: Option<usize>,
    errors: Vec<ValidationError>,
}

impl Walk {
    fn new(config: &ValidatorConfig) -> Self {
        Self {
            path: FieldPath::new(config.root.as_str()),
            max_depth: config.max_depth,
            errors: Vec::new(),
        }
    }

    fn visit(&mut self, value: &dyn Validatable, rule: &ValidationRule) {
        match value.shape() {
            Shape::Absent => {
                if rule.required {
                    self.emit(ValidationError::required_absent(self.path.as_str()));
                }
            }
            Shape::Leaf => {}
            Shape::Nullable(None) => {
                if rule.required {
                    self.emit(ValidationError::required_null(self.path.as_str()));
                }
            }
            Shape::Nullable(Some(inner)) => self.visit(inner, rule),
            Shape::Node(node) => self.visit_node(node, rule),
        }
    }

    fn visit_node(&mut self, node: Node<'_>, rule: &ValidationRule) {
        if let Some(max) = self.max_depth {
            if self.path.depth() > max {
                self.emit(ValidationError::max_depth(self.path.as_str(), max));
                return;
            }
        }

        let Node { len, items, fields } = node;

        if let Some(count) = len {
            if count < rule.min_items {
                self.emit(ValidationError::min_items(
                    self.path.as_str(),
                    rule.min_items,
                    count,
                ));
            }
            if count > rule.max_items {
                self.emit(ValidationError::max_items(
                    self.path.as_str(),
                    rule.max_items,
                    count,
                ));
            }
        }

        if rule.enumerable {
            if let Some(items) = items {
                let item_rule = rule.item_rule();
                for (index, item) in items.enumerate() {
                    self.path.push_index(index);
                    self.visit(item, &item_rule);
                    self.path.pop();
                }
            }
        }

        for field in fields {
            self.path.push_field(field.name);
            self.visit(field.value, &field.rule);
            self.path.pop();
        }
    }

    fn emit(&mut self, error: ValidationError) {
        tracing::trace!(
            path = %error.path,
            code = %error.code,
            reason = %error.reason,
            "validation violation"
        );
        self.errors.push(error);
    }

    fn finish(self) -> ValidationReport {
        tracing::debug!(
            root = %self.path,
            errors = self.errors.len(),
            valid = self.errors.is_empty(),
            "graph validation finished"
        );
        ValidationReport::new(self.errors)
    }
}
