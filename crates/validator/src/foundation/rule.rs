//! Per-property validation rules.

use serde::Serialize;

/// Constraints declared on one property.
///
/// A property without a rule is neither checked nor descended into, so the
/// default rule is still meaningful: attaching it makes the walk visit the
/// value (and its items) without imposing anything on the value itself.
///
/// ```rust,ignore
/// let rule = ValidationRule::new().required().max_items(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationRule {
    /// Absent or `None` values are errors.
    pub required: bool,
    /// Visit the items of a collection.
    pub enumerable: bool,
    /// Absent items of a collection are errors.
    pub items_required: bool,
    /// Inclusive lower bound on the item count.
    pub min_items: usize,
    /// Inclusive upper bound on the item count.
    pub max_items: usize,
}

impl Default for ValidationRule {
    fn default() -> Self {
        Self {
            required: false,
            enumerable: true,
            items_required: false,
            min_items: 0,
            max_items: usize::MAX,
        }
    }
}

impl ValidationRule {
    /// The default rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule applied to every item of a collection governed by `self`.
    ///
    /// Items inherit only `items_required`, which becomes their `required`.
    #[must_use]
    pub fn item_rule(&self) -> Self {
        Self {
            required: self.items_required,
            ..Self::default()
        }
    }

    /// Rejects an absent value.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether items of a collection are visited.
    #[must_use = "builder methods must be chained or built"]
    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    /// Rejects absent items.
    #[must_use = "builder methods must be chained or built"]
    pub fn items_required(mut self) -> Self {
        self.items_required = true;
        self
    }

    /// Sets the minimum item count.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = min;
        self
    }

    /// Sets the maximum item count.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let rule = ValidationRule::default();
        assert!(!rule.required);
        assert!(rule.enumerable);
        assert!(!rule.items_required);
        assert_eq!(rule.min_items, 0);
        assert_eq!(rule.max_items, usize::MAX);
    }

    #[test]
    fn item_rule_only_inherits_items_required() {
        let rule = ValidationRule::new()
            .required()
            .items_required()
            .enumerable(false)
            .min_items(3)
            .max_items(4);

        assert_eq!(rule.item_rule(), ValidationRule::new().required());
        assert_eq!(
            ValidationRule::new().required().item_rule(),
            ValidationRule::new()
        );
    }
}
