//! Incrementally built locator strings.

use std::fmt;

/// A `$.Foo[2].Bar` style locator that grows and shrinks with the walk.
///
/// Segments are appended in place and removed with [`pop`](Self::pop), so a
/// depth-first walk reuses one buffer instead of formatting a fresh string
/// per node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    buf: String,
    marks: Vec<usize>,
}

impl FieldPath {
    /// Starts a path at the given root placeholder.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            buf: root.into(),
            marks: Vec::new(),
        }
    }

    /// Appends `.name`.
    pub fn push_field(&mut self, name: &str) {
        self.marks.push(self.buf.len());
        self.buf.push('.');
        self.buf.push_str(name);
    }

    /// Appends `[index]`.
    pub fn push_index(&mut self, index: usize) {
        use std::fmt::Write as _;

        self.marks.push(self.buf.len());
        // Writing into a String cannot fail.
        let _ = write!(self.buf, "[{index}]");
    }

    /// Removes the last pushed segment. The root is never removed.
    pub fn pop(&mut self) {
        if let Some(mark) = self.marks.pop() {
            self.buf.truncate(mark);
        }
    }

    /// Number of pushed segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.marks.len()
    }

    /// The rendered path, e.g. `$.Lines[0].Sku`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Default for FieldPath {
    fn default() -> Self {
        Self::new("$")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop() {
        let mut path = FieldPath::default();
        path.push_field("ListProp");
        path.push_index(0);
        path.push_field("NestedField");
        assert_eq!(path.as_str(), "$.ListProp[0].NestedField");
        assert_eq!(path.depth(), 3);

        path.pop();
        path.pop();
        assert_eq!(path.as_str(), "$.ListProp");
        path.push_index(12);
        assert_eq!(path.to_string(), "$.ListProp[12]");
    }

    #[test]
    fn root_survives_extra_pops() {
        let mut path = FieldPath::new("order");
        path.pop();
        path.push_field("id");
        path.pop();
        path.pop();
        assert_eq!(path.as_str(), "order");
        assert_eq!(path.depth(), 0);
    }
}
