//! How values describe themselves to the graph walk.
//!
//! The walk never inspects values directly. Each type answers
//! [`Validatable::shape`] with one of four shapes, and the walk applies the
//! rule of the property it arrived through to that shape.

use super::ValidationRule;
use std::fmt;

// ============================================================================
// VALIDATABLE
// ============================================================================

/// A value the graph validator can walk.
///
/// Implemented for scalars, strings, smart pointers, `Option` and the std
/// collections. Structs and fieldless enums get it from
/// `#[derive(Validatable)]`; hand-written impls list their rule-carrying
/// fields with [`Node::field`].
///
/// # Examples
///
/// ```rust,ignore
/// use bulwark_validator::{Node, Shape, Validatable, ValidationRule};
///
/// struct Invoice {
///     number: Option<String>,
///     lines: Vec<Line>,
/// }
///
/// impl Validatable for Invoice {
///     fn shape(&self) -> Shape<'_> {
///         Node::object()
///             .field("Number", ValidationRule::new().required(), &self.number)
///             .field("Lines", ValidationRule::new().min_items(1), &self.lines)
///             .into()
///     }
/// }
/// ```
pub trait Validatable {
    /// Describes this value for one step of the walk.
    fn shape(&self) -> Shape<'_>;

    /// Whether `Option<Self>` is a nullable scalar rather than an optional
    /// reference.
    ///
    /// The distinction only changes the reason reported for a required
    /// `None`: value types report `required, found null`, everything else
    /// `required, found null/absent`.
    fn is_value_type() -> bool
    where
        Self: Sized,
    {
        false
    }
}

// ============================================================================
// SHAPE
// ============================================================================

/// One step of the walk.
pub enum Shape<'a> {
    /// No value: a `None` of a non-value type.
    Absent,
    /// Nothing to check or visit.
    Leaf,
    /// An `Option` of a value type. `Some` is visited with the same path and
    /// rule.
    Nullable(Option<&'a dyn Validatable>),
    /// A collection, an object, or both.
    Node(Node<'a>),
}

impl<'a> From<Node<'a>> for Shape<'a> {
    fn from(node: Node<'a>) -> Self {
        Self::Node(node)
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Leaf => f.write_str("Leaf"),
            Self::Nullable(inner) => f
                .debug_tuple("Nullable")
                .field(&inner.map(|_| ".."))
                .finish(),
            Self::Node(node) => node.fmt(f),
        }
    }
}

// ============================================================================
// NODE
// ============================================================================

type Items<'a> = Box<dyn Iterator<Item = &'a dyn Validatable> + 'a>;

/// A container: an optional item count, optional items, and rule-carrying
/// fields.
///
/// Collections set the count and the items; objects list fields. A type may
/// do both, in which case the count is checked first, then the items are
/// visited, then the fields.
pub struct Node<'a> {
    pub(crate) len: Option<usize>,
    pub(crate) items: Option<Items<'a>>,
    pub(crate) fields: Vec<FieldNode<'a>>,
}

impl<'a> Node<'a> {
    /// An object with no fields yet.
    #[must_use]
    pub fn object() -> Self {
        Self {
            len: None,
            items: None,
            fields: Vec::new(),
        }
    }

    /// A collection of `len` items.
    pub fn collection<I>(len: usize, items: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Validatable>,
        I::IntoIter: 'a,
    {
        Self {
            len: Some(len),
            items: Some(Box::new(items.into_iter())),
            fields: Vec::new(),
        }
    }

    /// A collection counted by its iterator.
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator + 'a,
        T: Validatable + 'a,
    {
        let items = items.into_iter();
        let len = items.len();
        Self::collection(len, items.map(|item| item as &dyn Validatable))
    }

    /// Adds a field visited as `.name` under `rule`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(
        mut self,
        name: &'a str,
        rule: ValidationRule,
        value: &'a dyn Validatable,
    ) -> Self {
        self.fields.push(FieldNode { name, rule, value });
        self
    }

    /// Item count, when this node is a collection.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.len
    }

    /// Whether this node has items to enumerate.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.items.is_some()
    }

    /// Registered fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldNode<'a>] {
        &self.fields
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("len", &self.len)
            .field("collection", &self.items.is_some())
            .field("fields", &self.fields)
            .finish()
    }
}

/// A rule-carrying property of an object.
pub struct FieldNode<'a> {
    /// Path segment, without the leading dot.
    pub name: &'a str,
    pub rule: ValidationRule,
    pub value: &'a dyn Validatable,
}

impl fmt::Debug for FieldNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldNode")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}
