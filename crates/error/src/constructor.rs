//! Constructor registry for error kinds.
//!
//! Rust has no runtime constructor discovery, so each error kind lists the
//! shapes it can be built from. A shape is an [`ArgList`] (a tuple of up to
//! three owned values) and is identified by its [`Signature`]: the ordered
//! `TypeId`s of its elements. Lookups compare signatures exactly; a `&str`
//! argument never matches a `String` slot.

use smallvec::SmallVec;
use std::any::{Any, TypeId};
use std::fmt;

/// Boxed error used as the `cause` slot of message constructors.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Type-erased argument value handed to a registered constructor.
pub type ArgValue = Box<dyn Any + Send>;

type BuildFn<E> = Box<dyn Fn(Vec<ArgValue>) -> Option<E> + Send + Sync>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// An error type that guard clauses can raise.
///
/// Implementors declare every shape they can be constructed from. The set is
/// resolved once per process and cached (see [`crate::cache`]).
///
/// # Examples
///
/// ```rust,ignore
/// impl ErrorKind for StorageFull {
///     fn constructors() -> ConstructorSet<Self> {
///         ConstructorSet::new()
///             .no_args(StorageFull::default)
///             .message_with_cause(StorageFull::with_cause)
///             .public(|(volume, free): (String, u64)| StorageFull::on(volume, free))
///     }
/// }
/// ```
pub trait ErrorKind: std::error::Error + Send + Sync + Sized + 'static {
    /// Returns every constructor this kind offers.
    fn constructors() -> ConstructorSet<Self>;
}

// ============================================================================
// ACCESS & SIGNATURE
// ============================================================================

/// Visibility of a registered constructor.
///
/// Only [`Access::Public`] and [`Access::Internal`] constructors take part in
/// resolution; private ones are registered for completeness only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Usable from anywhere.
    Public,
    /// Usable within the defining crate; still eligible for raising.
    Internal,
    /// Never selected by the thrower.
    Private,
}

impl Access {
    /// Whether the thrower may select a constructor with this access.
    pub fn is_resolvable(self) -> bool {
        matches!(self, Self::Public | Self::Internal)
    }
}

/// Ordered, exact argument types of a constructor or call site.
#[derive(Clone)]
pub struct Signature {
    ids: SmallVec<[TypeId; 3]>,
    names: SmallVec<[&'static str; 3]>,
}

impl Signature {
    /// The empty signature `()`.
    pub fn empty() -> Self {
        Self {
            ids: SmallVec::new(),
            names: SmallVec::new(),
        }
    }

    /// Appends `T` to the signature.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: Any>(mut self) -> Self {
        self.push_raw(TypeId::of::<T>(), std::any::type_name::<T>());
        self
    }

    pub(crate) fn push_raw(&mut self, id: TypeId, name: &'static str) {
        self.ids.push(id);
        self.names.push(name);
    }

    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.ids.len()
    }

    /// Type names, in order, for diagnostics.
    pub fn type_names(&self) -> &[&'static str] {
        &self.names
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl Eq for Signature {}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature{self}")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.names.join(", "))
    }
}

// ============================================================================
// ARGUMENT LISTS
// ============================================================================

/// A tuple of owned constructor arguments with a statically known signature.
///
/// Implemented for `()`, `(A,)`, `(A, B)` and `(A, B, C)`.
pub trait ArgList: Sized + 'static {
    /// Exact signature of this tuple type.
    fn signature() -> Signature;

    /// Rebuilds the tuple from type-erased values.
    ///
    /// Returns `None` when the count or any element type differs.
    fn from_values(values: Vec<ArgValue>) -> Option<Self>;
}

impl ArgList for () {
    fn signature() -> Signature {
        Signature::empty()
    }

    fn from_values(values: Vec<ArgValue>) -> Option<Self> {
        values.is_empty().then_some(())
    }
}

macro_rules! impl_arg_list {
    ($($ty:ident),+) => {
        impl<$($ty: Any + Send),+> ArgList for ($($ty,)+) {
            fn signature() -> Signature {
                Signature::empty()$(.with::<$ty>())+
            }

            fn from_values(values: Vec<ArgValue>) -> Option<Self> {
                let mut values = values.into_iter();
                let tuple = ($(*values.next()?.downcast::<$ty>().ok()?,)+);
                values.next().is_none().then_some(tuple)
            }
        }
    };
}

impl_arg_list!(A);
impl_arg_list!(A, B);
impl_arg_list!(A, B, C);

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Stable reference to a constructor inside its [`ConstructorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstructorHandle(usize);

impl ConstructorHandle {
    /// Registration index of the constructor.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One registered way of building `E`.
pub struct Constructor<E> {
    access: Access,
    signature: Signature,
    build: BuildFn<E>,
}

impl<E> Constructor<E> {
    /// Visibility of this constructor.
    pub fn access(&self) -> Access {
        self.access
    }

    /// Exact argument types.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Builds `E` from type-erased values; `None` if they do not fit.
    pub(crate) fn invoke(&self, values: Vec<ArgValue>) -> Option<E> {
        (self.build)(values)
    }
}

impl<E> fmt::Debug for Constructor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("access", &self.access)
            .field("signature", &self.signature)
            .field("build", &"<function>")
            .finish()
    }
}

/// Every constructor an error kind registers, in registration order.
///
/// # Examples
///
/// ```rust,ignore
/// let set = ConstructorSet::new()
///     .no_args(|| MyError::default())
///     .message(MyError::new)
///     .private(|(code,): (u16,)| MyError::from_code(code));
///
/// assert!(set.supports::<()>());
/// assert!(!set.supports::<(u16,)>()); // private constructors are ignored
/// ```
pub struct ConstructorSet<E> {
    constructors: Vec<Constructor<E>>,
    instantiable: bool,
}

impl<E: 'static> ConstructorSet<E> {
    /// Creates an empty, instantiable set.
    pub fn new() -> Self {
        Self {
            constructors: Vec::new(),
            instantiable: true,
        }
    }

    /// Creates a set for a kind that can never be built.
    ///
    /// Every raise of such a kind fails with
    /// [`MisconfigurationReason::NonInstantiable`](crate::MisconfigurationReason::NonInstantiable).
    pub fn non_instantiable() -> Self {
        Self {
            constructors: Vec::new(),
            instantiable: false,
        }
    }

    /// Registers a constructor with explicit access.
    #[must_use = "builder methods must be chained or built"]
    pub fn register<A, F>(mut self, access: Access, build: F) -> Self
    where
        A: ArgList,
        F: Fn(A) -> E + Send + Sync + 'static,
    {
        self.constructors.push(Constructor {
            access,
            signature: A::signature(),
            build: Box::new(move |values| A::from_values(values).map(&build)),
        });
        self
    }

    /// Registers a public constructor.
    #[must_use = "builder methods must be chained or built"]
    pub fn public<A, F>(self, build: F) -> Self
    where
        A: ArgList,
        F: Fn(A) -> E + Send + Sync + 'static,
    {
        self.register(Access::Public, build)
    }

    /// Registers a crate-internal constructor.
    #[must_use = "builder methods must be chained or built"]
    pub fn internal<A, F>(self, build: F) -> Self
    where
        A: ArgList,
        F: Fn(A) -> E + Send + Sync + 'static,
    {
        self.register(Access::Internal, build)
    }

    /// Registers a private constructor (never selected when raising).
    #[must_use = "builder methods must be chained or built"]
    pub fn private<A, F>(self, build: F) -> Self
    where
        A: ArgList,
        F: Fn(A) -> E + Send + Sync + 'static,
    {
        self.register(Access::Private, build)
    }

    /// Registers a public `()` constructor.
    #[must_use = "builder methods must be chained or built"]
    pub fn no_args<F>(self, build: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        self.public(move |(): ()| build())
    }

    /// Registers a public `(message)` constructor.
    #[must_use = "builder methods must be chained or built"]
    pub fn message<F>(self, build: F) -> Self
    where
        F: Fn(String) -> E + Send + Sync + 'static,
    {
        self.public(move |(message,): (String,)| build(message))
    }

    /// Registers a public `(message, cause)` constructor.
    #[must_use = "builder methods must be chained or built"]
    pub fn message_with_cause<F>(self, build: F) -> Self
    where
        F: Fn(String, Option<Cause>) -> E + Send + Sync + 'static,
    {
        self.public(move |(message, cause): (String, Option<Cause>)| build(message, cause))
    }
}

impl<E> ConstructorSet<E> {
    /// Whether the kind can be built at all.
    pub fn is_instantiable(&self) -> bool {
        self.instantiable
    }

    /// Number of registered constructors, including private ones.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Iterates constructors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Constructor<E>> {
        self.constructors.iter()
    }

    /// Finds the first resolvable constructor whose signature equals `signature`.
    pub fn find(&self, signature: &Signature) -> Option<ConstructorHandle> {
        self.constructors
            .iter()
            .position(|c| c.access.is_resolvable() && c.signature == *signature)
            .map(ConstructorHandle)
    }

    /// Whether a resolvable constructor taking exactly `A` exists.
    pub fn supports<A: ArgList>(&self) -> bool {
        self.find(&A::signature()).is_some()
    }

    /// Returns the constructor behind `handle`.
    pub fn get(&self, handle: ConstructorHandle) -> Option<&Constructor<E>> {
        self.constructors.get(handle.0)
    }
}

impl<E: 'static> Default for ConstructorSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ConstructorSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorSet")
            .field("instantiable", &self.instantiable)
            .field("constructors", &self.constructors)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
