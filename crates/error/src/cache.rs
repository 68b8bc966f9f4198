//! Process-wide cache of resolved constructors, one entry per error kind.
//!
//! Entries are created on the first raise of a kind and never replaced or
//! removed. Two threads racing on the first raise may both resolve the kind;
//! only one entry is stored and both observe it afterwards.

use crate::constructor::{ArgList, Cause, ConstructorHandle, ConstructorSet, ErrorKind};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::{Arc, OnceLock};

type Entries = DashMap<TypeId, Arc<dyn Any + Send + Sync>>;

static ENTRIES: OnceLock<Entries> = OnceLock::new();

fn entries() -> &'static Entries {
    ENTRIES.get_or_init(DashMap::new)
}

/// Resolved constructors of one error kind.
pub struct KindEntry<E> {
    kind: &'static str,
    constructors: ConstructorSet<E>,
    no_args: Option<ConstructorHandle>,
    message: Option<ConstructorHandle>,
    message_arity: usize,
}

impl<E: ErrorKind> KindEntry<E> {
    /// Returns the cached entry for `E`, resolving it on first use.
    pub fn get() -> Arc<Self> {
        let id = TypeId::of::<E>();

        let cached = entries().get(&id).map(|entry| Arc::clone(entry.value()));
        let stored = match cached {
            Some(stored) => stored,
            None => {
                // Resolve outside the shard lock: `constructors()` is user code.
                let resolved: Arc<dyn Any + Send + Sync> = Arc::new(Self::resolve());
                let stored = entries().entry(id).or_insert(resolved);
                Arc::clone(stored.value())
            }
        };

        stored.downcast::<Self>().unwrap_or_else(|_| {
            tracing::error!(
                kind = std::any::type_name::<E>(),
                "constructor cache entry has the wrong type"
            );
            Arc::new(Self::resolve())
        })
    }

    fn resolve() -> Self {
        let kind = std::any::type_name::<E>();
        let constructors = E::constructors();

        let no_args = constructors.find(&<()>::signature());
        let with_cause = constructors.find(&<(String, Option<Cause>)>::signature());
        let (message, message_arity) = match with_cause {
            Some(handle) => (Some(handle), 2),
            None => match constructors.find(&<(String,)>::signature()) {
                Some(handle) => (Some(handle), 1),
                None => (None, 0),
            },
        };

        tracing::debug!(
            kind,
            instantiable = constructors.is_instantiable(),
            registered = constructors.len(),
            no_args = no_args.is_some(),
            message_arity,
            "resolved error kind constructors"
        );

        Self {
            kind,
            constructors,
            no_args,
            message,
            message_arity,
        }
    }
}

impl<E> KindEntry<E> {
    /// Type name of the error kind.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Whether the kind was registered as non-instantiable.
    pub fn is_non_instantiable(&self) -> bool {
        !self.constructors.is_instantiable()
    }

    /// The resolved `()` constructor.
    pub fn no_args(&self) -> Option<ConstructorHandle> {
        self.no_args
    }

    /// The resolved message constructor, `(message, cause)` preferred.
    pub fn message(&self) -> Option<ConstructorHandle> {
        self.message
    }

    /// Arity of [`message`](Self::message): 2, 1, or 0 when absent.
    pub fn message_arity(&self) -> usize {
        self.message_arity
    }

    /// All registered constructors.
    pub fn constructors(&self) -> &ConstructorSet<E> {
        &self.constructors
    }
}

impl<E> fmt::Debug for KindEntry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindEntry")
            .field("kind", &self.kind)
            .field("no_args", &self.no_args)
            .field("message", &self.message)
            .field("message_arity", &self.message_arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use thiserror::Error;

    static RESOLUTIONS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Error)]
    #[error("counted")]
    struct Counted;

    impl ErrorKind for Counted {
        fn constructors() -> ConstructorSet<Self> {
            RESOLUTIONS.fetch_add(1, Ordering::SeqCst);
            ConstructorSet::new().no_args(|| Counted)
        }
    }

    #[derive(Debug, Error)]
    #[error("{0}")]
    struct MessageOnly(String);

    impl ErrorKind for MessageOnly {
        fn constructors() -> ConstructorSet<Self> {
            ConstructorSet::new().message(MessageOnly)
        }
    }

    #[derive(Debug, Error)]
    #[error("{0}")]
    struct BothMessages(String);

    impl ErrorKind for BothMessages {
        fn constructors() -> ConstructorSet<Self> {
            ConstructorSet::new()
                .message(BothMessages)
                .message_with_cause(|m, _| BothMessages(m))
        }
    }

    #[test]
    fn entry_is_resolved_once() {
        let first = KindEntry::<Counted>::get();
        let second = KindEntry::<Counted>::get();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(RESOLUTIONS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn message_with_cause_is_preferred() {
        let entry = KindEntry::<BothMessages>::get();
        assert_eq!(entry.message_arity(), 2);
        assert_eq!(entry.message().map(ConstructorHandle::index), Some(1));
        assert_eq!(entry.no_args(), None);
    }

    #[test]
    fn message_only_kind() {
        let entry = KindEntry::<MessageOnly>::get();
        assert_eq!(entry.message_arity(), 1);
        assert!(entry.message().is_some());
        assert!(!entry.is_non_instantiable());
    }
}
