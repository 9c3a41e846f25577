//! Immutable, persistent ambient scope.
//!
//! A `Scope` is a chain of bindings shared through `Arc`. Deriving a child
//! never touches the parent, so sibling scopes built from one parent can be
//! created and read from any thread without coordination.
//!
//! Bindings are keyed by a marker *type*. Code that keeps its key type private
//! is the only code able to read or write that binding.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

struct Binding {
    key: TypeId,
    key_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
    parent: Option<Arc<Binding>>,
}

/// Ambient value carrier threaded through a call graph.
#[derive(Clone, Default)]
pub struct Scope {
    head: Option<Arc<Binding>>,
}

impl Scope {
    /// Empty scope with no bindings.
    pub fn root() -> Self {
        Self::default()
    }

    /// Derive a child scope where key `K` resolves to `value`.
    pub fn with_value<K, V>(&self, value: V) -> Scope
    where
        K: 'static,
        V: Send + Sync + 'static,
    {
        Scope {
            head: Some(Arc::new(Binding {
                key: TypeId::of::<K>(),
                key_name: std::any::type_name::<K>(),
                value: Box::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Innermost value bound under `K`, if any.
    ///
    /// Returns `None` when no ancestor binds `K`, or when the innermost binding
    /// for `K` holds a type other than `V`.
    pub fn value<K, V>(&self) -> Option<&V>
    where
        K: 'static,
        V: 'static,
    {
        let key = TypeId::of::<K>();
        let mut cur = self.head.as_deref();
        while let Some(b) = cur {
            if b.key == key {
                return b.value.downcast_ref::<V>();
            }
            cur = b.parent.as_deref();
        }
        None
    }

    /// Number of bindings on the chain (shadowed ones included).
    pub fn depth(&self) -> usize {
        let mut n = 0;
        let mut cur = self.head.as_deref();
        while let Some(b) = cur {
            n += 1;
            cur = b.parent.as_deref();
        }
        n
    }
}

impl fmt::Debug for Scope {
    // Values are opaque; only key names are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = Vec::new();
        let mut cur = self.head.as_deref();
        while let Some(b) = cur {
            keys.push(b.key_name);
            cur = b.parent.as_deref();
        }
        f.debug_struct("Scope").field("keys", &keys).finish()
    }
}
