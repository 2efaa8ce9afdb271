//! Component registry boundary types.
//!
//! The registry is an external collaborator: it holds named components with
//! type and scope metadata, and it is queried but never mutated by the
//! discovery layer.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::errors::WeftError;

/// Opaque token identifying a component's declared type.
///
/// A `TypeKey` is resolvable from the registry without instantiating the
/// component, so discovery can classify aspects before any weaving has
/// happened. The token is only ever compared and passed to the classifier;
/// Weft attaches no meaning to its contents.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeKey(Arc<str>);

impl TypeKey {
    /// Create a type key from a stable type identifier.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The underlying type identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.0).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A live component produced by the registry.
///
/// Instances are opaque to discovery; they are only threaded through to the
/// advisor factory, which knows the concrete aspect types.
pub type ComponentInstance = Arc<dyn Any + Send + Sync>;

/// Read-only view of a dynamic component registry.
///
/// Implementations must answer type and scope queries without instantiating
/// the component in question: an eagerly created instance would be cached
/// by the registry before weaving and stay un-woven.
pub trait ComponentRegistry: Send + Sync {
    /// Every component name this registry can produce, in registry order.
    ///
    /// Federated registries include names reachable through their ancestry.
    fn component_names(&self) -> Vec<String>;

    /// Declared type of the named component, resolved without
    /// instantiation. Returns `None` when the type cannot be determined
    /// (placeholder or lazily-typed definitions are legitimate).
    fn type_of(&self, name: &str) -> Option<TypeKey>;

    /// Whether the named component is singleton-scoped in this registry.
    fn is_singleton(&self, name: &str) -> bool;

    /// Produce an instance of the named component. Singleton-scoped names
    /// yield the registry's shared instance; other scopes yield a new
    /// instance per call.
    fn instance(&self, name: &str) -> Result<ComponentInstance, WeftError>;
}
