//! Aspect classification types and the classifier boundary.
//!
//! The classifier is an external collaborator wrapping whatever annotation
//! or metadata system tags components as aspects. Weft depends only on the
//! two questions below, never on the metadata mechanism itself.

use crate::component::TypeKey;
use crate::errors::WeftError;

/// Instantiation lifecycle of an aspect, derived once from its declared
/// type. The kind never changes for a given name within a discovery pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleKind {
    /// One shared aspect instance for the process lifetime.
    Singleton,
    /// A distinct aspect instance per matched target or context
    /// (per-target / per-this semantics).
    PerInstantiation,
}

/// Descriptor for a discovered aspect component. Immutable after discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectDescriptor {
    /// Registry name of the hosting component.
    pub name: String,
    /// Lifecycle kind derived from the component's declared type.
    pub lifecycle: LifecycleKind,
}

impl AspectDescriptor {
    /// Create a descriptor for a classified aspect.
    pub fn new(name: impl Into<String>, lifecycle: LifecycleKind) -> Self {
        Self {
            name: name.into(),
            lifecycle,
        }
    }
}

/// Determines whether a component type is an aspect and, if so, how it is
/// instantiated.
pub trait AspectClassifier: Send + Sync {
    /// Whether the given type is tagged as an aspect.
    fn is_aspect(&self, ty: &TypeKey) -> bool;

    /// Lifecycle kind of an aspect type. Only called for types that
    /// answered true to [`is_aspect`](Self::is_aspect); errors propagate
    /// unchanged to the discovery caller.
    fn lifecycle_of(&self, ty: &TypeKey) -> Result<LifecycleKind, WeftError>;
}
