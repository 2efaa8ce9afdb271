//! Aspect instance factories and the advisor materialization boundary.

use std::fmt;
use std::sync::Arc;

use crate::advisor::AdvisorRef;
use crate::component::{ComponentInstance, ComponentRegistry};
use crate::errors::WeftError;

/// Produces instances of one aspect component on behalf of the advisor
/// factory.
///
/// The two variants cover the two instantiation models: [`Fixed`] always
/// yields the registry's shared singleton instance, [`Fresh`] yields a new
/// instance per invocation. Both delegate instance production to the
/// registry; the registry's scope for the name is what guarantees the
/// variant's behavior, and the variant records which guarantee discovery
/// established.
///
/// Factories are created and exclusively owned by the discovery builder and
/// handed to an [`AdvisorFactory`] by reference for the duration of one
/// materialization call.
///
/// [`Fixed`]: AspectInstanceFactory::Fixed
/// [`Fresh`]: AspectInstanceFactory::Fresh
#[derive(Clone)]
pub enum AspectInstanceFactory {
    /// Hands out the registry's singleton instance on every call.
    Fixed {
        /// Registry that owns the aspect component.
        registry: Arc<dyn ComponentRegistry>,
        /// Registry name of the aspect component.
        name: String,
    },
    /// Hands out a new instance per invocation, for per-instantiation
    /// aspects.
    Fresh {
        /// Registry that owns the aspect component.
        registry: Arc<dyn ComponentRegistry>,
        /// Registry name of the aspect component.
        name: String,
    },
}

impl AspectInstanceFactory {
    /// Create a fixed-instance factory backed by the registry's singleton.
    pub fn fixed(registry: Arc<dyn ComponentRegistry>, name: impl Into<String>) -> Self {
        Self::Fixed {
            registry,
            name: name.into(),
        }
    }

    /// Create a fresh-instance-per-request factory.
    pub fn fresh(registry: Arc<dyn ComponentRegistry>, name: impl Into<String>) -> Self {
        Self::Fresh {
            registry,
            name: name.into(),
        }
    }

    /// Registry name of the aspect this factory produces.
    pub fn aspect_name(&self) -> &str {
        match self {
            Self::Fixed { name, .. } | Self::Fresh { name, .. } => name,
        }
    }

    /// Whether this factory hands out one shared instance.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }

    /// Produce an aspect instance through the backing registry.
    pub fn create_instance(&self) -> Result<ComponentInstance, WeftError> {
        match self {
            Self::Fixed { registry, name } | Self::Fresh { registry, name } => {
                registry.instance(name)
            }
        }
    }
}

impl fmt::Debug for AspectInstanceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (variant, name) = match self {
            Self::Fixed { name, .. } => ("Fixed", name),
            Self::Fresh { name, .. } => ("Fresh", name),
        };
        f.debug_struct("AspectInstanceFactory")
            .field("variant", &variant)
            .field("name", name)
            .finish()
    }
}

/// Materializes the ordered advisor list for one aspect.
///
/// The returned advisors are bound to instances obtainable through the
/// given factory. Callers preserve the returned order and never inspect or
/// reorder the list beyond concatenation in discovery order.
pub trait AdvisorFactory: Send + Sync {
    /// Build the advisors for the aspect behind `factory`.
    fn advisors_for(&self, factory: &AspectInstanceFactory) -> Result<Vec<AdvisorRef>, WeftError>;
}
