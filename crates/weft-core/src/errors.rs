//! Unified error handling for the Weft crates.
//!
//! Collaborator failures (registry, classifier, advisor factory) are
//! carried as sources on dedicated variants so they propagate unchanged
//! through `build_advisors()`; no local recovery or retry is performed.

use thiserror::Error;

/// Boxed error type for collaborator failure sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for all Weft operations.
#[derive(Debug, Error)]
pub enum WeftError {
    /// A component was classified as per-instantiation but the registry
    /// holds it as a singleton, so it can never supply a fresh instance
    /// per join point. Fatal for the discovery pass.
    #[error(
        "component '{name}' is registry-singleton, but its aspect instantiation model is not singleton"
    )]
    LifecycleMismatch {
        /// Registry name of the mismatched component.
        name: String,
    },

    /// Invalid declarative configuration, e.g. a malformed include pattern.
    #[error("invalid weave configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        message: String,
    },

    /// The registry failed while producing a component.
    #[error("registry operation failed for component '{name}'")]
    Registry {
        /// Registry name of the component involved.
        name: String,
        /// Underlying registry failure.
        #[source]
        source: BoxError,
    },

    /// The classifier failed to inspect a component type.
    #[error("aspect classification failed for type '{type_id}'")]
    Classifier {
        /// Identifier of the type being classified.
        type_id: String,
        /// Underlying classifier failure.
        #[source]
        source: BoxError,
    },

    /// The advisor factory failed to materialize advisors for an aspect.
    #[error("advisor materialization failed for aspect '{name}'")]
    Materialization {
        /// Registry name of the aspect involved.
        name: String,
        /// Underlying factory failure.
        #[source]
        source: BoxError,
    },

    /// An internal invariant was violated.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the violated invariant.
        message: String,
    },
}

impl WeftError {
    /// Create a lifecycle mismatch error for the named component.
    pub fn lifecycle_mismatch(name: impl Into<String>) -> Self {
        Self::LifecycleMismatch { name: name.into() }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Wrap a registry failure for the named component.
    pub fn registry(
        name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Registry {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a classifier failure for the given type.
    pub fn classifier(
        type_id: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Classifier {
            type_id: type_id.into(),
            source: Box::new(source),
        }
    }

    /// Wrap an advisor factory failure for the named aspect.
    pub fn materialization(
        name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Materialization {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Create an internal invariant-violation error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn lifecycle_mismatch_names_the_component() {
        let err = WeftError::lifecycle_mismatch("audit_aspect");
        assert_matches!(&err, WeftError::LifecycleMismatch { name } if name == "audit_aspect");
        assert!(err.to_string().contains("audit_aspect"));
        assert!(err.to_string().contains("registry-singleton"));
    }

    #[test]
    fn collaborator_errors_keep_their_source() {
        let io = std::io::Error::other("registry backend offline");
        let err = WeftError::registry("metrics", io);
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("registry backend offline"));
    }
}
