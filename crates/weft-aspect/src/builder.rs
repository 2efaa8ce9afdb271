//! Advisor discovery and caching.
//!
//! [`AspectAdvisorsBuilder`] scans a component registry exactly once for
//! aspect components, classifies each by instantiation lifecycle, and
//! compiles the combined advisor list in discovery order. Singleton aspects
//! are materialized eagerly and cached; per-instantiation aspects keep only
//! their instance factory and are re-materialized on every call.
//!
//! # Invariants Enforced
//! - **Single-Scan**: the registry is enumerated at most once per builder;
//!   the published snapshot is the discovery marker.
//! - **Scan-Without-Instantiation**: classification resolves declared types
//!   only; no component is instantiated before weaving can happen.
//! - **Monotonic-Caches**: the snapshot is immutable after publication;
//!   cached advisor lists are reused by identity and never invalidated.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, trace};

use weft_core::{
    AdvisorFactory, AdvisorRef, AspectClassifier, AspectDescriptor, AspectInstanceFactory,
    ComponentRegistry, LifecycleKind, WeftError,
};

use crate::eligibility::{AcceptAll, EligibilityPolicy};

/// Immutable result of the one-time discovery pass.
///
/// Published atomically once discovery succeeds; every later call reads it
/// without taking a lock. The `Arc` publication is the happens-before edge
/// that makes the lock-free fast path sound.
#[derive(Default)]
struct DiscoveredAspects {
    /// Discovered aspects in registry enumeration order. This order fixes
    /// the merge order of every returned advisor list.
    aspects: Vec<AspectDescriptor>,
    /// Advisor lists cached for singleton-kind aspects hosted by
    /// singleton-scoped components. Never recomputed once present.
    advisors: HashMap<String, Vec<AdvisorRef>>,
    /// One instance factory per discovered aspect, created at discovery
    /// time. Singleton entries are kept for uniformity of lookup even
    /// though the advisor cache shadows them.
    factories: HashMap<String, Arc<AspectInstanceFactory>>,
}

/// Discovers aspect components in a registry and builds advisors from them,
/// for use by the auto-proxying layer.
///
/// The first [`build_advisors`](Self::build_advisors) call performs the
/// discovery pass under mutual exclusion; subsequent calls assemble the
/// result from the published snapshot. Per-instantiation aspects contribute
/// freshly materialized advisors on every call, so the combined list is
/// only stable when all discovered aspects are singletons.
pub struct AspectAdvisorsBuilder {
    registry: Arc<dyn ComponentRegistry>,
    classifier: Arc<dyn AspectClassifier>,
    advisor_factory: Arc<dyn AdvisorFactory>,
    eligibility: Box<dyn EligibilityPolicy>,
    discovered: OnceCell<Arc<DiscoveredAspects>>,
}

impl AspectAdvisorsBuilder {
    /// Create a builder over the given collaborators with the default
    /// accept-all eligibility policy.
    pub fn new(
        registry: Arc<dyn ComponentRegistry>,
        classifier: Arc<dyn AspectClassifier>,
        advisor_factory: Arc<dyn AdvisorFactory>,
    ) -> Self {
        Self {
            registry,
            classifier,
            advisor_factory,
            eligibility: Box::new(AcceptAll),
            discovered: OnceCell::new(),
        }
    }

    /// Replace the eligibility policy.
    ///
    /// Consumes the builder, so the policy is necessarily in place before
    /// the first `build_advisors()` call.
    #[must_use]
    pub fn with_eligibility(mut self, eligibility: Box<dyn EligibilityPolicy>) -> Self {
        self.eligibility = eligibility;
        self
    }

    /// Build the combined advisor list for every discovered aspect.
    ///
    /// The first call scans the registry, classifies aspects, populates the
    /// caches, and returns the advisors materialized during the pass.
    /// Subsequent calls mix cached singleton advisors with freshly
    /// materialized ones for per-instantiation aspects, in discovery order.
    ///
    /// # Errors
    ///
    /// Fails with [`WeftError::LifecycleMismatch`] when a component is
    /// classified per-instantiation but the registry holds it as a
    /// singleton. Classifier, registry, and advisor-factory errors
    /// propagate unchanged. A failed discovery publishes nothing, so the
    /// next call rescans from scratch.
    pub fn build_advisors(&self) -> Result<Vec<AdvisorRef>, WeftError> {
        let mut first_pass = None;
        let discovered = self.discovered.get_or_try_init(|| {
            let (snapshot, advisors) = self.discover()?;
            first_pass = Some(advisors);
            Ok(Arc::new(snapshot))
        })?;

        match first_pass {
            Some(advisors) => Ok(advisors),
            None => self.assemble(discovered),
        }
    }

    /// One-time discovery pass over the registry.
    ///
    /// Runs inside the builder's exclusive region. Returns the snapshot to
    /// publish together with the advisor list materialized along the way,
    /// so the first caller does not pay for a second materialization of
    /// per-instantiation aspects.
    fn discover(&self) -> Result<(DiscoveredAspects, Vec<AdvisorRef>), WeftError> {
        let mut snapshot = DiscoveredAspects::default();
        let mut advisors = Vec::new();

        for name in self.registry.component_names() {
            if !self.eligibility.is_eligible(&name) {
                trace!(component = %name, "component not eligible, skipping");
                continue;
            }
            // Resolve the declared type only. Instantiating here would let
            // the registry cache an un-woven instance.
            let Some(ty) = self.registry.type_of(&name) else {
                trace!(component = %name, "component type unresolvable, skipping");
                continue;
            };
            if !self.classifier.is_aspect(&ty) {
                continue;
            }

            let lifecycle = self.classifier.lifecycle_of(&ty)?;
            debug!(
                component = %name,
                component_type = %ty,
                lifecycle = ?lifecycle,
                "discovered aspect component"
            );

            match lifecycle {
                LifecycleKind::Singleton => {
                    let factory = Arc::new(AspectInstanceFactory::fixed(
                        self.registry.clone(),
                        name.clone(),
                    ));
                    let class_advisors = self.advisor_factory.advisors_for(&factory)?;
                    if self.registry.is_singleton(&name) {
                        snapshot
                            .advisors
                            .insert(name.clone(), class_advisors.clone());
                    } else {
                        // Singleton-kind aspect on a non-singleton-scoped
                        // component: reuse cannot be guaranteed, so later
                        // calls recompute through the factory.
                        debug!(
                            component = %name,
                            "aspect is singleton-kind but its component is not singleton-scoped; \
                             caching the instance factory only"
                        );
                    }
                    snapshot.factories.insert(name.clone(), factory);
                    advisors.extend(class_advisors);
                }
                LifecycleKind::PerInstantiation => {
                    if self.registry.is_singleton(&name) {
                        return Err(WeftError::lifecycle_mismatch(name));
                    }
                    let factory = Arc::new(AspectInstanceFactory::fresh(
                        self.registry.clone(),
                        name.clone(),
                    ));
                    let class_advisors = self.advisor_factory.advisors_for(&factory)?;
                    snapshot.factories.insert(name.clone(), factory);
                    advisors.extend(class_advisors);
                }
            }

            snapshot.aspects.push(AspectDescriptor::new(name, lifecycle));
        }

        debug!(
            aspects = snapshot.aspects.len(),
            cached = snapshot.advisors.len(),
            advisors = advisors.len(),
            "aspect discovery complete"
        );
        Ok((snapshot, advisors))
    }

    /// Assemble the advisor list from the published snapshot.
    fn assemble(&self, discovered: &DiscoveredAspects) -> Result<Vec<AdvisorRef>, WeftError> {
        if discovered.aspects.is_empty() {
            return Ok(Vec::new());
        }

        let mut advisors = Vec::new();
        for aspect in &discovered.aspects {
            if let Some(cached) = discovered.advisors.get(&aspect.name) {
                trace!(component = %aspect.name, count = cached.len(), "reusing cached advisors");
                advisors.extend(cached.iter().cloned());
            } else {
                // Discovery guarantees a factory for every aspect it kept.
                let factory = discovered.factories.get(&aspect.name).ok_or_else(|| {
                    WeftError::internal(format!(
                        "aspect '{}' has neither cached advisors nor an instance factory",
                        aspect.name
                    ))
                })?;
                advisors.extend(self.advisor_factory.advisors_for(factory)?);
            }
        }
        Ok(advisors)
    }
}

impl fmt::Debug for AspectAdvisorsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AspectAdvisorsBuilder")
            .field("discovered", &self.discovered.get().is_some())
            .finish_non_exhaustive()
    }
}
