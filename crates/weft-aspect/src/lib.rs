//! # Weft Aspect - Advisor Discovery & Caching
//!
//! Discovers aspect components in a [`ComponentRegistry`], classifies each
//! by instantiation lifecycle, and compiles the combined advisor list for
//! the weaving layer. The central type is [`AspectAdvisorsBuilder`]: a
//! stateful orchestrator that scans the registry exactly once, eagerly
//! materializes and caches advisors for singleton aspects, and defers
//! materialization for per-instantiation aspects to every call.
//!
//! Discovery is restricted through an [`EligibilityPolicy`], either
//! programmatic or wired from a declarative [`WeaveConfig`].
//!
//! [`ComponentRegistry`]: weft_core::ComponentRegistry

#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod eligibility;

pub use builder::AspectAdvisorsBuilder;
pub use config::WeaveConfig;
pub use eligibility::{AcceptAll, EligibilityPolicy, PatternEligibility};
