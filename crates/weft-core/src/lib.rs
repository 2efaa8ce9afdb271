//! Weft Core - Advisor Model Foundation
//!
//! This crate provides the shared types and capability interfaces for the
//! Weft aspect-discovery layer. It contains only type definitions and trait
//! boundaries with no orchestration logic.
//!
//! # Capability Interfaces (Pure Signatures)
//! - [`ComponentRegistry`]: named components, type metadata, scope queries
//! - [`AspectClassifier`]: aspect detection and lifecycle classification
//! - [`AdvisorFactory`]: advisor materialization for one aspect
//!
//! # Data Model
//! - [`Advisor`] / [`AdvisorRef`]: opaque pointcut + behavior pairs
//! - [`AspectInstanceFactory`]: fixed-instance or fresh-instance producer
//! - [`LifecycleKind`] / [`AspectDescriptor`]: classification results
//!
//! The discovery orchestrator that consumes these boundaries lives in
//! `weft-aspect`. The proxying/weaving layer that consumes advisor lists is
//! out of scope entirely.

#![forbid(unsafe_code)]

/// Advisor handles at the weaving boundary
pub mod advisor;

/// Aspect classification types and the classifier boundary
pub mod aspect;

/// Component registry boundary types
pub mod component;

/// Unified error handling
pub mod errors;

/// Aspect instance factories and advisor materialization
pub mod factory;

pub use advisor::{Advisor, AdvisorRef};
pub use aspect::{AspectClassifier, AspectDescriptor, LifecycleKind};
pub use component::{ComponentInstance, ComponentRegistry, TypeKey};
pub use errors::{BoxError, WeftError};
pub use factory::{AdvisorFactory, AspectInstanceFactory};
