//! Advisor handles at the weaving boundary.
//!
//! An advisor pairs a matching condition (pointcut) with behavior to inject
//! at the points it matches. Pointcut evaluation and interception both
//! happen in the weaving layer; discovery treats advisors as opaque handles
//! and only orders and concatenates them.

use std::fmt;
use std::sync::Arc;

/// A bound pairing of a matching condition and behavior to inject at
/// matched join points.
///
/// Implementations are produced by an [`AdvisorFactory`](crate::factory::AdvisorFactory)
/// and stay bound to instances obtainable through the factory they were
/// built from.
pub trait Advisor: fmt::Debug + Send + Sync {
    /// Name of the aspect component this advisor was derived from.
    fn aspect_name(&self) -> &str;
}

/// Shared advisor handle as assembled into the combined list handed to the
/// weaving layer. Cached advisors are re-shared by identity across calls.
pub type AdvisorRef = Arc<dyn Advisor>;
