//! Eligibility policies restricting which registry names participate in
//! aspect discovery.
//!
//! The builder consults its policy once per name during the discovery pass.
//! Names rejected here are skipped entirely and never reconsidered.

use regex::Regex;
use weft_core::WeftError;

/// Predicate deciding whether a registry component name participates in
/// aspect discovery.
///
/// Supplied as a composed strategy object rather than an override point, so
/// the builder stays composable without inheritance. Policies must be
/// stateless with respect to names: the answer for a given name may be
/// consulted once and remembered for the builder's lifetime.
pub trait EligibilityPolicy: Send + Sync + std::fmt::Debug {
    /// Whether the named component may be considered an aspect host.
    fn is_eligible(&self, name: &str) -> bool;
}

/// Default policy: every name is eligible.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl EligibilityPolicy for AcceptAll {
    fn is_eligible(&self, _name: &str) -> bool {
        true
    }
}

/// Include-pattern policy: a name is eligible when any configured pattern
/// matches it in full.
#[derive(Debug)]
pub struct PatternEligibility {
    patterns: Vec<Regex>,
}

impl PatternEligibility {
    /// Compile the given include patterns.
    ///
    /// Patterns are anchored so each must match the whole component name,
    /// not a substring. Fails on the first malformed pattern, before
    /// discovery can run against a half-built policy.
    pub fn new<I, S>(patterns: I) -> Result<Self, WeftError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let anchored = format!("^(?:{pattern})$");
            let regex = Regex::new(&anchored).map_err(|e| {
                WeftError::invalid_config(format!("bad include pattern '{pattern}': {e}"))
            })?;
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }
}

impl EligibilityPolicy for PatternEligibility {
    fn is_eligible(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accept_all_accepts_everything() {
        assert!(AcceptAll.is_eligible("anything"));
        assert!(AcceptAll.is_eligible(""));
    }

    #[test]
    fn patterns_match_the_full_name() {
        let policy = PatternEligibility::new(["audit.*"]).unwrap();
        assert!(policy.is_eligible("audit_aspect"));
        assert!(!policy.is_eligible("non_audit_aspect"));
    }

    #[test]
    fn any_matching_pattern_is_enough() {
        let policy = PatternEligibility::new(["audit.*", "tx_.*"]).unwrap();
        assert!(policy.is_eligible("tx_logging"));
        assert!(policy.is_eligible("audit_trail"));
        assert!(!policy.is_eligible("metrics"));
    }

    #[test]
    fn malformed_pattern_is_a_config_error() {
        let err = PatternEligibility::new(["("]).unwrap_err();
        assert_matches!(err, WeftError::InvalidConfig { .. });
    }
}
