//! Declarative configuration adapter for aspect auto-weaving.
//!
//! A [`WeaveConfig`] block mirrors the shape of an `aspect auto-weave`
//! configuration entry: include patterns restricting which component names
//! are scanned for aspects, plus two flags consumed by the proxy creator
//! rather than by discovery itself. The adapter's only job is to compile
//! the include list into an [`EligibilityPolicy`] and hand it to the
//! builder before its first `build_advisors()` call.

use serde::Deserialize;

use weft_core::WeftError;

use crate::eligibility::{AcceptAll, EligibilityPolicy, PatternEligibility};

/// Declarative auto-weave configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeaveConfig {
    /// Regex patterns naming the components eligible for aspect discovery.
    /// Empty means every component is eligible.
    pub include: Vec<String>,

    /// Force subclass-based proxies even where an interface proxy would do.
    /// Passed through untouched to the proxy creator.
    pub proxy_target_class: bool,

    /// Expose the active proxy through the weaving layer's invocation
    /// context. Passed through untouched to the proxy creator.
    pub expose_proxy: bool,
}

impl WeaveConfig {
    /// Build the eligibility policy this configuration describes.
    ///
    /// No include patterns leaves the default accept-all hook in place;
    /// otherwise a name is eligible when any pattern matches it in full.
    /// A malformed pattern fails here, at wiring time.
    pub fn eligibility(&self) -> Result<Box<dyn EligibilityPolicy>, WeftError> {
        if self.include.is_empty() {
            Ok(Box::new(AcceptAll))
        } else {
            let policy = PatternEligibility::new(self.include.iter().map(String::as_str))?;
            Ok(Box::new(policy))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_config_accepts_every_name() {
        let config = WeaveConfig::default();
        let policy = config.eligibility().unwrap();
        assert!(policy.is_eligible("anything_at_all"));
    }

    #[test]
    fn include_patterns_restrict_names() {
        let config: WeaveConfig = toml::from_str(
            r#"
            include = ["audit.*", "tx_logger"]
            proxy_target_class = true
            "#,
        )
        .unwrap();
        assert!(config.proxy_target_class);
        assert!(!config.expose_proxy);

        let policy = config.eligibility().unwrap();
        assert!(policy.is_eligible("audit_trail"));
        assert!(policy.is_eligible("tx_logger"));
        assert!(!policy.is_eligible("tx_logger_extra"));
        assert!(!policy.is_eligible("metrics"));
    }

    #[test]
    fn malformed_include_pattern_fails_at_wiring_time() {
        let config: WeaveConfig = toml::from_str(r#"include = ["[unclosed"]"#).unwrap();
        assert_matches!(config.eligibility(), Err(WeftError::InvalidConfig { .. }));
    }
}
