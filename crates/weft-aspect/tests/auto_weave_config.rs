//! End-to-end test of the declarative configuration adapter: a TOML
//! auto-weave block restricts discovery through the eligibility hook,
//! wired before the builder's first call.

use std::collections::HashMap;
use std::sync::Arc;

use weft_aspect::{AspectAdvisorsBuilder, WeaveConfig};
use weft_core::{
    Advisor, AdvisorFactory, AdvisorRef, AspectClassifier, AspectInstanceFactory,
    ComponentInstance, ComponentRegistry, LifecycleKind, TypeKey, WeftError,
};

struct StaticRegistry {
    components: Vec<(&'static str, &'static str, bool)>,
}

impl ComponentRegistry for StaticRegistry {
    fn component_names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.0.to_string()).collect()
    }

    fn type_of(&self, name: &str) -> Option<TypeKey> {
        self.components
            .iter()
            .find(|c| c.0 == name)
            .map(|c| TypeKey::new(c.1))
    }

    fn is_singleton(&self, name: &str) -> bool {
        self.components
            .iter()
            .find(|c| c.0 == name)
            .map(|c| c.2)
            .unwrap_or(false)
    }

    fn instance(&self, name: &str) -> Result<ComponentInstance, WeftError> {
        Ok(Arc::new(name.to_string()))
    }
}

struct TableClassifier {
    lifecycles: HashMap<&'static str, LifecycleKind>,
}

impl AspectClassifier for TableClassifier {
    fn is_aspect(&self, ty: &TypeKey) -> bool {
        self.lifecycles.contains_key(ty.as_str())
    }

    fn lifecycle_of(&self, ty: &TypeKey) -> Result<LifecycleKind, WeftError> {
        self.lifecycles
            .get(ty.as_str())
            .copied()
            .ok_or_else(|| WeftError::internal(format!("not an aspect type: {ty}")))
    }
}

#[derive(Debug)]
struct NamedAdvisor {
    aspect: String,
}

impl Advisor for NamedAdvisor {
    fn aspect_name(&self) -> &str {
        &self.aspect
    }
}

struct SimpleAdvisorFactory;

impl AdvisorFactory for SimpleAdvisorFactory {
    fn advisors_for(&self, factory: &AspectInstanceFactory) -> Result<Vec<AdvisorRef>, WeftError> {
        let _instance = factory.create_instance()?;
        Ok(vec![Arc::new(NamedAdvisor {
            aspect: factory.aspect_name().to_string(),
        }) as AdvisorRef])
    }
}

fn demo_builder(config: &WeaveConfig) -> AspectAdvisorsBuilder {
    let registry = Arc::new(StaticRegistry {
        components: vec![
            ("audit_trail", "AuditAspect", true),
            ("tx_retry", "RetryAspect", false),
            ("metrics_probe", "MetricsAspect", true),
        ],
    });
    let classifier = Arc::new(TableClassifier {
        lifecycles: [
            ("AuditAspect", LifecycleKind::Singleton),
            ("RetryAspect", LifecycleKind::PerInstantiation),
            ("MetricsAspect", LifecycleKind::Singleton),
        ]
        .into_iter()
        .collect(),
    });

    AspectAdvisorsBuilder::new(registry, classifier, Arc::new(SimpleAdvisorFactory))
        .with_eligibility(config.eligibility().expect("patterns compile"))
}

#[test]
fn include_patterns_restrict_discovery() {
    let config: WeaveConfig = toml::from_str(
        r#"
        include = ["audit.*", "tx_.*"]
        "#,
    )
    .expect("config parses");

    let builder = demo_builder(&config);
    let advisors = builder.build_advisors().expect("discovery succeeds");

    let names: Vec<&str> = advisors.iter().map(|a| a.aspect_name()).collect();
    assert_eq!(names, vec!["audit_trail", "tx_retry"]);

    // Excluded names stay excluded on later calls too.
    let again = builder.build_advisors().expect("fast path succeeds");
    let names: Vec<&str> = again.iter().map(|a| a.aspect_name()).collect();
    assert_eq!(names, vec!["audit_trail", "tx_retry"]);
}

#[test]
fn absent_include_list_accepts_every_component() {
    let config: WeaveConfig = toml::from_str("proxy_target_class = true").expect("config parses");
    assert!(config.proxy_target_class);

    let builder = demo_builder(&config);
    let advisors = builder.build_advisors().expect("discovery succeeds");
    assert_eq!(advisors.len(), 3);
}
