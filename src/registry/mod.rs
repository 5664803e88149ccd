//! Role registry: per-family maps from role name to descriptor.
//!
//! Lookups never fail. A miss reports one `UnknownRole` diagnostic and hands
//! back the family default, which is seeded from the built-in tables and can
//! be replaced but never removed.

pub mod builtin;
pub mod descriptor;

pub use descriptor::{RoleDescriptor, RoleDescriptorBuilder, SelectionAttr};

use crate::config::{RoleConfig, RolesConfig};
use crate::diagnostics::{Diagnostic, DiagnosticPolicy, DiagnosticSink, TracingSink};
use crate::error::RegistryError;
use crate::renderer::renderer_by_name;
use crate::vocabulary::{Family, RoleName};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Result of a registry lookup
#[derive(Debug, Clone, Copy)]
pub struct RoleLookup<'a> {
    /// Role actually used: the requested one, or the family default
    pub role: &'a str,
    pub descriptor: &'a RoleDescriptor,
    pub fell_back: bool,
}

/// Registry for all four families
pub struct RoleRegistry {
    families: HashMap<Family, HashMap<String, RoleDescriptor>>,
    sink: Arc<dyn DiagnosticSink>,
    policy: DiagnosticPolicy,
}

impl RoleRegistry {
    /// Registry seeded with the built-in roles, reporting through `tracing`
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        let mut families = HashMap::new();
        for family in Family::ALL {
            let roles: HashMap<String, RoleDescriptor> = builtin::builtin_roles(family)
                .into_iter()
                .map(|(name, descriptor)| (name.to_string(), descriptor))
                .collect();
            families.insert(family, roles);
        }
        Self {
            families,
            sink,
            policy: DiagnosticPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DiagnosticPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_policy(&mut self, policy: DiagnosticPolicy) {
        self.policy = policy;
    }

    pub fn policy(&self) -> DiagnosticPolicy {
        self.policy
    }

    /// Send a diagnostic to the sink if the policy allows it
    pub fn report(&self, diagnostic: Diagnostic) {
        if self.policy.allows(&diagnostic) {
            self.sink.emit(&diagnostic);
        }
    }

    fn table(&self, family: Family) -> Option<&HashMap<String, RoleDescriptor>> {
        self.families.get(&family)
    }

    /// Descriptor for the family default role
    pub fn default_descriptor(&self, family: Family) -> &RoleDescriptor {
        // Seeded in the constructor; no API removes entries.
        &self.families[&family][family.default_role()]
    }

    /// Exact lookup without fallback or diagnostics
    pub fn lookup(&self, family: Family, role: &str) -> Option<&RoleDescriptor> {
        self.table(family).and_then(|roles| roles.get(role))
    }

    pub fn contains(&self, family: Family, role: &str) -> bool {
        self.lookup(family, role).is_some()
    }

    /// Resolve `role`, falling back to the family default with exactly one
    /// `UnknownRole` diagnostic on a miss.
    pub fn get_role_config(&self, family: Family, role: &str) -> RoleLookup<'_> {
        if let Some((name, descriptor)) = self
            .table(family)
            .and_then(|roles| roles.get_key_value(role))
        {
            return RoleLookup {
                role: name.as_str(),
                descriptor,
                fell_back: false,
            };
        }

        let fallback = family.default_role();
        self.report(Diagnostic::UnknownRole {
            family,
            requested: role.to_string(),
            fallback: fallback.to_string(),
        });
        RoleLookup {
            role: fallback,
            descriptor: self.default_descriptor(family),
            fell_back: true,
        }
    }

    /// Insert or replace a role. Replacing reports `RegistryOverwrite` and
    /// returns the previous descriptor; only a malformed name is an error.
    pub fn register_role(
        &mut self,
        family: Family,
        role: &str,
        descriptor: RoleDescriptor,
    ) -> Result<Option<RoleDescriptor>, RegistryError> {
        let name = RoleName::new(role)?;
        debug!(
            family = %family,
            role = %name,
            tag = %descriptor.html_tag,
            renderer = descriptor.renderer_name(),
            "Registering role"
        );
        let previous = self
            .families
            .entry(family)
            .or_default()
            .insert(name.as_str().to_string(), descriptor);
        if previous.is_some() {
            self.report(Diagnostic::RegistryOverwrite {
                family,
                role: name.as_str().to_string(),
            });
        }
        Ok(previous)
    }

    /// Role names in a family, sorted
    pub fn roles(&self, family: Family) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .table(family)
            .map(|roles| roles.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Number of roles across all families
    pub fn len(&self) -> usize {
        self.families.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register every configured role, family by family in name order.
    /// Stops at the first invalid entry; use [`RoleRegistry::validate`] to
    /// collect all problems up front.
    pub fn apply_config(&mut self, roles: &RolesConfig) -> Result<usize, RegistryError> {
        let mut count = 0;
        for family in Family::ALL {
            for (key, config) in roles.for_family(family) {
                let name = config.role_name(key);
                let descriptor = descriptor_from_config(family, name, config)?;
                self.register_role(family, name, descriptor)?;
                count += 1;
            }
        }
        debug!(count, "Applied configured roles");
        Ok(count)
    }

    /// Every problem `apply_config` would hit, without mutating the registry
    pub fn validate(roles: &RolesConfig) -> Vec<RegistryError> {
        let mut errors = Vec::new();
        for family in Family::ALL {
            for (key, config) in roles.for_family(family) {
                let name = config.role_name(key);
                if let Err(err) = RoleName::new(name) {
                    errors.push(err.into());
                }
                if let Err(err) = descriptor_from_config(family, name, config) {
                    errors.push(err);
                }
            }
        }
        errors
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for family in Family::ALL {
            map.entry(&family, &self.roles(family));
        }
        map.finish()
    }
}

/// Build a descriptor from a configured role. The renderer is required and
/// must name a built-in strategy.
pub fn descriptor_from_config(
    family: Family,
    role: &str,
    config: &RoleConfig,
) -> Result<RoleDescriptor, RegistryError> {
    let mut builder = RoleDescriptor::builder(config.html_tag.clone())
        .base_styles(config.base_styles.clone())
        .description(config.description.clone());

    for (name, value) in &config.aria {
        builder = builder.aria(name.clone(), value.clone());
    }

    if let Some(name) = &config.renderer {
        let renderer = renderer_by_name(name).ok_or_else(|| RegistryError::UnknownRenderer {
            name: name.clone(),
            role: role.to_string(),
        })?;
        builder = builder.renderer(renderer);
    }

    let (clickable, focusable) = match family {
        Family::Action => (true, true),
        Family::Field => (false, true),
        Family::Block | Family::Text => (false, false),
    };
    builder = builder
        .clickable(config.clickable.unwrap_or(clickable))
        .focusable(config.focusable.unwrap_or(focusable))
        .native_disabled(matches!(
            config.html_tag.as_str(),
            "button" | "input" | "select" | "textarea"
        ));
    if let Some(attr) = config.selection_attr {
        builder = builder.selection_attr(attr);
    }

    builder.build(family, role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::renderer::ElementRenderer;
    use std::collections::BTreeMap;

    fn registry() -> (RoleRegistry, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (RoleRegistry::with_sink(sink.clone()), sink)
    }

    fn panel(description: &str) -> RoleDescriptor {
        RoleDescriptor::builder("div")
            .renderer(Arc::new(ElementRenderer))
            .description(description)
            .build(Family::Block, "Panel")
            .unwrap()
    }

    #[test]
    fn test_known_role_resolves_without_diagnostic() {
        let (registry, sink) = registry();
        let lookup = registry.get_role_config(Family::Text, "Title");
        assert_eq!(lookup.role, "Title");
        assert!(!lookup.fell_back);
        assert_eq!(lookup.descriptor.html_tag, "h1");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unknown_role_falls_back_with_one_diagnostic() {
        let (registry, sink) = registry();
        let lookup = registry.get_role_config(Family::Field, "TotallyUnknownRole123");
        assert!(lookup.fell_back);
        assert_eq!(lookup.role, "Textbox");
        assert_eq!(lookup.descriptor, registry.default_descriptor(Family::Field));
        assert_eq!(
            sink.events(),
            vec![Diagnostic::UnknownRole {
                family: Family::Field,
                requested: "TotallyUnknownRole123".to_string(),
                fallback: "Textbox".to_string(),
            }]
        );
    }

    #[test]
    fn test_lookup_is_silent() {
        let (registry, sink) = registry();
        assert!(registry.lookup(Family::Action, "Nope").is_none());
        assert!(registry.lookup(Family::Action, "Tab").is_some());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_register_role_last_write_wins() {
        let (mut registry, sink) = registry();
        assert!(registry
            .register_role(Family::Block, "Panel", panel("A"))
            .unwrap()
            .is_none());
        let previous = registry
            .register_role(Family::Block, "Panel", panel("B"))
            .unwrap();
        assert_eq!(previous.unwrap().description, "A");
        assert_eq!(
            registry.get_role_config(Family::Block, "Panel").descriptor.description,
            "B"
        );
        assert_eq!(
            sink.events(),
            vec![Diagnostic::RegistryOverwrite {
                family: Family::Block,
                role: "Panel".to_string()
            }]
        );
    }

    #[test]
    fn test_register_rejects_malformed_name() {
        let (mut registry, _) = registry();
        let err = registry
            .register_role(Family::Block, "9lives", panel("x"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidRoleName(_)));
        assert!(!registry.contains(Family::Block, "9lives"));
    }

    #[test]
    fn test_policy_silences_unknown_role() {
        let (registry, sink) = registry();
        let registry = registry.with_policy(DiagnosticPolicy {
            warn_on_unknown: false,
            warn_on_overwrite: true,
        });
        let lookup = registry.get_role_config(Family::Action, "Nope");
        assert!(lookup.fell_back);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_roles_sorted() {
        let (registry, _) = registry();
        let roles = registry.roles(Family::Text);
        assert_eq!(roles, vec!["Body", "Caption", "Code", "Heading", "Label", "Title"]);
    }

    #[test]
    fn test_descriptor_from_config_requires_html_tag() {
        let config = RoleConfig {
            renderer: Some("element".to_string()),
            ..RoleConfig::default()
        };
        assert!(matches!(
            descriptor_from_config(Family::Block, "Panel", &config),
            Err(RegistryError::InvalidTag { ref tag, .. }) if tag.is_empty()
        ));

        let mut roles = RolesConfig::default();
        roles.block.insert("panel".to_string(), config);
        let errors = RoleRegistry::validate(&roles);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], RegistryError::InvalidTag { .. }));

        let (mut registry, _) = registry();
        assert!(registry.apply_config(&roles).is_err());
        assert!(!registry.contains(Family::Block, "panel"));
    }

    #[test]
    fn test_descriptor_from_config_requires_known_renderer() {
        let config = RoleConfig {
            html_tag: "div".to_string(),
            renderer: Some("canvas".to_string()),
            ..RoleConfig::default()
        };
        let err = descriptor_from_config(Family::Block, "Panel", &config).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownRenderer {
                name: "canvas".to_string(),
                role: "Panel".to_string()
            }
        );

        let missing = RoleConfig {
            html_tag: "div".to_string(),
            ..RoleConfig::default()
        };
        assert!(matches!(
            descriptor_from_config(Family::Block, "Panel", &missing),
            Err(RegistryError::MissingRenderer { .. })
        ));
    }

    #[test]
    fn test_apply_config_registers_in_name_order() {
        let (mut registry, sink) = registry();
        let mut block = BTreeMap::new();
        block.insert(
            "Panel".to_string(),
            RoleConfig {
                html_tag: "aside".to_string(),
                renderer: Some("element".to_string()),
                base_styles: "flex flex-col".to_string(),
                ..RoleConfig::default()
            },
        );
        block.insert(
            "Card".to_string(),
            RoleConfig {
                html_tag: "article".to_string(),
                renderer: Some("element".to_string()),
                ..RoleConfig::default()
            },
        );
        let roles = RolesConfig {
            block,
            ..RolesConfig::default()
        };
        assert_eq!(registry.apply_config(&roles).unwrap(), 2);
        assert_eq!(registry.lookup(Family::Block, "Panel").unwrap().html_tag, "aside");
        assert_eq!(registry.lookup(Family::Block, "Card").unwrap().html_tag, "article");
        // Card is built in, so it was overwritten
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut text = BTreeMap::new();
        text.insert(
            "Bad Name".to_string(),
            RoleConfig {
                html_tag: "p".to_string(),
                renderer: Some("element".to_string()),
                ..RoleConfig::default()
            },
        );
        text.insert(
            "Quote".to_string(),
            RoleConfig {
                html_tag: "blockquote".to_string(),
                renderer: Some("nope".to_string()),
                ..RoleConfig::default()
            },
        );
        let roles = RolesConfig {
            text,
            ..RolesConfig::default()
        };
        let errors = RoleRegistry::validate(&roles);
        assert_eq!(errors.len(), 2);
    }
}
