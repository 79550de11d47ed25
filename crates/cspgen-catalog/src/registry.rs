use crate::services;
use crate::spec::define_service;
use cspgen_domain::ServiceCatalog;
use cspgen_types::{ServiceCategory, ServiceDefinition};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("service id '{id}' is not lowercase-kebab")]
    InvalidId { id: String },

    #[error("service id '{id}' is defined more than once")]
    DuplicateId { id: String },

    #[error("alias '{alias}' of '{service}' collides with {existing}")]
    AliasCollision {
        alias: String,
        service: String,
        existing: String,
    },
}

/// Immutable id and alias index over a set of service definitions.
///
/// Read-only after [`Registry::build`]; share it freely across threads.
#[derive(Debug, Default)]
pub struct Registry {
    by_id: HashMap<String, ServiceDefinition>,
    aliases: HashMap<String, String>,
    /// Ids in sorted order for deterministic listing.
    ids: Vec<String>,
}

impl Registry {
    pub fn build<I>(definitions: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ServiceDefinition>,
    {
        let mut by_id: HashMap<String, ServiceDefinition> = HashMap::new();

        for def in definitions {
            if !is_kebab(&def.id) {
                return Err(RegistryError::InvalidId { id: def.id });
            }
            if by_id.contains_key(&def.id) {
                return Err(RegistryError::DuplicateId { id: def.id });
            }
            by_id.insert(def.id.clone(), def);
        }

        let mut ids: Vec<String> = by_id.keys().cloned().collect();
        ids.sort();

        // Second pass so aliases are checked against every id, not only earlier ones.
        let mut aliases: HashMap<String, String> = HashMap::new();
        for id in &ids {
            let def = &by_id[id];
            for alias in &def.aliases {
                if by_id.contains_key(alias) {
                    return Err(RegistryError::AliasCollision {
                        alias: alias.clone(),
                        service: id.clone(),
                        existing: format!("service id '{alias}'"),
                    });
                }
                if let Some(owner) = aliases.get(alias) {
                    return Err(RegistryError::AliasCollision {
                        alias: alias.clone(),
                        service: id.clone(),
                        existing: format!("an alias of '{owner}'"),
                    });
                }
                aliases.insert(alias.clone(), id.clone());
            }
        }

        debug!(services = ids.len(), aliases = aliases.len(), "built service registry");
        Ok(Self {
            by_id,
            aliases,
            ids,
        })
    }

    /// Look up by id or alias. The identifier is trimmed; matching is case-sensitive.
    pub fn get(&self, identifier: &str) -> Option<&ServiceDefinition> {
        let identifier = identifier.trim();
        self.by_id.get(identifier).or_else(|| {
            self.aliases
                .get(identifier)
                .and_then(|id| self.by_id.get(id))
        })
    }

    /// All services sorted by id.
    pub fn services(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.ids.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn by_category(&self, category: ServiceCategory) -> Vec<&ServiceDefinition> {
        self.services().filter(|s| s.category == category).collect()
    }

    /// Case-insensitive substring search over id, name, aliases and description.
    pub fn search(&self, query: &str) -> Vec<&ServiceDefinition> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.services().collect();
        }
        self.services()
            .filter(|s| {
                s.id.contains(&needle)
                    || s.name.to_lowercase().contains(&needle)
                    || s.aliases.iter().any(|a| a.contains(&needle))
                    || s.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl ServiceCatalog for Registry {
    fn lookup_by_id(&self, id: &str) -> Option<&ServiceDefinition> {
        self.by_id.get(id)
    }

    fn lookup_by_alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }
}

static BUNDLED: LazyLock<Result<Registry, RegistryError>> =
    LazyLock::new(|| Registry::build(services::all().map(define_service)));

/// The registry built from the bundled service tables, constructed on first use.
pub fn bundled() -> Result<&'static Registry, RegistryError> {
    BUNDLED.as_ref().map_err(Clone::clone)
}

fn is_kebab(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--")
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ServiceSpec;
    use cspgen_types::Directive;

    fn def(id: &'static str, aliases: &'static [&'static str]) -> ServiceDefinition {
        define_service(&ServiceSpec {
            id,
            name: id,
            aliases,
            directives: &[(Directive::ScriptSrc, &["https://cdn.example.com"])],
            ..ServiceSpec::EMPTY
        })
    }

    #[test]
    fn bundled_registry_builds() {
        let registry = bundled().expect("bundled registry");
        assert!(registry.len() >= 25);
        assert!(registry.get("google-analytics").is_some());
    }

    #[test]
    fn bundled_ids_are_sorted_and_unique() {
        let registry = bundled().expect("bundled registry");
        let ids = registry.ids();
        let mut sorted = ids.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted.as_slice());
    }

    #[test]
    fn alias_lookup_goes_through_the_index() {
        let registry = bundled().expect("bundled registry");
        assert_eq!(registry.lookup_by_alias("ga4"), Some("google-analytics"));
        assert_eq!(
            registry.get(" gtag ").map(|s| s.id.as_str()),
            Some("google-analytics")
        );
        assert!(registry.lookup_by_id("ga4").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = bundled().expect("bundled registry");
        assert!(registry.get("Google-Analytics").is_none());
    }

    #[test]
    fn rejects_non_kebab_ids() {
        for bad in ["", "Stripe", "my_service", "-lead", "trail-", "dou--ble", "a b"] {
            let err = Registry::build([def_owned(bad)]).unwrap_err();
            assert_eq!(err, RegistryError::InvalidId { id: bad.to_string() }, "{bad}");
        }
    }

    fn def_owned(id: &str) -> ServiceDefinition {
        let mut d = def("placeholder", &[]);
        d.id = id.to_string();
        d
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Registry::build([def("stripe", &[]), def("stripe", &[])]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateId {
                id: "stripe".to_string()
            }
        );
    }

    #[test]
    fn rejects_alias_shadowing_an_id() {
        let err = Registry::build([def("alpha", &["beta"]), def("beta", &[])]).unwrap_err();
        assert!(matches!(err, RegistryError::AliasCollision { ref alias, .. } if alias == "beta"));
        assert_eq!(
            err.to_string(),
            "alias 'beta' of 'alpha' collides with service id 'beta'"
        );
    }

    #[test]
    fn rejects_shared_alias() {
        let err = Registry::build([def("alpha", &["shared"]), def("beta", &["shared"])]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "alias 'shared' of 'beta' collides with an alias of 'alpha'"
        );
    }

    #[test]
    fn category_and_search_filters() {
        let registry = bundled().expect("bundled registry");
        let fonts = registry.by_category(ServiceCategory::Fonts);
        assert!(fonts.iter().any(|s| s.id == "google-fonts"));
        assert!(fonts.iter().all(|s| s.category == ServiceCategory::Fonts));

        let hits = registry.search("STRIPE");
        assert!(hits.iter().any(|s| s.id == "stripe"));
        assert_eq!(registry.search("").len(), registry.len());
    }

    #[test]
    fn bundled_values_are_well_formed_sources() {
        let registry = bundled().expect("bundled registry");
        for service in registry.services() {
            assert!(!service.directives.is_empty(), "{} has no directives", service.id);
            for (directive, values) in service.directives.iter() {
                for value in values {
                    assert!(
                        !value.is_empty()
                            && !value.chars().any(char::is_whitespace)
                            && !value.contains(';')
                            && !value.contains(','),
                        "{}: malformed {directive} source {value:?}",
                        service.id
                    );
                    assert!(
                        !cspgen_types::keywords::is_nonce_token(value),
                        "{} ships a nonce token",
                        service.id
                    );
                }
            }
        }
    }

    #[test]
    fn deprecated_alternatives_resolve() {
        let registry = bundled().expect("bundled registry");
        for service in registry.services() {
            if let Some(alt) = service.deprecated.as_ref().and_then(|d| d.alternative.as_ref()) {
                assert!(registry.get(alt).is_some(), "{} -> {alt}", service.id);
            }
        }
    }
}
