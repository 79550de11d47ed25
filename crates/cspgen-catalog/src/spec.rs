use cspgen_types::{Deprecation, Directive, DirectiveMap, ServiceCategory, ServiceDefinition};
use time::OffsetDateTime;
use time::macros::datetime;

/// Static authoring form of a service. See [`define_service`].
#[derive(Debug, Clone, Copy)]
pub struct ServiceSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ServiceCategory,
    pub description: &'static str,
    pub website: &'static str,
    pub directives: &'static [(Directive, &'static [&'static str])],
    pub aliases: &'static [&'static str],
    pub requires_dynamic: bool,
    pub requires_nonce: bool,
    pub notes: Option<&'static str>,
    pub deprecated: Option<DeprecationSpec>,
    pub last_updated: OffsetDateTime,
    /// Defaults to `last_updated` when unset.
    pub verified_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy)]
pub struct DeprecationSpec {
    pub since: &'static str,
    pub message: &'static str,
    pub alternative: Option<&'static str>,
}

impl ServiceSpec {
    /// Base record for `..ServiceSpec::EMPTY` in data tables.
    pub const EMPTY: ServiceSpec = ServiceSpec {
        id: "",
        name: "",
        category: ServiceCategory::Other,
        description: "",
        website: "",
        directives: &[],
        aliases: &[],
        requires_dynamic: false,
        requires_nonce: false,
        notes: None,
        deprecated: None,
        last_updated: datetime!(2025-01-01 00:00 UTC),
        verified_at: None,
    };
}

/// Stamp defaults onto a spec and produce the immutable definition.
///
/// - aliases are de-duplicated and never repeat the id
/// - directive values are de-duplicated per directive, first occurrence wins
/// - `verified_at` falls back to `last_updated`
pub fn define_service(spec: &ServiceSpec) -> ServiceDefinition {
    let mut directives = DirectiveMap::new();
    for (directive, values) in spec.directives {
        directives.extend_unique(*directive, values.iter().copied());
    }

    let mut aliases: Vec<String> = Vec::with_capacity(spec.aliases.len());
    for alias in spec.aliases {
        if *alias != spec.id && !aliases.iter().any(|a| a == alias) {
            aliases.push((*alias).to_string());
        }
    }

    ServiceDefinition {
        id: spec.id.to_string(),
        name: spec.name.to_string(),
        category: spec.category,
        description: spec.description.to_string(),
        website: spec.website.to_string(),
        directives,
        aliases,
        requires_dynamic: spec.requires_dynamic,
        requires_nonce: spec.requires_nonce,
        notes: spec.notes.map(str::to_string),
        deprecated: spec.deprecated.map(|d| Deprecation {
            since: d.since.to_string(),
            message: d.message.to_string(),
            alternative: d.alternative.map(str::to_string),
        }),
        last_updated: spec.last_updated,
        verified_at: spec.verified_at.unwrap_or(spec.last_updated),
    }
}
