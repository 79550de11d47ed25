//! Identifier resolution against a [`ServiceCatalog`].
//!
//! Policy: identifiers are trimmed, then matched case-sensitively against the
//! catalog's lowercase-kebab ids, then against aliases. A legacy `<id>@<version>`
//! suffix is accepted and discarded.

use crate::catalog::ServiceCatalog;
use cspgen_types::ServiceDefinition;
use tracing::debug;

/// An identifier split into its lookup key and an optional legacy version suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedIdentifier<'a> {
    pub id: &'a str,
    pub version: Option<&'a str>,
}

/// Parse `raw` into a lookup key. Returns `None` for empty or malformed input.
pub fn parse_identifier(raw: &str) -> Option<ParsedIdentifier<'_>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.split_once('@') {
        None => Some(ParsedIdentifier {
            id: trimmed,
            version: None,
        }),
        Some((id, version)) => {
            if id.is_empty() || version.is_empty() || version.contains('@') {
                return None;
            }
            Some(ParsedIdentifier {
                id,
                version: Some(version),
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedService<'a> {
    pub service: &'a ServiceDefinition,
    /// Legacy `@version` suffix that was stripped, if any.
    pub discarded_version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(ResolvedService<'a>),
    NotFound,
}

pub fn resolve<'a, C>(catalog: &'a C, identifier: &str) -> Resolution<'a>
where
    C: ServiceCatalog + ?Sized,
{
    let Some(parsed) = parse_identifier(identifier) else {
        debug!(identifier, "malformed service identifier");
        return Resolution::NotFound;
    };

    let found = catalog.lookup_by_id(parsed.id).or_else(|| {
        catalog
            .lookup_by_alias(parsed.id)
            .and_then(|canonical| catalog.lookup_by_id(canonical))
    });

    match found {
        Some(service) => {
            debug!(identifier, id = %service.id, "resolved service");
            Resolution::Found(ResolvedService {
                service,
                discarded_version: parsed.version.map(str::to_string),
            })
        }
        None => {
            debug!(identifier, "unknown service");
            Resolution::NotFound
        }
    }
}
