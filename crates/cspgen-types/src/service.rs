use crate::DirectiveMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Analytics,
    Advertising,
    Social,
    Payment,
    Forms,
    Chat,
    Cdn,
    Monitoring,
    Video,
    Testing,
    Fonts,
    Maps,
    Authentication,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 14] = [
        ServiceCategory::Analytics,
        ServiceCategory::Advertising,
        ServiceCategory::Social,
        ServiceCategory::Payment,
        ServiceCategory::Forms,
        ServiceCategory::Chat,
        ServiceCategory::Cdn,
        ServiceCategory::Monitoring,
        ServiceCategory::Video,
        ServiceCategory::Testing,
        ServiceCategory::Fonts,
        ServiceCategory::Maps,
        ServiceCategory::Authentication,
        ServiceCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceCategory::Analytics => "analytics",
            ServiceCategory::Advertising => "advertising",
            ServiceCategory::Social => "social",
            ServiceCategory::Payment => "payment",
            ServiceCategory::Forms => "forms",
            ServiceCategory::Chat => "chat",
            ServiceCategory::Cdn => "cdn",
            ServiceCategory::Monitoring => "monitoring",
            ServiceCategory::Video => "video",
            ServiceCategory::Testing => "testing",
            ServiceCategory::Fonts => "fonts",
            ServiceCategory::Maps => "maps",
            ServiceCategory::Authentication => "authentication",
            ServiceCategory::Other => "other",
        }
    }

    pub fn parse(name: &str) -> Option<ServiceCategory> {
        ServiceCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breaking-change notice attached to a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    /// Date (YYYY-MM-DD) the upstream service was retired or changed.
    pub since: String,
    pub message: String,
    /// Catalog id to migrate to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative: Option<String>,
}

/// A catalog entry: the CSP sources a third-party service needs.
///
/// Built once by the catalog and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Unique lowercase-kebab identifier.
    pub id: String,
    pub name: String,
    pub category: ServiceCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
    pub directives: DirectiveMap,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// The service injects scripts at runtime and needs dynamic script execution.
    #[serde(default)]
    pub requires_dynamic: bool,
    /// The service supports (and expects) a per-request nonce.
    #[serde(default)]
    pub requires_nonce: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub verified_at: OffsetDateTime,
}

impl ServiceDefinition {
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}
