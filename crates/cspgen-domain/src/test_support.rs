use crate::catalog::ServiceCatalog;
use cspgen_types::{
    Deprecation, Directive, DirectiveMap, ServiceCategory, ServiceDefinition,
};
use std::collections::HashMap;
use time::OffsetDateTime;
use time::macros::datetime;

const UPDATED: OffsetDateTime = datetime!(2025-01-15 00:00 UTC);

pub fn directives(entries: &[(Directive, &[&str])]) -> DirectiveMap {
    entries.iter().map(|(d, v)| (*d, v.to_vec())).collect()
}

pub fn service(id: &str, entries: &[(Directive, &[&str])]) -> ServiceDefinition {
    ServiceDefinition {
        id: id.to_string(),
        name: id.to_string(),
        category: ServiceCategory::Other,
        description: String::new(),
        website: String::new(),
        directives: directives(entries),
        aliases: Vec::new(),
        requires_dynamic: false,
        requires_nonce: false,
        notes: None,
        deprecated: None,
        last_updated: UPDATED,
        verified_at: UPDATED,
    }
}

/// In-memory catalog mirroring a handful of real entries.
#[derive(Default)]
pub struct TestCatalog {
    by_id: HashMap<String, ServiceDefinition>,
    aliases: HashMap<String, String>,
}

impl TestCatalog {
    pub fn add(&mut self, def: ServiceDefinition) {
        for alias in &def.aliases {
            self.aliases.insert(alias.clone(), def.id.clone());
        }
        self.by_id.insert(def.id.clone(), def);
    }
}

impl ServiceCatalog for TestCatalog {
    fn lookup_by_id(&self, id: &str) -> Option<&ServiceDefinition> {
        self.by_id.get(id)
    }

    fn lookup_by_alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }
}

pub fn catalog() -> TestCatalog {
    let mut cat = TestCatalog::default();

    let mut ga = service(
        "google-analytics",
        &[
            (
                Directive::ScriptSrc,
                &["https://www.googletagmanager.com", "https://www.google-analytics.com"],
            ),
            (
                Directive::ImgSrc,
                &["https://www.google-analytics.com", "https://www.googletagmanager.com"],
            ),
            (
                Directive::ConnectSrc,
                &["https://www.google-analytics.com", "https://*.analytics.google.com"],
            ),
        ],
    );
    ga.aliases = vec!["ga4".to_string(), "gtag".to_string()];
    cat.add(ga);

    cat.add(service(
        "google-fonts",
        &[
            (Directive::StyleSrc, &["https://fonts.googleapis.com"]),
            (Directive::FontSrc, &["https://fonts.gstatic.com"]),
        ],
    ));

    cat.add(service(
        "stripe",
        &[
            (Directive::ScriptSrc, &["https://js.stripe.com"]),
            (Directive::FrameSrc, &["https://js.stripe.com", "https://hooks.stripe.com"]),
            (Directive::ConnectSrc, &["https://api.stripe.com"]),
        ],
    ));

    let mut gtm = service(
        "google-tag-manager",
        &[(Directive::ScriptSrc, &["https://www.googletagmanager.com"])],
    );
    gtm.requires_dynamic = true;
    gtm.requires_nonce = true;
    cat.add(gtm);

    let mut legacy = service(
        "universal-analytics",
        &[(Directive::ScriptSrc, &["https://www.google-analytics.com"])],
    );
    legacy.deprecated = Some(Deprecation {
        since: "2023-07-01".to_string(),
        message: "Universal Analytics stopped processing data".to_string(),
        alternative: Some("google-analytics".to_string()),
    });
    cat.add(legacy);

    cat
}
