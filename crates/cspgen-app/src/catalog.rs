//! The `list` and `show` use cases: browse the bundled catalog.

use anyhow::Context;
use cspgen_catalog::Registry;
use cspgen_types::{ServiceCategory, ServiceDefinition};

const MAX_SUGGESTIONS: usize = 5;

#[derive(Clone, Debug, Default)]
pub struct ListFilter {
    pub category: Option<ServiceCategory>,
    pub search: Option<String>,
}

pub fn parse_category(name: &str) -> anyhow::Result<ServiceCategory> {
    ServiceCategory::parse(name).with_context(|| {
        let known: Vec<&str> = ServiceCategory::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category: {name} (expected one of {})", known.join(", "))
    })
}

/// Bundled services matching `filter`, sorted by id.
pub fn run_list(filter: &ListFilter) -> anyhow::Result<Vec<&'static ServiceDefinition>> {
    let registry = cspgen_catalog::bundled().context("load service catalog")?;
    let mut services = match filter.search.as_deref() {
        Some(query) => registry.search(query),
        None => registry.services().collect(),
    };
    if let Some(category) = filter.category {
        services.retain(|s| s.category == category);
    }
    Ok(services)
}

pub fn format_service_table(services: &[&ServiceDefinition]) -> String {
    if services.is_empty() {
        return "No services found.\n".to_string();
    }

    let id_width = services.iter().map(|s| s.id.len()).max().unwrap_or(0).max(2);
    let cat_width = services
        .iter()
        .map(|s| s.category.as_str().len())
        .max()
        .unwrap_or(0)
        .max(8);

    let mut out = String::new();
    out.push_str(&format!("{:<id_width$}  {:<cat_width$}  NAME\n", "ID", "CATEGORY"));
    for s in services {
        let mut name = s.name.clone();
        if s.is_deprecated() {
            name.push_str(" (deprecated)");
        }
        out.push_str(&format!(
            "{:<id_width$}  {:<cat_width$}  {}\n",
            s.id,
            s.category.as_str(),
            name
        ));
    }
    out
}

#[derive(Clone, Debug)]
pub enum ShowOutput {
    Found(&'static ServiceDefinition),
    /// Unknown identifier; includes the closest ids.
    NotFound {
        identifier: String,
        suggestions: Vec<String>,
    },
}

/// Look up a service by id or alias.
pub fn run_show(identifier: &str) -> anyhow::Result<ShowOutput> {
    let registry = cspgen_catalog::bundled().context("load service catalog")?;
    Ok(match registry.get(identifier) {
        Some(service) => ShowOutput::Found(service),
        None => ShowOutput::NotFound {
            identifier: identifier.to_string(),
            suggestions: suggest(registry, identifier),
        },
    })
}

fn suggest(registry: &Registry, identifier: &str) -> Vec<String> {
    let needle = identifier.trim().to_lowercase();
    let mut scored: Vec<(usize, &str)> = registry
        .services()
        .filter_map(|s| {
            std::iter::once(s.id.as_str())
                .chain(s.aliases.iter().map(String::as_str))
                .map(|candidate| {
                    if !needle.is_empty() && (candidate.contains(&needle) || needle.contains(candidate)) {
                        0
                    } else {
                        edit_distance(&needle, candidate)
                    }
                })
                .min()
                .filter(|d| *d <= 2)
                .map(|d| (d, s.id.as_str()))
        })
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, id)| id.to_string())
        .collect()
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut cur = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            cur[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        prev = cur;
    }
    prev[b.len()]
}

/// Format a service for terminal display.
pub fn format_service(service: &ServiceDefinition) -> String {
    let mut out = String::new();

    out.push_str(&service.name);
    out.push('\n');
    out.push_str(&"=".repeat(service.name.len()));
    out.push_str("\n\n");
    out.push_str(&format!("id:        {}\n", service.id));
    out.push_str(&format!("category:  {}\n", service.category));
    if !service.aliases.is_empty() {
        out.push_str(&format!("aliases:   {}\n", service.aliases.join(", ")));
    }
    if !service.website.is_empty() {
        out.push_str(&format!("website:   {}\n", service.website));
    }
    out.push_str(&format!("updated:   {}\n", service.last_updated.date()));
    out.push_str(&format!("verified:  {}\n", service.verified_at.date()));
    if !service.description.is_empty() {
        out.push('\n');
        out.push_str(&service.description);
        out.push('\n');
    }

    out.push_str("\nDirectives\n----------\n");
    for (directive, values) in service.directives.iter() {
        out.push_str(&format!("{directive} {}\n", values.join(" ")));
    }

    if service.requires_dynamic || service.requires_nonce {
        out.push_str("\nRequirements\n------------\n");
        if service.requires_dynamic {
            out.push_str("- injects scripts at runtime ('strict-dynamic' or a nonce)\n");
        }
        if service.requires_nonce {
            out.push_str("- expects a nonce on inline scripts\n");
        }
    }
    if let Some(notes) = &service.notes {
        out.push_str(&format!("\nNotes: {notes}\n"));
    }
    if let Some(dep) = &service.deprecated {
        out.push_str(&format!("\nDeprecated since {}: {}\n", dep.since, dep.message));
        if let Some(alt) = &dep.alternative {
            out.push_str(&format!("Use '{alt}' instead.\n"));
        }
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, suggestions: &[String]) -> String {
    let mut out = format!("Unknown service: {identifier}\n");
    if suggestions.is_empty() {
        out.push_str("\nRun `cspgen list` to see available services.\n");
    } else {
        out.push_str("\nDid you mean:\n");
        for s in suggestions {
            out.push_str(&format!("  - {s}\n"));
        }
    }
    out
}
