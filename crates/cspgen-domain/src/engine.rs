use crate::catalog::ServiceCatalog;
use crate::custom_rules::sanitize_custom_rules;
use crate::error::GenerateError;
use crate::merge::{apply_report_uri, apply_self, apply_unsafe_flags, inject_nonce, merge};
use crate::nonce::{self, NonceOptions};
use crate::options::{GenerationInput, NonceOption, ServiceRef};
use crate::report::GenerationResult;
use crate::resolve::{resolve, Resolution};
use crate::serialize::serialize;
use crate::validate::validate_services;
use cspgen_types::{Deprecation, ServiceDefinition};
use std::iter;
use tracing::debug;

/// Generate a policy for `input` against `catalog`.
///
/// Only invalid nonce input and an unavailable random source are fatal; every
/// other problem (unknown services, malformed custom rules, ...) becomes a warning.
pub fn generate<C, I>(catalog: &C, input: I) -> Result<GenerationResult, GenerateError>
where
    C: ServiceCatalog + ?Sized,
    I: Into<GenerationInput>,
{
    let options = input.into().into_options();

    // Input validation happens before any work.
    let nonce_plan = plan_nonce(&options.nonce)?;

    let mut warnings: Vec<String> = Vec::new();
    let mut included: Vec<&ServiceDefinition> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();

    for service_ref in &options.services {
        match service_ref {
            ServiceRef::Definition(def) => push_service(&mut included, def),
            ServiceRef::Id(identifier) => match resolve(catalog, identifier) {
                Resolution::Found(resolved) => {
                    if let Some(version) = resolved.discarded_version {
                        warnings.push(format!(
                            "Version suffix '@{version}' on '{}' was ignored; services are not versioned",
                            identifier.trim()
                        ));
                    }
                    push_service(&mut included, resolved.service);
                }
                // Keep the first spelling; later ones that trim the same are repeats.
                Resolution::NotFound => {
                    if !unknown.iter().any(|u| u.trim() == identifier.trim()) {
                        unknown.push(identifier.clone());
                    }
                }
            },
        }
    }

    let (custom_rules, rule_warnings) = sanitize_custom_rules(&options.custom_rules);
    warnings.extend(rule_warnings);

    let mut directives = merge(
        included
            .iter()
            .map(|service| &service.directives)
            .chain(iter::once(&custom_rules)),
    );

    if options.include_self {
        apply_self(&mut directives);
    }
    apply_unsafe_flags(&mut directives, options.unsafe_inline, options.unsafe_eval);

    let nonce = match nonce_plan {
        NoncePlan::Disabled => None,
        NoncePlan::Generate(opts) => Some(nonce::generate_nonce(&opts)?),
        NoncePlan::Value(value) => Some(value),
        NoncePlan::Empty => {
            warnings.push("Empty nonce value was ignored; no nonce was added".to_string());
            None
        }
    };
    if let Some(value) = &nonce {
        for stale in inject_nonce(&mut directives, value) {
            warnings.push(format!(
                "Replaced nonce token {stale} in script-src with the request nonce"
            ));
        }
    }

    if let Some(uri) = &options.report_uri {
        let uri = uri.trim();
        if uri.is_empty() {
            warnings.push("Empty report-uri was ignored".to_string());
        } else {
            apply_report_uri(&mut directives, uri);
        }
    }

    warnings.extend(validate_services(&directives, &included));
    if !unknown.is_empty() {
        let listed: Vec<&str> = unknown.iter().map(|id| display_identifier(id)).collect();
        warnings.push(format!("Unknown services: {}", listed.join(", ")));
    }
    for service in &included {
        if let Some(deprecation) = &service.deprecated {
            warnings.push(deprecation_warning(service, deprecation));
        }
    }

    let header = serialize(&directives);

    debug!(
        included = included.len(),
        unknown = unknown.len(),
        warnings = warnings.len(),
        nonce = nonce.is_some(),
        "generated policy"
    );

    Ok(GenerationResult {
        report_only_header: header.clone(),
        header,
        directives,
        included_services: included.iter().map(|s| s.id.clone()).collect(),
        unknown_services: unknown,
        warnings,
        nonce,
    })
}

/// Like [`generate`], returning only the enforcing header value.
pub fn generate_header<C, I>(catalog: &C, input: I) -> Result<String, GenerateError>
where
    C: ServiceCatalog + ?Sized,
    I: Into<GenerationInput>,
{
    generate(catalog, input).map(|result| result.header)
}

/// Like [`generate`], returning only the report-only header value.
pub fn generate_report_only_header<C, I>(catalog: &C, input: I) -> Result<String, GenerateError>
where
    C: ServiceCatalog + ?Sized,
    I: Into<GenerationInput>,
{
    generate(catalog, input).map(|result| result.report_only_header)
}

enum NoncePlan {
    Disabled,
    Generate(NonceOptions),
    Value(String),
    Empty,
}

fn plan_nonce(option: &NonceOption) -> Result<NoncePlan, GenerateError> {
    match option {
        NonceOption::Disabled => Ok(NoncePlan::Disabled),
        NonceOption::Generate(opts) => {
            nonce::check_length(opts.length)?;
            Ok(NoncePlan::Generate(*opts))
        }
        NonceOption::Value(raw) => {
            let value = raw.trim();
            if value.is_empty() {
                Ok(NoncePlan::Empty)
            } else if nonce::is_valid_nonce_value(value) {
                Ok(NoncePlan::Value(value.to_string()))
            } else {
                Err(GenerateError::InvalidNonceValue { value: raw.clone() })
            }
        }
    }
}

fn push_service<'a>(included: &mut Vec<&'a ServiceDefinition>, service: &'a ServiceDefinition) {
    if !included.iter().any(|s| s.id == service.id) {
        included.push(service);
    }
}

fn display_identifier(identifier: &str) -> &str {
    match identifier.trim() {
        "" => "''",
        trimmed => trimmed,
    }
}

fn deprecation_warning(service: &ServiceDefinition, deprecation: &Deprecation) -> String {
    let mut msg = format!(
        "Service '{}' is deprecated since {}: {}",
        service.id, deprecation.since, deprecation.message
    );
    if let Some(alternative) = &deprecation.alternative {
        msg.push_str(&format!("; use '{alternative}' instead"));
    }
    msg
}
