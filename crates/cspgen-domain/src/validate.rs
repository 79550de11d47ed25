//! Advisory checks over a merged directive map. Never fails; only warns.

use crate::checks::{self, ValidationContext};
use cspgen_types::{DirectiveMap, ServiceDefinition};

/// Run the map-only rules.
pub fn validate(directives: &DirectiveMap) -> Vec<String> {
    validate_services(directives, &[])
}

/// Run every rule, including those that depend on the resolved services' flags.
pub fn validate_services(directives: &DirectiveMap, services: &[&ServiceDefinition]) -> Vec<String> {
    let ctx = ValidationContext {
        directives,
        services,
    };
    let mut warnings = Vec::new();
    checks::run_all(&ctx, &mut warnings);
    warnings
}
