use cspgen_types::{DirectiveMap, ServiceDefinition};

mod insecure_sources;
mod requires_dynamic;
mod requires_nonce;
mod unsafe_inline_with_nonce;
mod unsafe_keywords;
mod utils;
mod wildcard_sources;

/// What a validation rule can see.
pub struct ValidationContext<'a> {
    pub directives: &'a DirectiveMap,
    /// Resolved services; empty when validating a bare directive map.
    pub services: &'a [&'a ServiceDefinition],
}

pub fn run_all(ctx: &ValidationContext<'_>, out: &mut Vec<String>) {
    unsafe_inline_with_nonce::run(ctx, out);
    unsafe_keywords::run(ctx, out);
    wildcard_sources::run(ctx, out);
    insecure_sources::run(ctx, out);
    requires_dynamic::run(ctx, out);
    requires_nonce::run(ctx, out);
}

#[cfg(test)]
mod tests;
