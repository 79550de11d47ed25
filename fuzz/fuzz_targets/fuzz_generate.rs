//! Fuzz target for the generation engine.
//!
//! Arbitrary identifiers, custom rules and nonce values go through
//! `generate`. Beyond not panicking, every successful result must keep its
//! header and report-only header identical, and a requested nonce must be the
//! only nonce token in `script-src`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_generate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use cspgen_domain::{GenerationOptions, NonceOption};
use cspgen_types::{keywords, Directive};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    services: Vec<String>,
    rules: Vec<(String, Vec<String>)>,
    nonce: Option<String>,
    include_self: bool,
    unsafe_inline: bool,
    report_uri: Option<String>,
}

fuzz_target!(|input: Input| {
    let Ok(catalog) = cspgen_catalog::bundled() else {
        return;
    };

    let mut options = GenerationOptions::new(input.services);
    for (directive, sources) in input.rules {
        options = options.with_custom_rule(&directive, sources);
    }
    options.nonce = input.nonce.map_or(NonceOption::Disabled, NonceOption::Value);
    options.include_self = input.include_self;
    options.unsafe_inline = input.unsafe_inline;
    options.report_uri = input.report_uri;

    if let Ok(result) = cspgen_domain::generate(catalog, options) {
        assert_eq!(result.header, result.report_only_header);
        if result.nonce.is_some() {
            let script_src = result.directives.get(Directive::ScriptSrc);
            let tokens = script_src.iter().filter(|v| keywords::is_nonce_token(v)).count();
            assert_eq!(tokens, 1);
        }
    }
});
