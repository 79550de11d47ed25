//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Known/unknown partitioning of requested identifiers
//! - Duplicate-free, deterministic output
//! - Additive merging
//! - Nonce uniqueness within script-src

use crate::engine::generate;
use crate::merge::merge;
use crate::options::GenerationOptions;
use crate::test_support::catalog;
use cspgen_types::{Directive, DirectiveMap};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

fn arb_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("google-analytics".to_string()),
        Just("ga4".to_string()),
        Just("gtag".to_string()),
        Just("google-fonts".to_string()),
        Just("stripe".to_string()),
        Just("google-tag-manager".to_string()),
        Just("universal-analytics".to_string()),
        Just("stripe@3".to_string()),
        prop::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap(),
    ]
}

fn arb_directive() -> impl Strategy<Value = Directive> {
    prop::sample::select(Directive::ALL.to_vec())
}

fn arb_source() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("'self'".to_string()),
        Just("data:".to_string()),
        prop::string::string_regex("https://[a-z]{1,8}\\.example\\.com").unwrap(),
    ]
}

fn arb_directive_map() -> impl Strategy<Value = DirectiveMap> {
    prop::collection::vec(
        (arb_directive(), prop::collection::vec(arb_source(), 0..4)),
        0..5,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

fn arb_nonce_value() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9+/_-]{1,24}={0,2}").unwrap()
}

fn value_sets(map: &DirectiveMap) -> Vec<(Directive, BTreeSet<String>)> {
    map.iter()
        .map(|(d, values)| (d, values.iter().cloned().collect()))
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn every_identifier_is_included_or_unknown(ids in prop::collection::vec(arb_identifier(), 0..8)) {
        let cat = catalog();
        let result = generate(&cat, GenerationOptions::new(ids.clone())).unwrap();

        for id in &ids {
            let unknown = result.unknown_services.contains(id);
            let known = crate::resolve::parse_identifier(id)
                .map(|parsed| {
                    let canonical = match crate::resolve::resolve(&cat, id) {
                        crate::resolve::Resolution::Found(r) => r.service.id.clone(),
                        crate::resolve::Resolution::NotFound => parsed.id.to_string(),
                    };
                    result.included_services.contains(&canonical)
                })
                .unwrap_or(false);
            prop_assert!(known ^ unknown, "identifier {id} must be exactly one of known/unknown");
        }
    }

    #[test]
    fn directive_values_are_unique(ids in prop::collection::vec(arb_identifier(), 0..8), nonce in any::<bool>()) {
        let options = GenerationOptions::new(ids).with_nonce(nonce);
        let result = generate(&catalog(), options).unwrap();
        for (_, values) in result.directives.iter() {
            let set: BTreeSet<&String> = values.iter().collect();
            prop_assert_eq!(set.len(), values.len());
        }
    }

    #[test]
    fn output_is_deterministic_without_generated_nonce(
        ids in prop::collection::vec(arb_identifier(), 0..8),
        nonce in arb_nonce_value(),
    ) {
        let options = GenerationOptions::new(ids).with_nonce(nonce);
        let first = generate(&catalog(), options.clone()).unwrap();
        let second = generate(&catalog(), options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn merge_is_set_equivalent_under_regrouping(
        a in arb_directive_map(),
        b in arb_directive_map(),
        c in arb_directive_map(),
    ) {
        let direct = merge([&a, &b, &c]);
        let staged = merge([&merge([&a, &b]), &c]);
        prop_assert_eq!(value_sets(&direct), value_sets(&staged));
    }

    #[test]
    fn merge_never_drops_a_source_value(a in arb_directive_map(), b in arb_directive_map()) {
        let merged = merge([&a, &b]);
        for source in [&a, &b] {
            for (directive, values) in source.iter() {
                for value in values {
                    prop_assert!(merged.contains(directive, value));
                }
            }
        }
    }

    #[test]
    fn exactly_one_nonce_token_in_script_src(
        ids in prop::collection::vec(arb_identifier(), 0..4),
        stale in arb_nonce_value(),
        nonce in arb_nonce_value(),
    ) {
        let options = GenerationOptions::new(ids)
            .with_custom_rule("script-src", [format!("'nonce-{stale}'")])
            .with_nonce(nonce.clone());
        let result = generate(&catalog(), options).unwrap();
        let tokens: Vec<&String> = result
            .directives
            .get(Directive::ScriptSrc)
            .iter()
            .filter(|v| v.starts_with("'nonce-"))
            .collect();
        let expected = format!("'nonce-{nonce}'");
        prop_assert_eq!(tokens, vec![&expected]);
    }
}
