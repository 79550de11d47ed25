use super::{ValidationContext, run_all};
use crate::test_support::{directives, service};
use cspgen_types::{Directive, DirectiveMap, ServiceDefinition};

fn run(map: &DirectiveMap, services: &[&ServiceDefinition]) -> Vec<String> {
    let ctx = ValidationContext {
        directives: map,
        services,
    };
    let mut out = Vec::new();
    run_all(&ctx, &mut out);
    out
}

#[test]
fn clean_policy_has_no_warnings() {
    let map = directives(&[
        (Directive::ScriptSrc, &["'self'", "https://js.stripe.com"]),
        (Directive::ImgSrc, &["'self'", "data:"]),
    ]);
    assert!(run(&map, &[]).is_empty());
}

#[test]
fn unsafe_inline_with_nonce_is_flagged_first() {
    let map = directives(&[(
        Directive::ScriptSrc,
        &["'self'", "'unsafe-inline'", "'nonce-abc'"],
    )]);
    let warnings = run(&map, &[]);
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("combines 'unsafe-inline' with a nonce"));
    assert_eq!(
        warnings[1],
        "script-src allows 'unsafe-inline', which weakens protection against XSS"
    );
}

#[test]
fn unsafe_keywords_flagged_per_directive_in_canonical_order() {
    let map = directives(&[
        (Directive::StyleSrc, &["'unsafe-inline'"]),
        (Directive::ScriptSrc, &["'unsafe-eval'", "'unsafe-inline'"]),
    ]);
    assert_eq!(
        run(&map, &[]),
        [
            "script-src allows 'unsafe-inline', which weakens protection against XSS",
            "script-src allows 'unsafe-eval', which weakens protection against XSS",
            "style-src allows 'unsafe-inline', which weakens protection against XSS",
        ]
    );
}

#[test]
fn broad_script_and_object_sources_are_flagged() {
    let map = directives(&[
        (Directive::ScriptSrc, &["*"]),
        (Directive::ObjectSrc, &["data:"]),
        (Directive::ImgSrc, &["*", "data:"]),
    ]);
    assert_eq!(
        run(&map, &[]),
        [
            "script-src allows the broad source *; restrict it to specific origins",
            "object-src allows the broad source data:; restrict it to specific origins",
        ]
    );
}

#[test]
fn plain_http_sources_are_flagged() {
    let map = directives(&[(Directive::ImgSrc, &["http://tracker.example.com"])]);
    assert_eq!(
        run(&map, &[]),
        ["img-src loads http://tracker.example.com over plain HTTP"]
    );
}

#[test]
fn requires_dynamic_without_grant_names_the_service() {
    let mut gtm = service(
        "google-tag-manager",
        &[(Directive::ScriptSrc, &["https://www.googletagmanager.com"])],
    );
    gtm.requires_dynamic = true;
    let map = gtm.directives.clone();

    let warnings = run(&map, &[&gtm]);
    assert_eq!(
        warnings,
        ["Service 'google-tag-manager' injects scripts dynamically; add 'strict-dynamic' or a nonce to script-src"]
    );
}

#[test]
fn requires_dynamic_satisfied_by_strict_dynamic_or_nonce() {
    let mut svc = service("dyn", &[]);
    svc.requires_dynamic = true;

    let strict = directives(&[(Directive::ScriptSrc, &["'strict-dynamic'"])]);
    assert!(run(&strict, &[&svc]).is_empty());

    let nonce = directives(&[(Directive::ScriptSrc, &["'nonce-abc'"])]);
    assert!(run(&nonce, &[&svc]).is_empty());
}

#[test]
fn requires_nonce_without_nonce_names_the_service() {
    let mut svc = service("nonce-user", &[]);
    svc.requires_nonce = true;
    let warnings = run(&DirectiveMap::new(), &[&svc]);
    assert_eq!(
        warnings,
        ["Service 'nonce-user' expects a nonce on its inline scripts; enable nonce generation"]
    );

    let with_nonce = directives(&[(Directive::ScriptSrc, &["'nonce-xyz'"])]);
    assert!(run(&with_nonce, &[&svc]).is_empty());
}

#[test]
fn validate_without_services_skips_service_rules() {
    let map = DirectiveMap::new();
    assert!(crate::validate::validate(&map).is_empty());
}
