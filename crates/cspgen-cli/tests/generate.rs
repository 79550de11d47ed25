//! CLI behavior for `generate`, `list`, `show` and `schema`.

use assert_cmd::Command;
use cspgen_test_util::{normalize_nonce, normalize_nonce_json};
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

#[allow(deprecated)]
fn cspgen_cmd() -> Command {
    Command::cargo_bin("cspgen").expect("cspgen binary not found - run `cargo build` first")
}

/// Command running in an empty directory, so no ambient cspgen.toml is picked up.
fn isolated(dir: &TempDir) -> Command {
    let mut cmd = cspgen_cmd();
    cmd.current_dir(dir.path()).env_remove("CSPGEN_LOG");
    cmd
}

#[test]
fn generate_prints_header_for_services() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["generate", "stripe"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "script-src https://js.stripe.com 'self'; img-src 'self'; connect-src https://api.stripe.com 'self'",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_service_warns_on_stderr_and_still_succeeds() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["generate", "not-a-real-service"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: Unknown services: not-a-real-service",
        ));
}

#[test]
fn deny_warnings_exits_two() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["generate", "not-a-real-service", "--deny-warnings"])
        .assert()
        .code(2);

    isolated(&dir)
        .args(["generate", "stripe", "--deny-warnings"])
        .assert()
        .success();
}

#[test]
fn invalid_nonce_value_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["generate", "stripe", "--nonce-value", "bad nonce;"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cspgen error: generate policy"));
}

#[test]
fn unsupported_nonce_encoding_is_fatal_without_nonce() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["generate", "stripe", "--nonce-encoding", "base32"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid nonce encoding: base32"));
}

#[test]
fn caller_nonce_appears_in_script_src() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["generate", "google-analytics", "--nonce-value", "custom-nonce-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'nonce-custom-nonce-123'"));
}

#[test]
fn generated_nonce_is_normalizable() {
    let dir = TempDir::new().expect("temp dir");
    let output = isolated(&dir)
        .args(["generate", "--no-self", "--nonce", "--nonce-encoding", "hex"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(normalize_nonce(&stdout), "script-src 'nonce-__NONCE__'\n");
}

#[test]
fn rules_and_report_uri_flags_apply() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args([
            "generate",
            "--no-self",
            "--rule",
            "img-src=data:",
            "--report-uri",
            "/csp",
        ])
        .assert()
        .success()
        .stdout("img-src data:; report-uri /csp\n");
}

#[test]
fn malformed_rule_argument_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["generate", "--rule", "img-src"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected DIRECTIVE=SOURCE"));
}

#[test]
fn report_only_nginx_snippet() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["generate", "--no-self", "--rule", "img-src=data:"])
        .args(["--format", "nginx", "--report-only"])
        .assert()
        .success()
        .stdout("add_header Content-Security-Policy-Report-Only \"img-src data:\" always;\n");
}

#[test]
fn json_format_is_a_generation_result() {
    let dir = TempDir::new().expect("temp dir");
    let output = isolated(&dir)
        .args(["generate", "ga4", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(json["included_services"], serde_json::json!(["google-analytics"]));
    assert_eq!(json["header"], json["report_only_header"]);
}

#[test]
fn json_format_with_generated_nonce_matches_golden() {
    let dir = TempDir::new().expect("temp dir");
    let output = isolated(&dir)
        .args(["generate", "stripe", "--no-self", "--nonce", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("json output");

    let header = "script-src https://js.stripe.com 'nonce-__NONCE__'; \
                  connect-src https://api.stripe.com; \
                  frame-src https://js.stripe.com https://hooks.stripe.com";
    assert_eq!(
        normalize_nonce_json(json),
        json!({
            "header": header,
            "report_only_header": header,
            "directives": {
                "script-src": ["https://js.stripe.com", "'nonce-__NONCE__'"],
                "connect-src": ["https://api.stripe.com"],
                "frame-src": ["https://js.stripe.com", "https://hooks.stripe.com"],
            },
            "included_services": ["stripe"],
            "unknown_services": [],
            "warnings": [],
            "nonce": "__NONCE__",
        })
    );
}

#[test]
fn unknown_format_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["generate", "--format", "yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown format: yaml"));
}

#[test]
fn output_flag_writes_file() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("out").join("csp.txt");
    isolated(&dir)
        .args(["generate", "stripe", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let written = std::fs::read_to_string(&out).expect("read output");
    assert!(written.starts_with("script-src https://js.stripe.com"));
}

#[test]
fn default_config_is_read_from_working_directory() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("cspgen.toml"),
        "services = [\"google-fonts\"]\ninclude_self = false\n",
    )
    .expect("write config");
    isolated(&dir)
        .args(["generate", "stripe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("font-src https://fonts.gstatic.com;"))
        .stdout(predicate::str::contains("script-src https://js.stripe.com;"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["--config", "nope.toml", "generate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config: nope.toml"));
}

#[test]
fn profile_flag_overrides_config() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("cspgen.toml"), "profile = \"strict\"\n").expect("write");
    let output = isolated(&dir)
        .args(["--profile", "compat", "generate"])
        .output()
        .expect("run");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("'unsafe-inline'"));
    assert!(!stdout.contains("'nonce-"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let dir = TempDir::new().expect("temp dir");
    let output = isolated(&dir)
        .args(["--verbose", "generate", "stripe"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stderr.contains("generated content security policy"));
}

#[test]
fn list_filters_by_category() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["list", "--category", "fonts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("google-fonts"))
        .stdout(predicate::str::contains("stripe").not());
}

#[test]
fn list_rejects_unknown_category() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["list", "--category", "crypto"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown category: crypto"));
}

#[test]
fn show_accepts_alias() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["show", "gtm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id:        google-tag-manager"));
}

#[test]
fn show_unknown_exits_one_with_suggestions() {
    let dir = TempDir::new().expect("temp dir");
    isolated(&dir)
        .args(["show", "strpe"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Did you mean:"))
        .stderr(predicate::str::contains("  - stripe"));
}

#[test]
fn schema_is_json_with_config_fields() {
    let dir = TempDir::new().expect("temp dir");
    let output = isolated(&dir).arg("schema").output().expect("run");
    assert!(output.status.success());
    let schema: Value = serde_json::from_slice(&output.stdout).expect("schema json");
    assert!(schema["properties"]["services"].is_object());
    assert!(schema["properties"]["custom_rules"].is_object());
}
