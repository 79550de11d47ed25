//! Developer tasks (schema generation, fixture and catalog checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![SchemaSpec {
        filename: "cspgen.config.v1.json",
        generate: cspgen_settings::config_schema,
    }]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check every fixture config against the generated config schema.
fn validate_fixtures() -> anyhow::Result<()> {
    let schema = serde_json::to_value(cspgen_settings::config_schema())
        .context("Failed to convert config schema to JSON")?;
    let compiled = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile config schema: {e}"))?;

    let dir = fixtures_dir()?;
    let mut names: Vec<String> = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(Result::ok)
        .filter(|e| e.path().join("cspgen.toml").exists())
        .filter_map(|e| e.file_name().into_string().ok())
        .collect();
    names.sort();

    let mut errors = Vec::new();
    for name in &names {
        let path = dir.join(name).join("cspgen.toml");
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: toml::Value =
            toml::from_str(&text).with_context(|| format!("{name}: invalid TOML"))?;
        let instance = serde_json::to_value(value).context("Failed to convert TOML to JSON")?;

        for err in compiled.iter_errors(&instance) {
            errors.push(format!("{name}: schema validation: {err}"));
        }
        if let Err(err) = cspgen_settings::parse_config_toml(&text) {
            errors.push(format!("{name}: parse: {err:#}"));
        }
        if !dir.join(name).join("expected.header").exists() {
            errors.push(format!("{name}: missing expected.header"));
        }
    }

    if errors.is_empty() {
        println!("✓ {} fixture configs match the config schema", names.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("Fixture validation failed with {} errors", errors.len())
    }
}

/// Validate that every bundled service is fully described.
fn catalog_coverage() -> anyhow::Result<()> {
    let registry = cspgen_catalog::bundled().context("Bundled catalog failed to build")?;
    let mut errors = Vec::new();

    for service in registry.services() {
        let id = &service.id;
        if service.name.is_empty() {
            errors.push(format!("Service '{id}' has empty name"));
        }
        if service.description.is_empty() {
            errors.push(format!("Service '{id}' has empty description"));
        }
        if !service.website.starts_with("https://") {
            errors.push(format!("Service '{id}' has no https website"));
        }
        if service.directives.is_empty() {
            errors.push(format!("Service '{id}' has no directives"));
        }
        if let Some(alt) = service.deprecated.as_ref().and_then(|d| d.alternative.as_ref())
            && registry.get(alt).is_none()
        {
            errors.push(format!("Service '{id}' points to unknown alternative '{alt}'"));
        }
    }

    if errors.is_empty() {
        println!("✓ {} services are fully described", registry.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("Catalog coverage failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help               Show this message");
    eprintln!("  emit-schemas       Generate JSON schemas from Rust types to schemas/");
    eprintln!("  print-schema-ids   Print known schema IDs");
    eprintln!("  validate-fixtures  Check tests/fixtures configs against the config schema");
    eprintln!("  catalog-coverage   Validate every bundled service is fully described");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-fixtures" => validate_fixtures(),
        "catalog-coverage" => catalog_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
