//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CONFIG_SCHEMA_ID, CspgenConfigV1, NonceConfig};
pub use presets::{DEFAULT_PROFILE, PROFILES};
pub use resolve::{Overrides, ResolvedConfig, parse_rule};

/// Parse `cspgen.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CspgenConfigV1> {
    let cfg: CspgenConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve generation options from a preset, the config file, and CLI overrides.
pub fn resolve_config(cfg: CspgenConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema for `cspgen.toml`.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(CspgenConfigV1)
}
