//! The `generate` use case: resolve config, run the engine against the bundled catalog.

use anyhow::Context;
use cspgen_domain::GenerationResult;
use cspgen_settings::{CspgenConfigV1, Overrides, ResolvedConfig};

#[derive(Clone, Debug)]
pub struct GenerateInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct GenerateOutput {
    pub result: GenerationResult,
    pub resolved_config: ResolvedConfig,
}

pub fn run_generate(input: GenerateInput<'_>) -> anyhow::Result<GenerateOutput> {
    // Empty config is allowed; defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        CspgenConfigV1::default()
    } else {
        cspgen_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = cspgen_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    let catalog = cspgen_catalog::bundled().context("load service catalog")?;

    let result = cspgen_domain::generate(catalog, resolved.options.clone())
        .context("generate policy")?;

    tracing::info!(
        profile = %resolved.profile,
        included = result.included_services.len(),
        unknown = result.unknown_services.len(),
        warnings = result.warnings.len(),
        "generated content security policy"
    );

    Ok(GenerateOutput {
        result,
        resolved_config: resolved,
    })
}

/// 0 = success, 2 = warnings present while `deny_warnings` is set.
pub fn exit_code(result: &GenerationResult, deny_warnings: bool) -> i32 {
    if deny_warnings && !result.warnings.is_empty() {
        2
    } else {
        0
    }
}
