use crate::model::{CONFIG_SCHEMA_ID, CspgenConfigV1, NonceConfig};
use crate::presets::{self, DEFAULT_PROFILE};
use anyhow::Context;
use cspgen_domain::{GenerationOptions, NonceEncoding, NonceOption, NonceOptions, ServiceRef};

/// Command-line overrides. `None`/empty means "not given".
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    /// Appended after the configured services.
    pub services: Vec<String>,
    pub nonce: Option<bool>,
    pub nonce_value: Option<String>,
    pub nonce_length: Option<usize>,
    pub nonce_encoding: Option<String>,
    pub report_uri: Option<String>,
    pub include_self: Option<bool>,
    pub unsafe_inline: Option<bool>,
    pub unsafe_eval: Option<bool>,
    /// `(directive, source)` pairs merged after the configured rules.
    pub rules: Vec<(String, String)>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    pub options: GenerationOptions,
}

pub fn resolve_config(cfg: CspgenConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != CONFIG_SCHEMA_ID
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {CONFIG_SCHEMA_ID})");
    }

    // Encodings are rejected up front, whether or not a nonce ends up generated.
    let config_encoding = parse_encoding(cfg.nonce.as_ref().and_then(|n| n.encoding.as_deref()))
        .context("invalid [nonce] config")?;
    let flag_encoding =
        parse_encoding(overrides.nonce_encoding.as_deref()).context("invalid nonce flags")?;

    let requested = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    let (profile, mut options) = presets::preset(&requested);

    options.services = cfg
        .services
        .iter()
        .chain(overrides.services.iter())
        .map(|s| ServiceRef::from(s.as_str()))
        .collect();

    if let Some(v) = overrides.include_self.or(cfg.include_self) {
        options.include_self = v;
    }
    if let Some(v) = overrides.unsafe_inline.or(cfg.unsafe_inline) {
        options.unsafe_inline = v;
    }
    if let Some(v) = overrides.unsafe_eval.or(cfg.unsafe_eval) {
        options.unsafe_eval = v;
    }
    if let Some(uri) = overrides.report_uri.clone().or(cfg.report_uri.clone()) {
        options.report_uri = Some(uri);
    }

    if let Some(nonce_cfg) = &cfg.nonce {
        options.nonce = apply_nonce_config(options.nonce, nonce_cfg, config_encoding);
    }
    options.nonce = apply_nonce_overrides(options.nonce, &overrides, flag_encoding);

    options.custom_rules = cfg.custom_rules;
    for (directive, source) in overrides.rules {
        options.custom_rules.entry(directive).or_default().push(source);
    }

    tracing::debug!(
        profile,
        services = options.services.len(),
        rules = options.custom_rules.len(),
        "resolved config"
    );

    Ok(ResolvedConfig {
        profile: profile.to_string(),
        options,
    })
}

fn parse_encoding(encoding: Option<&str>) -> anyhow::Result<Option<NonceEncoding>> {
    encoding
        .map(|encoding| {
            encoding
                .parse::<NonceEncoding>()
                .with_context(|| format!("invalid nonce encoding: {encoding}"))
        })
        .transpose()
}

fn apply_nonce_config(
    current: NonceOption,
    cfg: &NonceConfig,
    encoding: Option<NonceEncoding>,
) -> NonceOption {
    let mut nonce = match (&cfg.value, cfg.enabled) {
        (Some(value), _) => return NonceOption::Value(value.clone()),
        (None, Some(true)) => NonceOption::Generate(generate_opts(&current)),
        (None, Some(false)) => NonceOption::Disabled,
        (None, None) => current,
    };
    if let NonceOption::Generate(opts) = &mut nonce {
        tune(opts, cfg.length, encoding);
    }
    nonce
}

fn apply_nonce_overrides(
    current: NonceOption,
    overrides: &Overrides,
    encoding: Option<NonceEncoding>,
) -> NonceOption {
    if let Some(value) = &overrides.nonce_value {
        return NonceOption::Value(value.clone());
    }
    let mut nonce = match overrides.nonce {
        Some(true) => NonceOption::Generate(generate_opts(&current)),
        Some(false) => NonceOption::Disabled,
        None => current,
    };
    if let NonceOption::Generate(opts) = &mut nonce {
        tune(opts, overrides.nonce_length, encoding);
    }
    nonce
}

fn generate_opts(current: &NonceOption) -> NonceOptions {
    match current {
        NonceOption::Generate(opts) => *opts,
        _ => NonceOptions::default(),
    }
}

fn tune(opts: &mut NonceOptions, length: Option<usize>, encoding: Option<NonceEncoding>) {
    if let Some(length) = length {
        opts.length = length;
    }
    if let Some(encoding) = encoding {
        opts.encoding = encoding;
    }
}

/// Parse a `DIRECTIVE=SOURCE` rule argument.
pub fn parse_rule(arg: &str) -> anyhow::Result<(String, String)> {
    let Some((directive, source)) = arg.split_once('=') else {
        anyhow::bail!("invalid rule '{arg}' (expected DIRECTIVE=SOURCE)");
    };
    let directive = directive.trim();
    if directive.is_empty() {
        anyhow::bail!("invalid rule '{arg}': missing directive name");
    }
    Ok((directive.to_string(), source.trim().to_string()))
}
