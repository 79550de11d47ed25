use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CONFIG_SCHEMA_ID: &str = "cspgen.config.v1";

/// `cspgen.toml` schema v1.
///
/// Every field is optional so a preset can fill the gaps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CspgenConfigV1 {
    /// Optional schema string for tooling (`cspgen.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict`, `standard` (default) or `compat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Service ids or aliases, in the order they should merge.
    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_self: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_inline: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_eval: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<NonceConfig>,

    /// Map of directive name -> extra sources.
    #[serde(default)]
    pub custom_rules: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NonceConfig {
    /// Generate a fresh nonce per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Use this nonce verbatim. Takes precedence over `enabled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Random bytes before encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// `base64` (default) or `hex`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}
