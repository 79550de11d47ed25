use cspgen_domain::{GenerationOptions, NonceOption, NonceOptions};

pub const DEFAULT_PROFILE: &str = "standard";
pub const PROFILES: [&str; 3] = ["strict", "standard", "compat"];

/// Preset profiles are opinionated defaults. Returns the profile actually used.
///
/// Unknown names fall back to `standard`.
pub fn preset(profile: &str) -> (&'static str, GenerationOptions) {
    match profile {
        "strict" => ("strict", strict_profile()),
        "compat" => ("compat", compat_profile()),
        "standard" => ("standard", GenerationOptions::default()),
        other => {
            tracing::debug!(profile = other, "unknown profile, using standard");
            (DEFAULT_PROFILE, GenerationOptions::default())
        }
    }
}

fn strict_profile() -> GenerationOptions {
    GenerationOptions {
        nonce: NonceOption::Generate(NonceOptions::default()),
        ..GenerationOptions::default()
    }
}

fn compat_profile() -> GenerationOptions {
    // Legacy sites with inline handlers; still no eval.
    GenerationOptions {
        unsafe_inline: true,
        ..GenerationOptions::default()
    }
}
