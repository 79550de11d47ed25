//! Nonce generation backed by the operating system's secure random source.

use crate::error::GenerateError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

pub const DEFAULT_NONCE_LENGTH: usize = 16;
pub const MAX_NONCE_LENGTH: usize = 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonceEncoding {
    #[default]
    Base64,
    Hex,
}

impl NonceEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            NonceEncoding::Base64 => "base64",
            NonceEncoding::Hex => "hex",
        }
    }
}

impl fmt::Display for NonceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NonceEncoding {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64" => Ok(NonceEncoding::Base64),
            "hex" => Ok(NonceEncoding::Hex),
            other => Err(GenerateError::UnsupportedEncoding {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonceOptions {
    /// Number of random bytes before encoding.
    pub length: usize,
    pub encoding: NonceEncoding,
}

impl Default for NonceOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_NONCE_LENGTH,
            encoding: NonceEncoding::Base64,
        }
    }
}

/// Generate a fresh nonce from the OS random source.
///
/// Failure to read secure randomness is an error; there is no fallback source.
pub fn generate_nonce(options: &NonceOptions) -> Result<String, GenerateError> {
    generate_nonce_with(&mut OsRng, options)
}

pub(crate) fn generate_nonce_with<R>(rng: &mut R, options: &NonceOptions) -> Result<String, GenerateError>
where
    R: RngCore + ?Sized,
{
    check_length(options.length)?;

    let mut bytes = vec![0u8; options.length];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|err| GenerateError::NonceSourceUnavailable {
            reason: err.to_string(),
        })?;

    trace!(length = options.length, encoding = %options.encoding, "generated nonce");

    Ok(match options.encoding {
        NonceEncoding::Base64 => STANDARD.encode(&bytes),
        NonceEncoding::Hex => hex::encode(&bytes),
    })
}

pub(crate) fn check_length(length: usize) -> Result<(), GenerateError> {
    if length == 0 || length > MAX_NONCE_LENGTH {
        return Err(GenerateError::InvalidNonceLength { length });
    }
    Ok(())
}

/// Whether `value` fits the CSP `base64-value` grammar:
/// `1*( ALPHA / DIGIT / "+" / "/" / "-" / "_" ) *2( "=" )`.
pub fn is_valid_nonce_value(value: &str) -> bool {
    let body = value.trim_end_matches('=');
    let padding = value.len() - body.len();
    !body.is_empty()
        && padding <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'-' | b'_'))
}
