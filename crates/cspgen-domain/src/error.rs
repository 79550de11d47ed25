use crate::nonce::MAX_NONCE_LENGTH;

/// Fatal generation failures. Everything else is reported as a warning.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("secure random source unavailable: {reason}")]
    NonceSourceUnavailable { reason: String },

    #[error("unsupported nonce encoding '{value}' (expected base64 or hex)")]
    UnsupportedEncoding { value: String },

    #[error("nonce length must be between 1 and {max} bytes, got {length}", max = MAX_NONCE_LENGTH)]
    InvalidNonceLength { length: usize },

    #[error("nonce value '{value}' contains characters not allowed in a CSP nonce")]
    InvalidNonceValue { value: String },
}
