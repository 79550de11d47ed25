//! CSP source keywords. Keywords are always single-quoted on the wire.

pub const SELF: &str = "'self'";
pub const UNSAFE_INLINE: &str = "'unsafe-inline'";
pub const UNSAFE_EVAL: &str = "'unsafe-eval'";
pub const STRICT_DYNAMIC: &str = "'strict-dynamic'";

const NONCE_PREFIX: &str = "'nonce-";

/// Build the `'nonce-<value>'` source expression.
pub fn nonce_token(value: &str) -> String {
    format!("{NONCE_PREFIX}{value}'")
}

pub fn is_nonce_token(token: &str) -> bool {
    token.len() > NONCE_PREFIX.len() + 1 && token.starts_with(NONCE_PREFIX) && token.ends_with('\'')
}
