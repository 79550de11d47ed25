use super::ValidationContext;
use super::utils::has_nonce;
use cspgen_types::Directive;
use cspgen_types::keywords::UNSAFE_INLINE;

pub fn run(ctx: &ValidationContext<'_>, out: &mut Vec<String>) {
    if ctx.directives.contains(Directive::ScriptSrc, UNSAFE_INLINE) && has_nonce(ctx.directives) {
        out.push(
            "script-src combines 'unsafe-inline' with a nonce; browsers that support nonces ignore 'unsafe-inline'"
                .to_string(),
        );
    }
}
