use cspgen_types::keywords::{is_nonce_token, STRICT_DYNAMIC, UNSAFE_EVAL};
use cspgen_types::{Directive, DirectiveMap};

pub fn has_nonce(directives: &DirectiveMap) -> bool {
    directives
        .get(Directive::ScriptSrc)
        .iter()
        .any(|v| is_nonce_token(v))
}

/// `'strict-dynamic'`, `'unsafe-eval'`, or a nonce lets runtime-injected scripts execute.
pub fn grants_dynamic_scripts(directives: &DirectiveMap) -> bool {
    directives.contains(Directive::ScriptSrc, STRICT_DYNAMIC)
        || directives.contains(Directive::ScriptSrc, UNSAFE_EVAL)
        || has_nonce(directives)
}
