use super::ValidationContext;
use cspgen_types::keywords::{UNSAFE_EVAL, UNSAFE_INLINE};

pub fn run(ctx: &ValidationContext<'_>, out: &mut Vec<String>) {
    for (directive, values) in ctx.directives.iter() {
        for keyword in [UNSAFE_INLINE, UNSAFE_EVAL] {
            if values.iter().any(|v| v == keyword) {
                out.push(format!(
                    "{directive} allows {keyword}, which weakens protection against XSS"
                ));
            }
        }
    }
}
