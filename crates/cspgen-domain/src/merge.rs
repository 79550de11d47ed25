//! Additive directive merging and the option-driven steps applied after it.

use crate::options::DEFAULT_SELF_DIRECTIVES;
use cspgen_types::keywords::{self, SELF, UNSAFE_EVAL, UNSAFE_INLINE};
use cspgen_types::{Directive, DirectiveMap};
use tracing::debug;

/// Union `sources` in order. Later sources only ever add values.
pub fn merge<'a, I>(sources: I) -> DirectiveMap
where
    I: IntoIterator<Item = &'a DirectiveMap>,
{
    let mut merged = DirectiveMap::new();
    let mut count = 0usize;
    for source in sources {
        count += 1;
        for (directive, values) in source.iter() {
            merged.extend_unique(directive, values);
        }
    }
    debug!(sources = count, "merged directive sources");
    merged
}

/// Add `'self'` to every directive in [`DEFAULT_SELF_DIRECTIVES`].
pub fn apply_self(directives: &mut DirectiveMap) {
    for directive in DEFAULT_SELF_DIRECTIVES {
        directives.extend_unique(directive, [SELF]);
    }
}

pub fn apply_unsafe_flags(directives: &mut DirectiveMap, unsafe_inline: bool, unsafe_eval: bool) {
    if unsafe_inline {
        directives.extend_unique(Directive::ScriptSrc, [UNSAFE_INLINE]);
        directives.extend_unique(Directive::StyleSrc, [UNSAFE_INLINE]);
    }
    if unsafe_eval {
        directives.extend_unique(Directive::ScriptSrc, [UNSAFE_EVAL]);
    }
}

/// Overwrite `report-uri` with exactly `uri`.
pub fn apply_report_uri(directives: &mut DirectiveMap, uri: &str) {
    directives.insert(Directive::ReportUri, vec![uri.to_string()]);
}

/// Put `'nonce-<value>'` into `script-src` as its only nonce token.
///
/// Returns any different nonce tokens that were displaced.
pub fn inject_nonce(directives: &mut DirectiveMap, value: &str) -> Vec<String> {
    let token = keywords::nonce_token(value);
    let displaced = directives.retain(Directive::ScriptSrc, |v| !keywords::is_nonce_token(v));
    directives.extend_unique(Directive::ScriptSrc, [token.as_str()]);
    displaced.into_iter().filter(|t| *t != token).collect()
}
