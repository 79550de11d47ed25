use super::ValidationContext;
use cspgen_types::Directive;

const BROAD_SOURCES: [&str; 4] = ["*", "https:", "http:", "data:"];

pub fn run(ctx: &ValidationContext<'_>, out: &mut Vec<String>) {
    for directive in [Directive::ScriptSrc, Directive::ObjectSrc] {
        for value in ctx.directives.get(directive) {
            if BROAD_SOURCES.contains(&value.as_str()) {
                out.push(format!(
                    "{directive} allows the broad source {value}; restrict it to specific origins"
                ));
            }
        }
    }
}
