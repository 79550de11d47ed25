use cspgen_types::DirectiveMap;

/// Render the canonical header value.
///
/// Format: `name v1 v2; name v1` in canonical directive order, empty directives
/// omitted, no trailing delimiter.
pub fn serialize(directives: &DirectiveMap) -> String {
    directives
        .iter()
        .map(|(directive, values)| format!("{} {}", directive.as_str(), values.join(" ")))
        .collect::<Vec<_>>()
        .join("; ")
}
