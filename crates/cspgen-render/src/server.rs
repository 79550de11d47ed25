use crate::{HeaderMode, RenderablePolicy};

/// Directives a `<meta>` delivered policy cannot carry; browsers ignore them there.
const META_IGNORED: [&str; 3] = ["frame-ancestors", "report-uri", "report-to"];

/// The bare header value.
pub fn render_header(policy: &RenderablePolicy) -> String {
    policy.header.clone()
}

/// `Name: value`, as it appears on the wire.
pub fn render_http(policy: &RenderablePolicy, mode: HeaderMode) -> String {
    format!("{}: {}", mode.header_name(), policy.header)
}

/// nginx `add_header` directive for a `server` or `location` block.
pub fn render_nginx(policy: &RenderablePolicy, mode: HeaderMode) -> String {
    format!(
        "add_header {} \"{}\" always;",
        mode.header_name(),
        escape_double_quoted(&policy.header)
    )
}

/// Apache `mod_headers` directive.
pub fn render_apache(policy: &RenderablePolicy, mode: HeaderMode) -> String {
    format!(
        "Header always set {} \"{}\"",
        mode.header_name(),
        escape_double_quoted(&policy.header)
    )
}

/// HTML `<meta http-equiv>` tag.
///
/// Drops directives that only work as a response header. Meta policies cannot be report-only.
pub fn render_meta(policy: &RenderablePolicy) -> String {
    let content = policy
        .directives
        .iter()
        .filter(|d| !d.values.is_empty() && !META_IGNORED.contains(&d.name.as_str()))
        .map(|d| format!("{} {}", d.name, d.values.join(" ")))
        .collect::<Vec<_>>()
        .join("; ");
    format!(
        "<meta http-equiv=\"Content-Security-Policy\" content=\"{}\">",
        escape_attr(&content)
    )
}

fn escape_double_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
