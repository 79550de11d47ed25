use crate::RenderablePolicy;

pub fn render_markdown(policy: &RenderablePolicy) -> String {
    let mut out = String::new();

    out.push_str("# Content-Security-Policy\n\n");
    out.push_str(&format!("```\n{}\n```\n\n", policy.header));

    if policy.included_services.is_empty() {
        out.push_str("- Services: none\n");
    } else {
        out.push_str(&format!(
            "- Services: {}\n",
            policy
                .included_services
                .iter()
                .map(|s| format!("`{s}`"))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    if !policy.unknown_services.is_empty() {
        out.push_str(&format!(
            "- Unknown: {}\n",
            policy.unknown_services.join(", ")
        ));
    }
    if policy.nonce.is_some() {
        out.push_str("- Nonce: included in script-src\n");
    }
    out.push('\n');

    if !policy.directives.is_empty() {
        out.push_str("## Directives\n\n");
        out.push_str("| Directive | Sources |\n|---|---|\n");
        for d in &policy.directives {
            out.push_str(&format!("| `{}` | {} |\n", d.name, d.values.join(" ")));
        }
        out.push('\n');
    }

    if policy.warnings.is_empty() {
        out.push_str("No warnings.\n");
        return out;
    }

    out.push_str("## Warnings\n\n");
    for w in &policy.warnings {
        out.push_str(&format!("- {w}\n"));
    }

    out
}
