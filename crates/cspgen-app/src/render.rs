//! Render use cases: map an engine result onto the requested output format.

use anyhow::Context;
use cspgen_domain::GenerationResult;
use cspgen_render::{HeaderMode, RenderableDirective, RenderablePolicy};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Header,
    Http,
    Meta,
    Nginx,
    Apache,
    Markdown,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Header,
        OutputFormat::Http,
        OutputFormat::Meta,
        OutputFormat::Nginx,
        OutputFormat::Apache,
        OutputFormat::Markdown,
        OutputFormat::Json,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Header => "header",
            OutputFormat::Http => "http",
            OutputFormat::Meta => "meta",
            OutputFormat::Nginx => "nginx",
            OutputFormat::Apache => "apache",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" => return Ok(OutputFormat::Markdown),
            "html" => return Ok(OutputFormat::Meta),
            _ => {}
        }
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .with_context(|| {
                let known: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown format: {s} (expected {})", known.join("|"))
            })
    }
}

pub fn to_renderable(result: &GenerationResult) -> RenderablePolicy {
    RenderablePolicy {
        header: result.header.clone(),
        directives: result
            .directives
            .iter()
            .map(|(directive, values)| RenderableDirective {
                name: directive.as_str().to_string(),
                values: values.to_vec(),
            })
            .collect(),
        included_services: result.included_services.clone(),
        unknown_services: result.unknown_services.clone(),
        warnings: result.warnings.clone(),
        nonce: result.nonce.clone(),
    }
}

/// Pretty JSON with a trailing newline.
pub fn serialize_result(result: &GenerationResult) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(result).context("serialize result")?;
    json.push('\n');
    Ok(json)
}

/// Render `result` as `format`. `report_only` picks the report-only header name where one applies.
pub fn render_output(
    result: &GenerationResult,
    format: OutputFormat,
    report_only: bool,
) -> anyhow::Result<String> {
    let mode = if report_only {
        HeaderMode::ReportOnly
    } else {
        HeaderMode::Enforce
    };
    let policy = to_renderable(result);

    let mut out = match format {
        OutputFormat::Json => return serialize_result(result),
        OutputFormat::Markdown => return Ok(cspgen_render::render_markdown(&policy)),
        OutputFormat::Header => cspgen_render::render_header(&policy),
        OutputFormat::Http => cspgen_render::render_http(&policy, mode),
        OutputFormat::Meta => cspgen_render::render_meta(&policy),
        OutputFormat::Nginx => cspgen_render::render_nginx(&policy, mode),
        OutputFormat::Apache => cspgen_render::render_apache(&policy, mode),
    };
    out.push('\n');
    Ok(out)
}
