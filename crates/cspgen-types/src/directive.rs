use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The CSP directives cspgen knows how to emit.
///
/// Declaration order is the canonical serialization order; `Ord` is derived so a
/// `BTreeMap<Directive, _>` iterates in exactly that order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Directive {
    ScriptSrc,
    ImgSrc,
    ConnectSrc,
    FrameSrc,
    FrameAncestors,
    FontSrc,
    StyleSrc,
    FormAction,
    ObjectSrc,
    MediaSrc,
    ChildSrc,
    WorkerSrc,
    ManifestSrc,
    BaseUri,
    ReportUri,
    ReportTo,
}

impl Directive {
    /// Every directive, in canonical order.
    pub const ALL: [Directive; 16] = [
        Directive::ScriptSrc,
        Directive::ImgSrc,
        Directive::ConnectSrc,
        Directive::FrameSrc,
        Directive::FrameAncestors,
        Directive::FontSrc,
        Directive::StyleSrc,
        Directive::FormAction,
        Directive::ObjectSrc,
        Directive::MediaSrc,
        Directive::ChildSrc,
        Directive::WorkerSrc,
        Directive::ManifestSrc,
        Directive::BaseUri,
        Directive::ReportUri,
        Directive::ReportTo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Directive::ScriptSrc => "script-src",
            Directive::ImgSrc => "img-src",
            Directive::ConnectSrc => "connect-src",
            Directive::FrameSrc => "frame-src",
            Directive::FrameAncestors => "frame-ancestors",
            Directive::FontSrc => "font-src",
            Directive::StyleSrc => "style-src",
            Directive::FormAction => "form-action",
            Directive::ObjectSrc => "object-src",
            Directive::MediaSrc => "media-src",
            Directive::ChildSrc => "child-src",
            Directive::WorkerSrc => "worker-src",
            Directive::ManifestSrc => "manifest-src",
            Directive::BaseUri => "base-uri",
            Directive::ReportUri => "report-uri",
            Directive::ReportTo => "report-to",
        }
    }

    /// Exact, case-sensitive lookup of a directive name.
    pub fn parse(name: &str) -> Option<Directive> {
        Directive::ALL.into_iter().find(|d| d.as_str() == name)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
