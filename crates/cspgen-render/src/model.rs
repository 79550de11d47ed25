/// Which response header delivers the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderMode {
    #[default]
    Enforce,
    ReportOnly,
}

impl HeaderMode {
    pub fn header_name(self) -> &'static str {
        match self {
            HeaderMode::Enforce => "Content-Security-Policy",
            HeaderMode::ReportOnly => "Content-Security-Policy-Report-Only",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDirective {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderablePolicy {
    /// Serialized header value.
    pub header: String,
    /// Directives in serialization order.
    pub directives: Vec<RenderableDirective>,
    pub included_services: Vec<String>,
    pub unknown_services: Vec<String>,
    pub warnings: Vec<String>,
    pub nonce: Option<String>,
}
