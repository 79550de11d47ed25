use crate::nonce::NonceOptions;
use cspgen_types::{Directive, ServiceDefinition};
use std::collections::BTreeMap;

/// Directives that receive `'self'` when `include_self` is on.
pub const DEFAULT_SELF_DIRECTIVES: [Directive; 6] = [
    Directive::ScriptSrc,
    Directive::StyleSrc,
    Directive::ImgSrc,
    Directive::ConnectSrc,
    Directive::FontSrc,
    Directive::FrameSrc,
];

/// A requested service: a catalog identifier, or a definition the caller already holds
/// (for example one derived from a configurable service).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceRef {
    Id(String),
    Definition(ServiceDefinition),
}

impl ServiceRef {
    /// The string used to report this reference back to the caller.
    pub fn label(&self) -> &str {
        match self {
            ServiceRef::Id(id) => id,
            ServiceRef::Definition(def) => &def.id,
        }
    }
}

impl From<&str> for ServiceRef {
    fn from(value: &str) -> Self {
        ServiceRef::Id(value.to_string())
    }
}

impl From<String> for ServiceRef {
    fn from(value: String) -> Self {
        ServiceRef::Id(value)
    }
}

impl From<ServiceDefinition> for ServiceRef {
    fn from(value: ServiceDefinition) -> Self {
        ServiceRef::Definition(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NonceOption {
    #[default]
    Disabled,
    /// Generate a fresh nonce per call.
    Generate(NonceOptions),
    /// Use a caller-supplied nonce verbatim.
    Value(String),
}

impl From<bool> for NonceOption {
    fn from(value: bool) -> Self {
        if value {
            NonceOption::Generate(NonceOptions::default())
        } else {
            NonceOption::Disabled
        }
    }
}

impl From<&str> for NonceOption {
    fn from(value: &str) -> Self {
        NonceOption::Value(value.to_string())
    }
}

impl From<String> for NonceOption {
    fn from(value: String) -> Self {
        NonceOption::Value(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    pub services: Vec<ServiceRef>,
    pub nonce: NonceOption,
    /// Raw directive name -> sources, merged after every service.
    ///
    /// Keys are strings so malformed entries can be reported instead of rejected.
    pub custom_rules: BTreeMap<String, Vec<String>>,
    /// Replaces (never merges) the `report-uri` directive.
    pub report_uri: Option<String>,
    pub include_self: bool,
    pub unsafe_inline: bool,
    pub unsafe_eval: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            services: Vec::new(),
            nonce: NonceOption::Disabled,
            custom_rules: BTreeMap::new(),
            report_uri: None,
            include_self: true,
            unsafe_inline: false,
            unsafe_eval: false,
        }
    }
}

impl GenerationOptions {
    pub fn new<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ServiceRef>,
    {
        Self {
            services: services.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_nonce(mut self, nonce: impl Into<NonceOption>) -> Self {
        self.nonce = nonce.into();
        self
    }

    pub fn with_custom_rule<I, S>(mut self, directive: &str, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_rules
            .entry(directive.to_string())
            .or_default()
            .extend(sources.into_iter().map(Into::into));
        self
    }

    pub fn with_report_uri(mut self, uri: impl Into<String>) -> Self {
        self.report_uri = Some(uri.into());
        self
    }
}

/// Either call shape accepted by the engine: bare identifiers or full options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationInput {
    Services(Vec<String>),
    Options(GenerationOptions),
}

impl GenerationInput {
    /// Normalize into canonical options; bare identifiers get the defaults.
    pub fn into_options(self) -> GenerationOptions {
        match self {
            GenerationInput::Services(ids) => GenerationOptions::new(ids),
            GenerationInput::Options(options) => options,
        }
    }
}

impl From<GenerationOptions> for GenerationInput {
    fn from(value: GenerationOptions) -> Self {
        GenerationInput::Options(value)
    }
}

impl From<Vec<String>> for GenerationInput {
    fn from(value: Vec<String>) -> Self {
        GenerationInput::Services(value)
    }
}

impl From<Vec<&str>> for GenerationInput {
    fn from(value: Vec<&str>) -> Self {
        GenerationInput::Services(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for GenerationInput {
    fn from(value: &[&str]) -> Self {
        GenerationInput::Services(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for GenerationInput {
    fn from(value: [&str; N]) -> Self {
        GenerationInput::Services(value.iter().map(|s| s.to_string()).collect())
    }
}
