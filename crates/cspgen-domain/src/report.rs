use cspgen_types::DirectiveMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Value for the `Content-Security-Policy` header.
    pub header: String,
    pub directives: DirectiveMap,
    /// Value for the `Content-Security-Policy-Report-Only` header.
    ///
    /// Same content as `header`; only the delivering header name differs.
    pub report_only_header: String,
    /// Resolved service ids, de-duplicated, in first-seen order.
    pub included_services: Vec<String>,
    /// Identifiers exactly as supplied that did not resolve.
    pub unknown_services: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}
