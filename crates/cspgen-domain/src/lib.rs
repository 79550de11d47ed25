//! Pure CSP policy generation (no IO).
//!
//! Input: service identifiers plus options, and a catalog constructed elsewhere.
//! Output: merged directives, the serialized header, and advisory warnings.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod custom_rules;
pub mod error;
pub mod merge;
pub mod nonce;
pub mod options;
pub mod report;
pub mod resolve;
pub mod serialize;
pub mod validate;

mod checks;
mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use catalog::ServiceCatalog;
pub use engine::{generate, generate_header, generate_report_only_header};
pub use error::GenerateError;
pub use nonce::{generate_nonce, NonceEncoding, NonceOptions};
pub use options::{GenerationInput, GenerationOptions, NonceOption, ServiceRef};
pub use report::GenerationResult;
