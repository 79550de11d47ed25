//! Stable DTOs shared across the cspgen workspace.
//!
//! This crate is intentionally boring:
//! - the closed set of CSP directive names and their canonical order
//! - the de-duplicating directive map
//! - source keyword constants and nonce token helpers
//! - catalog service definitions

#![forbid(unsafe_code)]

pub mod directive;
pub mod directive_map;
pub mod keywords;
pub mod service;

pub use directive::Directive;
pub use directive_map::DirectiveMap;
pub use service::{Deprecation, ServiceCategory, ServiceDefinition};
