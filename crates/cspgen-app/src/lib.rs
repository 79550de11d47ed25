//! Use case orchestration for cspgen.
//!
//! This crate provides the application layer: use cases that coordinate the settings, catalog,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod catalog;
mod generate;
mod render;

pub use catalog::{
    format_not_found, format_service, format_service_table, parse_category, run_list, run_show,
    ListFilter, ShowOutput,
};
pub use generate::{exit_code, run_generate, GenerateInput, GenerateOutput};
pub use render::{render_output, serialize_result, to_renderable, OutputFormat};
