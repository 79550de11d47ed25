//! Rendering utilities for delivering a generated policy (headers, server config, HTML, Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod server;

pub use markdown::render_markdown;
pub use model::{HeaderMode, RenderableDirective, RenderablePolicy};
pub use server::{render_apache, render_header, render_http, render_meta, render_nginx};
