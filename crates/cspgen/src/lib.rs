//! Content-Security-Policy generation for third-party services.
//!
//! The `generate_csp*` functions run the engine against the bundled catalog.
//! [`generate`] and [`ServiceCatalog`] are re-exported for custom catalogs.
//!
//! ```no_run
//! use cspgen::{GenerationOptions, generate_csp};
//!
//! let result = generate_csp(GenerationOptions::new(["google-analytics"]).with_nonce(true))?;
//! assert!(result.header.contains("'nonce-"));
//! # Ok::<(), cspgen::Error>(())
//! ```

#![forbid(unsafe_code)]

pub use cspgen_catalog::{
    bundled, google_maps, intercom, ConfigurableService, GoogleMapsOptions, IntercomOptions,
    IntercomRegion, Registry, RegistryError,
};
pub use cspgen_domain::{
    generate, generate_header, generate_nonce, generate_report_only_header, GenerateError,
    GenerationInput, GenerationOptions, GenerationResult, NonceEncoding, NonceOption,
    NonceOptions, ServiceCatalog, ServiceRef,
};
pub use cspgen_types::{Directive, DirectiveMap, ServiceCategory, ServiceDefinition};

/// Failure of a bundled-catalog call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bundled service catalog is invalid: {0}")]
    Catalog(#[from] RegistryError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// [`generate`] against the bundled catalog.
pub fn generate_csp<I: Into<GenerationInput>>(input: I) -> Result<GenerationResult, Error> {
    Ok(generate(bundled()?, input)?)
}

/// [`generate_header`] against the bundled catalog.
pub fn generate_csp_header<I: Into<GenerationInput>>(input: I) -> Result<String, Error> {
    Ok(generate_header(bundled()?, input)?)
}

/// [`generate_report_only_header`] against the bundled catalog.
pub fn generate_report_only_csp<I: Into<GenerationInput>>(input: I) -> Result<String, Error> {
    Ok(generate_report_only_header(bundled()?, input)?)
}
