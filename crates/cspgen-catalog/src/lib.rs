//! Bundled service catalog for cspgen.
//!
//! Service records are authored as `const` [`ServiceSpec`] tables grouped by
//! category, stamped into [`ServiceDefinition`](cspgen_types::ServiceDefinition)s
//! by [`define_service`], and indexed once per process by [`Registry`].

#![forbid(unsafe_code)]

mod configurable;
mod registry;
mod services;
mod spec;

pub use configurable::{
    google_maps, intercom, ConfigurableService, GoogleMapsOptions, IntercomOptions, IntercomRegion,
};
pub use registry::{bundled, Registry, RegistryError};
pub use spec::{define_service, DeprecationSpec, ServiceSpec};

/// Every bundled service record, in authoring order.
pub fn bundled_specs() -> impl Iterator<Item = &'static ServiceSpec> {
    services::all()
}
