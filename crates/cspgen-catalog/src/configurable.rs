//! Services whose sources depend on caller options.

use crate::services::{GOOGLE_MAPS, INTERCOM};
use crate::spec::define_service;
use cspgen_types::{Directive, ServiceDefinition};

/// A base definition plus a pure derivation from options `O`.
///
/// [`configure`](Self::configure) always returns a new definition; the base is
/// never touched.
#[derive(Clone, Debug)]
pub struct ConfigurableService<O> {
    base: ServiceDefinition,
    derive: fn(&ServiceDefinition, &O) -> ServiceDefinition,
}

impl<O> ConfigurableService<O> {
    pub fn new(base: ServiceDefinition, derive: fn(&ServiceDefinition, &O) -> ServiceDefinition) -> Self {
        Self { base, derive }
    }

    pub fn base(&self) -> &ServiceDefinition {
        &self.base
    }

    pub fn configure(&self, options: &O) -> ServiceDefinition {
        (self.derive)(&self.base, options)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntercomRegion {
    #[default]
    Us,
    Eu,
    Au,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntercomOptions {
    pub region: IntercomRegion,
}

/// Intercom with region-specific API and websocket hosts.
pub fn intercom() -> ConfigurableService<IntercomOptions> {
    ConfigurableService::new(define_service(&INTERCOM), derive_intercom)
}

fn derive_intercom(base: &ServiceDefinition, options: &IntercomOptions) -> ServiceDefinition {
    let (api, socket) = match options.region {
        IntercomRegion::Us => return base.clone(),
        IntercomRegion::Eu => (
            "https://api-iam.eu.intercom.io",
            "wss://nexus-europe-websocket.intercom.io",
        ),
        IntercomRegion::Au => (
            "https://api-iam.au.intercom.io",
            "wss://nexus-australia-websocket.intercom.io",
        ),
    };

    let mut derived = base.clone();
    derived
        .directives
        .retain(Directive::ConnectSrc, |v| !v.starts_with("https://api-iam.") && !v.starts_with("wss://"));
    derived.directives.extend_unique(Directive::ConnectSrc, [api, socket]);
    derived
        .directives
        .retain(Directive::FormAction, |v| !v.starts_with("https://api-iam."));
    derived.directives.extend_unique(Directive::FormAction, [api]);
    derived
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GoogleMapsOptions {
    /// Also allow Maps Static API images.
    pub static_maps: bool,
}

pub fn google_maps() -> ConfigurableService<GoogleMapsOptions> {
    ConfigurableService::new(define_service(&GOOGLE_MAPS), derive_google_maps)
}

fn derive_google_maps(base: &ServiceDefinition, options: &GoogleMapsOptions) -> ServiceDefinition {
    let mut derived = base.clone();
    if options.static_maps {
        derived
            .directives
            .extend_unique(Directive::ImgSrc, ["https://maps.googleapis.com"]);
    }
    derived
}
