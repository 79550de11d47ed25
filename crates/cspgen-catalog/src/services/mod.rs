//! Bundled service tables, one module per category.

use crate::spec::ServiceSpec;

mod advertising;
mod analytics;
mod authentication;
mod cdn;
mod chat;
mod fonts;
mod forms;
mod maps;
mod monitoring;
mod payment;
mod social;
mod testing;
mod video;

pub(crate) use chat::INTERCOM;
pub(crate) use maps::GOOGLE_MAPS;

const TABLES: &[&[ServiceSpec]] = &[
    analytics::SERVICES,
    advertising::SERVICES,
    social::SERVICES,
    payment::SERVICES,
    forms::SERVICES,
    chat::SERVICES,
    cdn::SERVICES,
    monitoring::SERVICES,
    video::SERVICES,
    testing::SERVICES,
    fonts::SERVICES,
    maps::SERVICES,
    authentication::SERVICES,
];

pub(crate) fn all() -> impl Iterator<Item = &'static ServiceSpec> {
    TABLES.iter().flat_map(|table| table.iter())
}
