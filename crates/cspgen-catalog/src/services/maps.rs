use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

/// Dynamic Maps JavaScript API; static map images are opt-in via `configurable`.
pub(crate) const GOOGLE_MAPS: ServiceSpec = ServiceSpec {
    id: "google-maps",
    name: "Google Maps JavaScript API",
    category: ServiceCategory::Maps,
    description: "Interactive Google Maps",
    website: "https://developers.google.com/maps/documentation/javascript",
    directives: &[
        (Directive::ScriptSrc, &["https://maps.googleapis.com", "https://maps.gstatic.com"]),
        (Directive::ImgSrc, &["https://maps.gstatic.com", "https://*.googleapis.com", "data:"]),
        (Directive::ConnectSrc, &["https://maps.googleapis.com"]),
        (Directive::FontSrc, &["https://fonts.gstatic.com"]),
        (Directive::StyleSrc, &["https://fonts.googleapis.com"]),
    ],
    aliases: &["gmaps"],
    last_updated: datetime!(2024-11-20 00:00 UTC),
    ..ServiceSpec::EMPTY
};

pub(crate) const SERVICES: &[ServiceSpec] = &[
    GOOGLE_MAPS,
    ServiceSpec {
        id: "mapbox",
        name: "Mapbox GL JS",
        category: ServiceCategory::Maps,
        description: "Vector maps rendered with Mapbox GL JS",
        website: "https://www.mapbox.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://api.mapbox.com"]),
            (Directive::StyleSrc, &["https://api.mapbox.com"]),
            (Directive::ConnectSrc, &["https://api.mapbox.com", "https://events.mapbox.com"]),
            (Directive::ImgSrc, &["data:", "blob:"]),
            (Directive::WorkerSrc, &["blob:"]),
            (Directive::ChildSrc, &["blob:"]),
        ],
        last_updated: datetime!(2024-06-03 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
