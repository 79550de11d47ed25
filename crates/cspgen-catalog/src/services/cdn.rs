use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "jsdelivr",
        name: "jsDelivr",
        category: ServiceCategory::Cdn,
        description: "Public CDN for npm and GitHub packages",
        website: "https://www.jsdelivr.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://cdn.jsdelivr.net"]),
            (Directive::StyleSrc, &["https://cdn.jsdelivr.net"]),
            (Directive::FontSrc, &["https://cdn.jsdelivr.net"]),
        ],
        notes: Some("Pin versions and use Subresource Integrity; the origin serves any package."),
        last_updated: datetime!(2024-02-14 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "cdnjs",
        name: "cdnjs",
        category: ServiceCategory::Cdn,
        description: "Cloudflare-hosted library CDN",
        website: "https://cdnjs.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://cdnjs.cloudflare.com"]),
            (Directive::StyleSrc, &["https://cdnjs.cloudflare.com"]),
            (Directive::FontSrc, &["https://cdnjs.cloudflare.com"]),
        ],
        last_updated: datetime!(2024-02-14 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "unpkg",
        name: "unpkg",
        category: ServiceCategory::Cdn,
        description: "CDN for everything on npm",
        website: "https://unpkg.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://unpkg.com"]),
            (Directive::StyleSrc, &["https://unpkg.com"]),
        ],
        last_updated: datetime!(2024-02-14 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
