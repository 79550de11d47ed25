use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "google-fonts",
        name: "Google Fonts",
        category: ServiceCategory::Fonts,
        description: "Hosted web fonts from fonts.google.com",
        website: "https://fonts.google.com/",
        directives: &[
            (Directive::StyleSrc, &["https://fonts.googleapis.com"]),
            (Directive::FontSrc, &["https://fonts.gstatic.com"]),
        ],
        last_updated: datetime!(2024-08-01 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "adobe-fonts",
        name: "Adobe Fonts",
        category: ServiceCategory::Fonts,
        description: "Adobe Fonts (formerly Typekit) web projects",
        website: "https://fonts.adobe.com/",
        directives: &[
            (Directive::StyleSrc, &["https://use.typekit.net", "https://p.typekit.net"]),
            (Directive::FontSrc, &["https://use.typekit.net"]),
            (Directive::ImgSrc, &["https://p.typekit.net"]),
        ],
        aliases: &["typekit"],
        last_updated: datetime!(2024-08-01 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
