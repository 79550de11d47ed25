use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "google-ads",
        name: "Google Ads",
        category: ServiceCategory::Advertising,
        description: "Conversion tracking and remarketing tags",
        website: "https://ads.google.com/",
        directives: &[
            (
                Directive::ScriptSrc,
                &["https://www.googleadservices.com", "https://googleads.g.doubleclick.net"],
            ),
            (
                Directive::ImgSrc,
                &[
                    "https://www.googleadservices.com",
                    "https://googleads.g.doubleclick.net",
                    "https://www.google.com",
                ],
            ),
            (Directive::ConnectSrc, &["https://www.googleadservices.com"]),
            (Directive::FrameSrc, &["https://td.doubleclick.net"]),
        ],
        aliases: &["adwords"],
        last_updated: datetime!(2024-12-10 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "facebook-pixel",
        name: "Meta Pixel",
        category: ServiceCategory::Advertising,
        description: "Meta conversion tracking pixel",
        website: "https://www.facebook.com/business/tools/meta-pixel",
        directives: &[
            (Directive::ScriptSrc, &["https://connect.facebook.net"]),
            (Directive::ImgSrc, &["https://www.facebook.com"]),
            (Directive::ConnectSrc, &["https://www.facebook.com", "https://connect.facebook.net"]),
            (Directive::FrameSrc, &["https://www.facebook.com"]),
        ],
        aliases: &["meta-pixel", "fb-pixel"],
        last_updated: datetime!(2024-11-18 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "linkedin-insight",
        name: "LinkedIn Insight Tag",
        category: ServiceCategory::Advertising,
        description: "LinkedIn conversion tracking",
        website: "https://business.linkedin.com/marketing-solutions/insight-tag",
        directives: &[
            (Directive::ScriptSrc, &["https://snap.licdn.com"]),
            (Directive::ImgSrc, &["https://px.ads.linkedin.com"]),
            (Directive::ConnectSrc, &["https://px.ads.linkedin.com"]),
        ],
        last_updated: datetime!(2024-06-12 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
