use crate::spec::{DeprecationSpec, ServiceSpec};
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "google-analytics",
        name: "Google Analytics 4",
        category: ServiceCategory::Analytics,
        description: "Google Analytics 4 via the gtag.js snippet",
        website: "https://marketingplatform.google.com/about/analytics/",
        directives: &[
            (Directive::ScriptSrc, &["https://www.googletagmanager.com"]),
            (
                Directive::ImgSrc,
                &["https://www.google-analytics.com", "https://www.googletagmanager.com"],
            ),
            (
                Directive::ConnectSrc,
                &[
                    "https://www.google-analytics.com",
                    "https://*.google-analytics.com",
                    "https://*.analytics.google.com",
                    "https://www.googletagmanager.com",
                ],
            ),
        ],
        aliases: &["ga4", "gtag", "google-analytics-4"],
        notes: Some("Regional collection endpoints are covered by the wildcard connect-src hosts."),
        last_updated: datetime!(2025-01-15 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "universal-analytics",
        name: "Universal Analytics",
        category: ServiceCategory::Analytics,
        description: "Legacy analytics.js tracking",
        website: "https://support.google.com/analytics/answer/11583528",
        directives: &[
            (Directive::ScriptSrc, &["https://www.google-analytics.com"]),
            (Directive::ImgSrc, &["https://www.google-analytics.com"]),
            (Directive::ConnectSrc, &["https://www.google-analytics.com"]),
        ],
        aliases: &["analytics-js"],
        deprecated: Some(DeprecationSpec {
            since: "2023-07-01",
            message: "Universal Analytics stopped processing data",
            alternative: Some("google-analytics"),
        }),
        last_updated: datetime!(2024-07-01 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "google-tag-manager",
        name: "Google Tag Manager",
        category: ServiceCategory::Analytics,
        description: "Tag container that loads further tags at runtime",
        website: "https://tagmanager.google.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://www.googletagmanager.com"]),
            (Directive::ImgSrc, &["https://www.googletagmanager.com"]),
            (Directive::ConnectSrc, &["https://www.googletagmanager.com"]),
        ],
        aliases: &["gtm"],
        requires_dynamic: true,
        requires_nonce: true,
        notes: Some("Custom HTML tags need the page nonce forwarded via the nonce-aware container snippet."),
        last_updated: datetime!(2025-01-15 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "plausible",
        name: "Plausible Analytics",
        category: ServiceCategory::Analytics,
        description: "Cookieless, privacy-friendly analytics",
        website: "https://plausible.io/",
        directives: &[
            (Directive::ScriptSrc, &["https://plausible.io"]),
            (Directive::ConnectSrc, &["https://plausible.io"]),
        ],
        last_updated: datetime!(2024-11-02 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "fathom",
        name: "Fathom Analytics",
        category: ServiceCategory::Analytics,
        description: "Privacy-focused website analytics",
        website: "https://usefathom.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://cdn.usefathom.com"]),
            (Directive::ConnectSrc, &["https://cdn.usefathom.com"]),
            (Directive::ImgSrc, &["https://cdn.usefathom.com"]),
        ],
        aliases: &["fathom-analytics"],
        last_updated: datetime!(2024-09-10 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "mixpanel",
        name: "Mixpanel",
        category: ServiceCategory::Analytics,
        description: "Product analytics",
        website: "https://mixpanel.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://cdn.mxpnl.com"]),
            (
                Directive::ConnectSrc,
                &["https://api-js.mixpanel.com", "https://api-eu.mixpanel.com"],
            ),
        ],
        last_updated: datetime!(2024-10-21 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "segment",
        name: "Segment",
        category: ServiceCategory::Analytics,
        description: "Customer data platform that loads destination scripts",
        website: "https://segment.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://cdn.segment.com"]),
            (
                Directive::ConnectSrc,
                &["https://api.segment.io", "https://cdn.segment.com"],
            ),
        ],
        requires_dynamic: true,
        notes: Some("Each enabled destination adds its own sources; add them as separate services."),
        last_updated: datetime!(2024-12-04 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "hotjar",
        name: "Hotjar",
        category: ServiceCategory::Analytics,
        description: "Heatmaps and session recordings",
        website: "https://www.hotjar.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://*.hotjar.com"]),
            (Directive::ConnectSrc, &["https://*.hotjar.com", "https://*.hotjar.io", "wss://*.hotjar.com"]),
            (Directive::ImgSrc, &["https://*.hotjar.com"]),
            (Directive::FontSrc, &["https://*.hotjar.com"]),
            (Directive::StyleSrc, &["https://*.hotjar.com"]),
        ],
        last_updated: datetime!(2024-08-19 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "microsoft-clarity",
        name: "Microsoft Clarity",
        category: ServiceCategory::Analytics,
        description: "Session replay and heatmaps",
        website: "https://clarity.microsoft.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://www.clarity.ms", "https://*.clarity.ms"]),
            (Directive::ConnectSrc, &["https://*.clarity.ms"]),
            (Directive::ImgSrc, &["https://*.clarity.ms"]),
        ],
        aliases: &["clarity"],
        last_updated: datetime!(2024-10-01 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
