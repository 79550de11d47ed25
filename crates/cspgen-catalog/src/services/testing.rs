use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "optimizely",
        name: "Optimizely Web Experimentation",
        category: ServiceCategory::Testing,
        description: "Client-side A/B testing snippet",
        website: "https://www.optimizely.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://cdn.optimizely.com"]),
            (Directive::ConnectSrc, &["https://logx.optimizely.com", "https://cdn.optimizely.com"]),
        ],
        requires_dynamic: true,
        last_updated: datetime!(2024-07-15 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "vwo",
        name: "VWO",
        category: ServiceCategory::Testing,
        description: "Visual Website Optimizer testing and heatmaps",
        website: "https://vwo.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://dev.visualwebsiteoptimizer.com"]),
            (Directive::ConnectSrc, &["https://*.visualwebsiteoptimizer.com"]),
            (Directive::ImgSrc, &["https://*.visualwebsiteoptimizer.com"]),
            (Directive::StyleSrc, &["https://*.visualwebsiteoptimizer.com"]),
            (Directive::FrameSrc, &["https://*.visualwebsiteoptimizer.com"]),
        ],
        aliases: &["visual-website-optimizer"],
        requires_dynamic: true,
        notes: Some("The SmartCode snippet is inline; serve it with the page nonce."),
        last_updated: datetime!(2024-07-15 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
