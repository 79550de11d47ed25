use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "twitter-embed",
        name: "X (Twitter) embeds",
        category: ServiceCategory::Social,
        description: "Embedded posts and timelines via widgets.js",
        website: "https://developer.x.com/en/docs/x-for-websites",
        directives: &[
            (Directive::ScriptSrc, &["https://platform.twitter.com"]),
            (Directive::FrameSrc, &["https://platform.twitter.com", "https://syndication.twitter.com"]),
            (Directive::ImgSrc, &["https://pbs.twimg.com", "https://syndication.twitter.com"]),
            (Directive::StyleSrc, &["https://platform.twitter.com"]),
        ],
        aliases: &["x-embed", "twitter"],
        last_updated: datetime!(2024-05-20 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "facebook-sdk",
        name: "Facebook JavaScript SDK",
        category: ServiceCategory::Social,
        description: "Like buttons, comments and Facebook Login widgets",
        website: "https://developers.facebook.com/docs/javascript",
        directives: &[
            (Directive::ScriptSrc, &["https://connect.facebook.net"]),
            (Directive::FrameSrc, &["https://www.facebook.com", "https://web.facebook.com"]),
            (Directive::ConnectSrc, &["https://graph.facebook.com"]),
            (Directive::ImgSrc, &["https://www.facebook.com"]),
        ],
        last_updated: datetime!(2024-09-03 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
