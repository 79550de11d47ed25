use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "youtube",
        name: "YouTube embeds",
        category: ServiceCategory::Video,
        description: "Embedded YouTube players",
        website: "https://www.youtube.com/",
        directives: &[
            (
                Directive::FrameSrc,
                &["https://www.youtube.com", "https://www.youtube-nocookie.com"],
            ),
            (Directive::ScriptSrc, &["https://www.youtube.com", "https://s.ytimg.com"]),
            (Directive::ImgSrc, &["https://i.ytimg.com"]),
        ],
        aliases: &["youtube-embed"],
        last_updated: datetime!(2024-10-30 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "vimeo",
        name: "Vimeo embeds",
        category: ServiceCategory::Video,
        description: "Embedded Vimeo players",
        website: "https://vimeo.com/",
        directives: &[
            (Directive::FrameSrc, &["https://player.vimeo.com"]),
            (Directive::ScriptSrc, &["https://player.vimeo.com"]),
            (Directive::ImgSrc, &["https://i.vimeocdn.com"]),
            (Directive::MediaSrc, &["https://*.vimeocdn.com"]),
        ],
        last_updated: datetime!(2024-10-30 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
