use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

/// US data-hosting defaults; other regions derive from it in `configurable`.
pub(crate) const INTERCOM: ServiceSpec = ServiceSpec {
    id: "intercom",
    name: "Intercom Messenger",
    category: ServiceCategory::Chat,
    description: "Intercom chat widget",
    website: "https://www.intercom.com/",
    directives: &[
        (Directive::ScriptSrc, &["https://widget.intercom.io", "https://js.intercomcdn.com"]),
        (
            Directive::ConnectSrc,
            &[
                "https://via.intercom.io",
                "https://api.intercom.io",
                "https://api-iam.intercom.io",
                "wss://nexus-websocket-a.intercom.io",
                "wss://nexus-websocket-b.intercom.io",
            ],
        ),
        (
            Directive::ImgSrc,
            &["https://static.intercomassets.com", "https://js.intercomcdn.com"],
        ),
        (Directive::FontSrc, &["https://js.intercomcdn.com", "https://fonts.intercomcdn.com"]),
        (Directive::MediaSrc, &["https://js.intercomcdn.com"]),
        (Directive::FrameSrc, &["https://intercom-sheets.com"]),
        (Directive::FormAction, &["https://intercom.help", "https://api-iam.intercom.io"]),
    ],
    notes: Some("EU and AU workspaces use regional API hosts; configure the region."),
    last_updated: datetime!(2024-12-02 00:00 UTC),
    ..ServiceSpec::EMPTY
};

pub(crate) const SERVICES: &[ServiceSpec] = &[
    INTERCOM,
    ServiceSpec {
        id: "crisp",
        name: "Crisp Chat",
        category: ServiceCategory::Chat,
        description: "Crisp live chat widget",
        website: "https://crisp.chat/",
        directives: &[
            (Directive::ScriptSrc, &["https://client.crisp.chat"]),
            (Directive::StyleSrc, &["https://client.crisp.chat"]),
            (Directive::ImgSrc, &["https://client.crisp.chat", "https://image.crisp.chat"]),
            (Directive::FontSrc, &["https://client.crisp.chat"]),
            (
                Directive::ConnectSrc,
                &["https://client.crisp.chat", "wss://client.relay.crisp.chat"],
            ),
            (Directive::FrameSrc, &["https://game.crisp.chat"]),
        ],
        last_updated: datetime!(2024-06-25 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "zendesk-chat",
        name: "Zendesk Web Widget",
        category: ServiceCategory::Chat,
        description: "Zendesk messaging and help center widget",
        website: "https://www.zendesk.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://static.zdassets.com"]),
            (
                Directive::ConnectSrc,
                &[
                    "https://*.zendesk.com",
                    "https://*.zdassets.com",
                    "wss://*.zendesk.com",
                ],
            ),
            (Directive::ImgSrc, &["https://*.zdassets.com", "https://*.zendesk.com"]),
        ],
        aliases: &["zendesk"],
        last_updated: datetime!(2024-10-09 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
