use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "auth0",
        name: "Auth0",
        category: ServiceCategory::Authentication,
        description: "Auth0 SPA SDK and Universal Login",
        website: "https://auth0.com/",
        directives: &[
            (Directive::ConnectSrc, &["https://*.auth0.com"]),
            (Directive::FrameSrc, &["https://*.auth0.com"]),
            (Directive::ScriptSrc, &["https://cdn.auth0.com"]),
        ],
        notes: Some("Replace the wildcard tenant host with your custom domain where possible."),
        last_updated: datetime!(2024-09-18 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "google-sign-in",
        name: "Sign in with Google",
        category: ServiceCategory::Authentication,
        description: "Google Identity Services button and One Tap",
        website: "https://developers.google.com/identity/gsi/web",
        directives: &[
            (Directive::ScriptSrc, &["https://accounts.google.com/gsi/client"]),
            (Directive::FrameSrc, &["https://accounts.google.com/gsi/"]),
            (Directive::ConnectSrc, &["https://accounts.google.com/gsi/"]),
            (Directive::StyleSrc, &["https://accounts.google.com/gsi/style"]),
        ],
        aliases: &["google-identity", "gsi"],
        last_updated: datetime!(2024-10-07 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
