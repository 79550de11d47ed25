use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "recaptcha",
        name: "Google reCAPTCHA",
        category: ServiceCategory::Forms,
        description: "reCAPTCHA v2 and v3 bot protection",
        website: "https://www.google.com/recaptcha/",
        directives: &[
            (Directive::ScriptSrc, &["https://www.google.com", "https://www.gstatic.com"]),
            (Directive::FrameSrc, &["https://www.google.com"]),
            (Directive::ConnectSrc, &["https://www.google.com"]),
        ],
        aliases: &["google-recaptcha"],
        requires_nonce: true,
        notes: Some("Google recommends a nonce-based strict policy for the loader script."),
        last_updated: datetime!(2024-11-05 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "hcaptcha",
        name: "hCaptcha",
        category: ServiceCategory::Forms,
        description: "Privacy-focused CAPTCHA",
        website: "https://www.hcaptcha.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://hcaptcha.com", "https://*.hcaptcha.com"]),
            (Directive::FrameSrc, &["https://hcaptcha.com", "https://*.hcaptcha.com"]),
            (Directive::StyleSrc, &["https://hcaptcha.com", "https://*.hcaptcha.com"]),
            (Directive::ConnectSrc, &["https://hcaptcha.com", "https://*.hcaptcha.com"]),
        ],
        last_updated: datetime!(2024-07-22 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "typeform",
        name: "Typeform",
        category: ServiceCategory::Forms,
        description: "Embedded Typeform surveys",
        website: "https://www.typeform.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://embed.typeform.com"]),
            (Directive::FrameSrc, &["https://form.typeform.com"]),
            (Directive::StyleSrc, &["https://embed.typeform.com"]),
        ],
        last_updated: datetime!(2024-03-11 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "hubspot-forms",
        name: "HubSpot Forms",
        category: ServiceCategory::Forms,
        description: "Embedded HubSpot marketing forms",
        website: "https://www.hubspot.com/products/marketing/forms",
        directives: &[
            (Directive::ScriptSrc, &["https://js.hsforms.net", "https://forms.hsforms.com"]),
            (Directive::ConnectSrc, &["https://forms.hubspot.com", "https://forms.hsforms.com"]),
            (Directive::ImgSrc, &["https://forms.hsforms.com", "https://forms.hubspot.com"]),
            (Directive::FrameSrc, &["https://forms.hsforms.com"]),
        ],
        aliases: &["hubspot"],
        last_updated: datetime!(2024-08-02 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
