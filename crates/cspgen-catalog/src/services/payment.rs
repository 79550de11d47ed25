use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "stripe",
        name: "Stripe",
        category: ServiceCategory::Payment,
        description: "Stripe.js, Elements and Checkout",
        website: "https://stripe.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://js.stripe.com"]),
            (Directive::FrameSrc, &["https://js.stripe.com", "https://hooks.stripe.com"]),
            (Directive::ConnectSrc, &["https://api.stripe.com"]),
        ],
        aliases: &["stripe-js"],
        last_updated: datetime!(2025-01-08 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "paypal",
        name: "PayPal",
        category: ServiceCategory::Payment,
        description: "PayPal JavaScript SDK buttons",
        website: "https://developer.paypal.com/sdk/js/",
        directives: &[
            (Directive::ScriptSrc, &["https://www.paypal.com", "https://www.paypalobjects.com"]),
            (Directive::FrameSrc, &["https://www.paypal.com", "https://www.sandbox.paypal.com"]),
            (Directive::ConnectSrc, &["https://www.paypal.com", "https://www.sandbox.paypal.com"]),
            (Directive::ImgSrc, &["https://www.paypalobjects.com"]),
            (Directive::StyleSrc, &["https://www.paypalobjects.com"]),
        ],
        last_updated: datetime!(2024-10-14 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "braintree",
        name: "Braintree",
        category: ServiceCategory::Payment,
        description: "Braintree hosted fields and Drop-in UI",
        website: "https://www.braintreepayments.com/",
        directives: &[
            (Directive::ScriptSrc, &["https://js.braintreegateway.com", "https://assets.braintreegateway.com"]),
            (Directive::FrameSrc, &["https://assets.braintreegateway.com"]),
            (
                Directive::ConnectSrc,
                &["https://api.braintreegateway.com", "https://client-analytics.braintreegateway.com"],
            ),
            (Directive::ImgSrc, &["https://assets.braintreegateway.com"]),
        ],
        last_updated: datetime!(2024-04-30 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
