use crate::spec::ServiceSpec;
use cspgen_types::{Directive, ServiceCategory};
use time::macros::datetime;

pub(crate) const SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        id: "sentry",
        name: "Sentry",
        category: ServiceCategory::Monitoring,
        description: "Error tracking and performance monitoring",
        website: "https://sentry.io/",
        directives: &[
            (Directive::ScriptSrc, &["https://browser.sentry-cdn.com", "https://js.sentry-cdn.com"]),
            (Directive::ConnectSrc, &["https://*.ingest.sentry.io", "https://*.ingest.us.sentry.io"]),
            (Directive::WorkerSrc, &["blob:"]),
        ],
        notes: Some("Sentry can also receive CSP violation reports; point report-uri at the project's security endpoint."),
        last_updated: datetime!(2024-12-16 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "datadog-rum",
        name: "Datadog RUM",
        category: ServiceCategory::Monitoring,
        description: "Datadog Real User Monitoring browser SDK",
        website: "https://www.datadoghq.com/product/real-user-monitoring/",
        directives: &[
            (Directive::ScriptSrc, &["https://www.datadoghq-browser-agent.com"]),
            (Directive::ConnectSrc, &["https://browser-intake-datadoghq.com"]),
            (Directive::WorkerSrc, &["blob:"]),
        ],
        aliases: &["datadog"],
        last_updated: datetime!(2024-09-27 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
    ServiceSpec {
        id: "new-relic",
        name: "New Relic Browser",
        category: ServiceCategory::Monitoring,
        description: "New Relic browser agent",
        website: "https://newrelic.com/platform/browser-monitoring",
        directives: &[
            (Directive::ScriptSrc, &["https://js-agent.newrelic.com"]),
            (Directive::ConnectSrc, &["https://bam.nr-data.net", "https://bam-cell.nr-data.net"]),
        ],
        aliases: &["newrelic"],
        last_updated: datetime!(2024-05-08 00:00 UTC),
        ..ServiceSpec::EMPTY
    },
];
