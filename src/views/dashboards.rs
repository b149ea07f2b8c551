//! # Dashboards View
//!
//! Authenticated landing page listing the available dashboards.

use dioxus::prelude::*;

use crate::util::format::title_case;

/// Dashboard slugs shown on the landing page.
///
/// Static for now; a data source behind these is a separate concern.
const DASHBOARD_SLUGS: [(&str, &str); 4] = [
    ("service-health", "Uptime and error budget across services"),
    ("error-rates", "5xx and client error trends"),
    ("team-velocity", "Throughput and cycle time"),
    ("usage-overview", "Daily and monthly active usage"),
];

/// Dashboards landing view.
#[component]
pub fn Dashboards() -> Element {
    rsx! {
        div {
            class: "dashboards-view",

            h2 { class: "mb-lg", "Dashboards" }

            div {
                class: "dashboard-grid",

                for (slug, description) in DASHBOARD_SLUGS {
                    div {
                        key: "{slug}",
                        class: "dashboard-card",

                        h3 { "{title_case(slug)}" }

                        p { class: "text-secondary", "{description}" }
                    }
                }
            }
        }
    }
}
