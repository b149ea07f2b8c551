//! # Sidebar Component
//!
//! Collapsible navigation sidebar for the application.

use dioxus::prelude::*;

use super::content::sidebar_visible;
use crate::router::Route;
use crate::state::{AppState, ShellState};

/// Navigation sidebar component.
///
/// Hidden entirely when signed out or on the login page. Receives the
/// collapse signal owned by the shell and is its only writer, via the
/// toggle control at the bottom.
#[component]
pub fn Sidebar(mut shell: Signal<ShellState>) -> Element {
    let state = use_context::<AppState>();
    let route = use_route::<Route>();

    let path = route.to_string();
    if !sidebar_visible(*state.is_authenticated.read(), &path) {
        return rsx! {};
    }

    let collapsed = shell.read().collapsed;

    rsx! {
        nav {
            class: if collapsed { "sidebar sidebar-collapsed" } else { "sidebar" },

            div {
                class: "sidebar-brand",
                if collapsed { "O" } else { "Overlook" }
            }

            div {
                class: "nav-links",

                Link {
                    to: Route::Dashboards {},
                    class: "nav-link",
                    active_class: "active",
                    span { class: "nav-icon", "▦" }
                    if !collapsed {
                        span { class: "nav-text", "Dashboards" }
                    }
                }

                Link {
                    to: Route::Settings {},
                    class: "nav-link",
                    active_class: "active",
                    span { class: "nav-icon", "⚙" }
                    if !collapsed {
                        span { class: "nav-text", "Settings" }
                    }
                }
            }

            button {
                class: "collapse-toggle",
                onclick: move |_| shell.write().toggle(),
                if collapsed { "»" } else { "«" }
            }
        }
    }
}
