//! # Content Area Component
//!
//! Routed page content with spacing derived from authentication state,
//! current route, and the sidebar collapse flag.

use dioxus::prelude::*;

use crate::router::{Route, LOGIN_PATH};
use crate::state::{AppState, ShellState};

/// Selects the content spacing class.
///
/// Spacing is a pure function of the three inputs:
/// - signed out, or on the login page → full width, no reserved gap;
/// - sidebar collapsed → narrow gap matching the icon rail;
/// - otherwise → wide gap matching the expanded sidebar.
///
/// Unrecognized paths simply fall through these rules; this never fails.
/// Transitions between the classes are animated in the stylesheet.
#[must_use]
pub fn spacing_class(is_authenticated: bool, path: &str, collapsed: bool) -> &'static str {
    if !is_authenticated || path == LOGIN_PATH {
        "content content-full"
    } else if collapsed {
        "content content-rail"
    } else {
        "content content-wide"
    }
}

/// Whether the sidebar should occupy space at all.
///
/// Recomputed on every render from the current auth state and path; never
/// cached, since either input can change independently (e.g. a logout while
/// on a protected route).
#[must_use]
pub fn sidebar_visible(is_authenticated: bool, path: &str) -> bool {
    is_authenticated && path != LOGIN_PATH
}

/// Content area component.
///
/// Renders the routed page inside a suspense boundary so an unready page
/// shows a placeholder instead of blocking the shell. Reads the collapse
/// signal owned by the shell, so a toggle and the spacing change land in the
/// same render pass.
#[component]
pub fn ContentArea(shell: Signal<ShellState>) -> Element {
    let state = use_context::<AppState>();
    let route = use_route::<Route>();

    let path = route.to_string();
    let class = spacing_class(
        *state.is_authenticated.read(),
        &path,
        shell.read().collapsed,
    );

    rsx! {
        main {
            class: "{class}",

            SuspenseBoundary {
                fallback: |_: SuspenseContext| rsx! {
                    div { class: "content-placeholder", "Loading…" }
                },

                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_is_full_width() {
        assert_eq!(
            spacing_class(false, "/dashboards", true),
            "content content-full"
        );
        assert_eq!(
            spacing_class(false, "/dashboards", false),
            "content content-full"
        );
    }

    #[test]
    fn test_login_route_is_full_width_even_when_signed_in() {
        assert_eq!(spacing_class(true, "/login", false), "content content-full");
        assert_eq!(spacing_class(true, "/login", true), "content content-full");
    }

    #[test]
    fn test_collapsed_reserves_rail_width() {
        assert_eq!(
            spacing_class(true, "/dashboards", true),
            "content content-rail"
        );
    }

    #[test]
    fn test_expanded_reserves_wide_width() {
        assert_eq!(
            spacing_class(true, "/dashboards", false),
            "content content-wide"
        );
    }

    #[test]
    fn test_unknown_path_falls_through() {
        assert_eq!(
            spacing_class(true, "/does-not-exist", true),
            "content content-rail"
        );
        assert_eq!(
            spacing_class(false, "/does-not-exist", false),
            "content content-full"
        );
    }

    #[test]
    fn test_sidebar_visible_rule() {
        assert!(sidebar_visible(true, "/dashboards"));
        assert!(sidebar_visible(true, "/settings"));
        assert!(!sidebar_visible(true, "/login"));
        assert!(!sidebar_visible(false, "/dashboards"));
        assert!(!sidebar_visible(false, "/login"));
    }
}
