//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;

use crate::components::Shell;
use crate::views::{Dashboards, Entry, Login, Settings};

/// Literal path of the unauthenticated landing route.
///
/// The content area and sidebar compare the current path against this string
/// to suppress reserved sidebar spacing on the login page.
pub const LOGIN_PATH: &str = "/login";

/// Literal path of the authenticated landing route.
pub const DASHBOARDS_PATH: &str = "/dashboards";

/// Application routes.
///
/// All routes are wrapped in the [`Shell`] component which provides the
/// persistent frame (sidebar, content area, profile panel).
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Persistent shell wrapper for all routes.
    #[layout(Shell)]
    /// Root route: redirects based on authentication state.
    #[route("/")]
    Entry {},

    /// Unauthenticated landing page.
    #[route("/login")]
    Login {},

    /// Authenticated landing page.
    #[route("/dashboards")]
    Dashboards {},

    /// Account settings and notification demos.
    #[route("/settings")]
    Settings {},
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_path_matches_route() {
        assert_eq!(Route::Login {}.to_string(), LOGIN_PATH);
    }

    #[test]
    fn test_dashboards_path_matches_route() {
        assert_eq!(Route::Dashboards {}.to_string(), DASHBOARDS_PATH);
    }

    #[test]
    fn test_entry_is_root() {
        assert_eq!(Route::Entry {}.to_string(), "/");
    }
}
