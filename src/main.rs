//! # Overlook
//!
//! Desktop dashboard client with an authentication-gated shell.
//!
//! ## Architecture
//!
//! The application renders a persistent frame (collapsible sidebar, content
//! area, profile panel) around routed pages. The root route decides, once the
//! session state has resolved, whether the visitor lands on the dashboards or
//! the login page.
//!
//! ## Modules
//!
//! - [`components`] - Shell frame components (sidebar, content area, profile)
//! - [`router`] - Application routes
//! - [`session`] - Session persistence on disk
//! - [`state`] - Global application state
//! - [`toast`] - Notification facade and toast subsystem
//! - [`util`] - Stateless formatting and validation helpers
//! - [`views`] - Page-level view components

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod components;
mod router;
mod session;
mod state;
mod toast;
mod util;
mod views;

use router::Route;
use session::SessionStore;
use state::AppState;
use toast::Toaster;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    tracing::info!("Starting Overlook");

    // Configure desktop window
    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Overlook")
            .with_inner_size(LogicalSize::new(1280.0, 840.0))
            .with_min_inner_size(LogicalSize::new(960.0, 640.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

/// Root application component.
///
/// Provides global state and the toast handle, kicks off the one-shot session
/// restore, loads the stylesheet, and renders the router.
#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    use_context_provider(Toaster::new);

    // Session restore runs once per app start. The auth state stays in its
    // loading phase until this resolves, which keeps the entry redirector
    // from deciding on stale data.
    use_future(move || async move {
        let restored = SessionStore::from_config_dir().and_then(|store| store.load());
        state.resolve(restored);
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
