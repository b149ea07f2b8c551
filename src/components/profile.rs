//! # Profile Panel Component
//!
//! Signed-in user panel rendered as the shell's third region.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;
use crate::toast::Toaster;
use crate::util::format::{initials, truncate_middle};

/// Profile panel component.
///
/// Shows the signed-in user's avatar and name with a sign-out control.
/// Renders nothing while signed out.
#[component]
pub fn ProfilePanel() -> Element {
    let mut state = use_context::<AppState>();
    let mut toaster = use_context::<Toaster>();
    let nav = use_navigator();

    if !state.is_logged_in() {
        return rsx! {};
    }

    let username = state.current_user.read().clone().unwrap_or_default();

    let on_logout = move |_| {
        state.logout();
        toaster.info("You have been signed out", None);
        nav.push(Route::Login {});
    };

    rsx! {
        aside {
            class: "profile-panel",

            div { class: "profile-avatar", "{initials(&username)}" }

            span { class: "profile-username", "{truncate_middle(&username, 18)}" }

            button {
                class: "btn-sm btn-ghost",
                onclick: on_logout,
                "Sign out"
            }
        }
    }
}
