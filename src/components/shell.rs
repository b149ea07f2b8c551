//! # Shell Component
//!
//! Application frame wrapper providing the persistent structure.

use dioxus::prelude::*;

use super::{ContentArea, ProfilePanel, Sidebar};
use crate::state::ShellState;
use crate::toast::ToastHost;

/// Application shell component.
///
/// Owns the sidebar collapse state and renders the three frame regions in
/// fixed order: sidebar, content area, profile panel. The toast stack is an
/// overlay on top of the frame.
///
/// # Structure
///
/// ```text
/// +---------+---------------------------+----------+
/// | Sidebar |                           | Profile  |
/// |         |       Content Area        | Panel    |
/// |  Nav    |       (Outlet)            |          |
/// |  Items  |                           |          |
/// +---------+---------------------------+----------+
/// ```
#[component]
pub fn Shell() -> Element {
    // Sidebar always starts collapsed on a fresh mount; this is the only
    // writer-owning cell for the collapse flag.
    let shell = use_signal(ShellState::new);

    rsx! {
        div {
            class: "app-shell",

            Sidebar { shell }

            ContentArea { shell }

            ProfilePanel {}

            ToastHost {}
        }
    }
}
