//! # Entry Redirector
//!
//! Controller for the root route: waits for the auth state to resolve, then
//! issues a single replace-navigation to the matching landing page.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::{AppState, AuthSnapshot};

/// Where a resolved auth state should land.
///
/// Returns `None` while the session restore is still in flight; the decision
/// is suspended, not an error.
#[must_use]
pub fn redirect_target(auth: AuthSnapshot) -> Option<Route> {
    if auth.is_loading {
        return None;
    }

    Some(if auth.is_authenticated {
        Route::Dashboards {}
    } else {
        Route::Login {}
    })
}

/// The navigation to issue now, given the last one issued.
///
/// An unchanged decision yields `None`, so repeated identical auth updates
/// never fire duplicate navigations. A changed decision (e.g. the session
/// expiring while this view is mounted) yields the new target.
#[must_use]
pub fn next_redirect(last: Option<&Route>, auth: AuthSnapshot) -> Option<Route> {
    let target = redirect_target(auth)?;
    (last != Some(&target)).then_some(target)
}

/// Root route component.
///
/// Observes the auth signals and replaces the current history entry with the
/// decided landing route, so back-navigation never returns here. The effect
/// dies with the scope: unmounting while the restore is pending abandons the
/// decision.
#[component]
pub fn Entry() -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();
    let mut last_issued = use_signal(|| Option::<Route>::None);

    use_effect(move || {
        let snapshot = state.snapshot();
        // Bind the decision before writing so the peek borrow is released.
        let decided = next_redirect(last_issued.peek().as_ref(), snapshot);
        if let Some(target) = decided {
            tracing::info!(to = %target, "Entry redirect");
            last_issued.set(Some(target.clone()));
            nav.replace(target);
        }
    });

    rsx! {
        div {
            class: "entry-loading",

            div { class: "spinner" }

            span { "Preparing your session…" }
        }
    }
}
