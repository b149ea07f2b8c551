//! # Authentication State
//!
//! Global authentication state management using Dioxus signals and context.

use dioxus::prelude::*;

use crate::session::{Session, SessionStore};

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// While `is_loading` is `true` the value of `is_authenticated` is not
/// decision-ready; observers must suspend any navigation decision until the
/// session restore resolves.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the user is authenticated.
    pub is_authenticated: Signal<bool>,

    /// Whether the initial session restore is still in flight.
    pub is_loading: Signal<bool>,

    /// Current user's username (if signed in).
    pub current_user: Signal<Option<String>>,
}

/// A point-in-time view of the auth signals.
///
/// Reading one of these inside a reactive scope subscribes that scope to
/// both underlying signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSnapshot {
    /// Whether the user is authenticated.
    pub is_authenticated: bool,

    /// Whether the session restore is still in flight.
    pub is_loading: bool,
}

impl AppState {
    /// Creates the initial application state.
    ///
    /// Starts in the loading phase; [`AppState::resolve`] flips it once the
    /// session restore completes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_authenticated: Signal::new(false),
            is_loading: Signal::new(true),
            current_user: Signal::new(None),
        }
    }

    /// Returns a decision-ready snapshot of the auth signals.
    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            is_authenticated: *self.is_authenticated.read(),
            is_loading: *self.is_loading.read(),
        }
    }

    /// Check if the user is signed in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        *self.is_authenticated.read()
    }

    /// Applies the result of the startup session restore and ends the
    /// loading phase.
    pub fn resolve(&mut self, restored: Option<Session>) {
        match restored {
            Some(session) => {
                tracing::info!(username = %session.username, "Session restored, signing in");
                self.current_user.set(Some(session.username));
                self.is_authenticated.set(true);
            }
            None => {
                tracing::debug!("No persisted session, staying signed out");
                self.is_authenticated.set(false);
            }
        }
        self.is_loading.set(false);
    }

    /// Sign in with a session and persist it to disk.
    ///
    /// Persistence is best-effort; a failed write is logged and the in-memory
    /// sign-in still proceeds.
    pub fn login(&mut self, session: Session) {
        if let Some(store) = SessionStore::from_config_dir() {
            if let Err(e) = store.save(&session) {
                tracing::warn!("Failed to persist session: {e}");
            }
        }

        self.current_user.set(Some(session.username));
        self.is_authenticated.set(true);
        self.is_loading.set(false);
    }

    /// Sign out and remove the persisted session.
    pub fn logout(&mut self) {
        if let Some(store) = SessionStore::from_config_dir() {
            if let Err(e) = store.clear() {
                tracing::warn!("Failed to clear persisted session: {e}");
            }
        }

        self.current_user.set(None);
        self.is_authenticated.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
