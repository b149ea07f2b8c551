//! # Views
//!
//! Page-level view components.
//!
//! - [`Entry`] - Root route redirector
//! - [`Login`] - Sign-in form
//! - [`Dashboards`] - Authenticated landing page
//! - [`Settings`] - Account settings and notification demos

mod dashboards;
mod entry;
mod login;
mod settings;

pub use dashboards::Dashboards;
pub use entry::Entry;
pub use login::Login;
pub use settings::Settings;
