//! # Application State
//!
//! Global and shell-local state for the desktop client.
//!
//! - [`AppState`] - Authentication state shared via Dioxus context
//! - [`AuthSnapshot`] - Decision-ready view of the auth signals
//! - [`ShellState`] - Sidebar collapse state owned by the shell

mod app_state;
mod shell;

pub use app_state::{AppState, AuthSnapshot};
pub use shell::ShellState;
