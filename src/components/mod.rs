//! # Shell Components
//!
//! The persistent application frame wrapping all routed pages.
//!
//! - [`Shell`] - Frame owner: collapse state, sidebar, content, profile panel
//! - [`Sidebar`] - Collapsible navigation sidebar
//! - [`ContentArea`] - Routed content with spacing derived from shell state
//! - [`ProfilePanel`] - Signed-in user panel

mod content;
mod profile;
mod shell;
mod sidebar;

pub use content::ContentArea;
pub use profile::ProfilePanel;
pub use shell::Shell;
pub use sidebar::Sidebar;
