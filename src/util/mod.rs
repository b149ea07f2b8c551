//! # Utilities
//!
//! Stateless helpers with no dependencies on app state.

pub mod format;
pub mod validate;
