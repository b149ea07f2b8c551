//! # Shell State
//!
//! The single piece of shared UI state owned by the application shell.

/// Sidebar collapse state.
///
/// Owned exclusively by the shell and held in one signal; the sidebar's
/// toggle is the only writer, the content area and sidebar are readers.
/// Because both read the same signal instance, a toggle and the resulting
/// spacing change are observed within the same render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    /// Whether the sidebar is rendered in its narrow, icon-only mode.
    pub collapsed: bool,
}

impl ShellState {
    /// Creates the initial shell state.
    ///
    /// The sidebar always starts collapsed on a fresh shell mount; prior
    /// values are intentionally never restored.
    #[must_use]
    pub fn new() -> Self {
        Self { collapsed: true }
    }

    /// Flips the collapse state.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        assert!(ShellState::new().collapsed);
    }

    #[test]
    fn test_toggle_flips() {
        let mut shell = ShellState::new();

        shell.toggle();
        assert!(!shell.collapsed);

        shell.toggle();
        assert!(shell.collapsed);
    }

    #[test]
    fn test_fresh_state_ignores_prior_value() {
        let mut shell = ShellState::new();
        shell.toggle();

        // A new mount starts collapsed no matter what a previous one held.
        assert!(ShellState::new().collapsed);
    }
}
