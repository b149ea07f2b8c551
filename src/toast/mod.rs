//! # Toast Notifications
//!
//! Notification facade and the toast subsystem behind it.
//!
//! Pages call the semantic facade methods on [`Toaster`] (success, error,
//! info, warning, or a fully custom payload); each call produces exactly one
//! dispatch into the queue. The [`ToastHost`] overlay renders the queue and
//! every toast auto-dismisses after a few seconds.

mod host;
mod queue;

pub use host::ToastHost;
pub use queue::{payload_for, ActiveToast, ToastLevel, ToastPayload, ToastQueue};

use std::time::Duration;

use dioxus::prelude::*;

/// How long a toast stays on screen before auto-dismissing.
const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Cross-cutting notification handle.
///
/// Shared via Dioxus context; clone-cheap and usable from any event handler.
/// All facade methods are fire-and-forget: they enqueue one toast and return
/// immediately, display lifecycle runs on a spawned task.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    /// Creates an empty toaster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: Signal::new(ToastQueue::new()),
        }
    }

    /// Show a success toast. Title defaults to "Success".
    pub fn success(&mut self, message: impl Into<String>, title: Option<&str>) {
        self.leveled(ToastLevel::Success, message, title);
    }

    /// Show an error toast. Title defaults to "Error".
    pub fn error(&mut self, message: impl Into<String>, title: Option<&str>) {
        self.leveled(ToastLevel::Error, message, title);
    }

    /// Show an informational toast. Title defaults to "Information".
    pub fn info(&mut self, message: impl Into<String>, title: Option<&str>) {
        self.leveled(ToastLevel::Info, message, title);
    }

    /// Show a warning toast. Title defaults to "Warning".
    pub fn warning(&mut self, message: impl Into<String>, title: Option<&str>) {
        self.leveled(ToastLevel::Warning, message, title);
    }

    fn leveled(&mut self, level: ToastLevel, message: impl Into<String>, title: Option<&str>) {
        self.dispatch(payload_for(level, message, title), level.css_class());
    }

    /// Show a fully custom toast.
    ///
    /// The payload is passed through unmodified, including any renderable
    /// action element.
    pub fn custom(&mut self, payload: ToastPayload) {
        self.dispatch(payload, "toast-custom");
    }

    /// Dismiss a toast early.
    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    /// Cloned view of the active toasts, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ActiveToast> {
        self.queue.read().items().to_vec()
    }

    fn dispatch(&mut self, payload: ToastPayload, class: &'static str) {
        let id = self.queue.write().push(payload, class);

        let mut queue = self.queue;
        spawn(async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            queue.write().dismiss(id);
        });
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}
