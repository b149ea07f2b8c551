//! # Toast Queue
//!
//! Payload construction and the plain queue behind the toaster handle.
//!
//! Kept free of UI types' reactive machinery so the facade contract is
//! unit-testable without a running app.

use dioxus::prelude::*;

/// Semantic level of a facade toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
    /// Neutral information.
    Info,
    /// Something needs attention.
    Warning,
}

impl ToastLevel {
    /// Title used when the caller does not override it.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Info => "Information",
            Self::Warning => "Warning",
        }
    }

    /// CSS class for the rendered toast.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Info => "toast-info",
            Self::Warning => "toast-warning",
        }
    }
}

/// A single notification payload.
///
/// Ephemeral: constructed, dispatched once, discarded.
#[derive(Clone)]
pub struct ToastPayload {
    /// Short heading shown above the message.
    pub title: String,

    /// The message body.
    pub description: String,

    /// Optional renderable action (e.g. an undo button).
    pub action: Option<Element>,
}

/// Builds the payload for a semantic facade call.
///
/// `description` is the provided message; `title` is the override when given,
/// the level's default otherwise.
#[must_use]
pub fn payload_for(
    level: ToastLevel,
    message: impl Into<String>,
    title: Option<&str>,
) -> ToastPayload {
    ToastPayload {
        title: title.unwrap_or(level.default_title()).to_string(),
        description: message.into(),
        action: None,
    }
}

/// A queued toast with its display identity.
#[derive(Clone)]
pub struct ActiveToast {
    /// Identity for dismissal; unique within the queue's lifetime.
    pub id: u64,

    /// CSS class selecting the toast's look.
    pub class: &'static str,

    /// The dispatched payload, unmodified.
    pub payload: ToastPayload,
}

/// Ordered queue of active toasts.
#[derive(Default)]
pub struct ToastQueue {
    items: Vec<ActiveToast>,
    next_id: u64,
}

impl ToastQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a payload and returns the assigned id.
    pub fn push(&mut self, payload: ToastPayload, class: &'static str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ActiveToast { id, class, payload });
        id
    }

    /// Removes the toast with the given id, if still queued.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Active toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> &[ActiveToast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_uses_default_title() {
        let payload = payload_for(ToastLevel::Error, "X", None);

        assert_eq!(payload.title, "Error");
        assert_eq!(payload.description, "X");
        assert!(payload.action.is_none());
    }

    #[test]
    fn test_success_payload_with_title_override() {
        let payload = payload_for(ToastLevel::Success, "X", Some("Done"));

        assert_eq!(payload.title, "Done");
        assert_eq!(payload.description, "X");
    }

    #[test]
    fn test_default_titles() {
        assert_eq!(ToastLevel::Success.default_title(), "Success");
        assert_eq!(ToastLevel::Error.default_title(), "Error");
        assert_eq!(ToastLevel::Info.default_title(), "Information");
        assert_eq!(ToastLevel::Warning.default_title(), "Warning");
    }

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut queue = ToastQueue::new();

        let a = queue.push(payload_for(ToastLevel::Info, "one", None), "toast-info");
        let b = queue.push(payload_for(ToastLevel::Info, "two", None), "toast-info");

        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 2);
    }

    #[test]
    fn test_custom_payload_passes_through_unmodified() {
        let mut queue = ToastQueue::new();
        let payload = ToastPayload {
            title: "T".to_string(),
            description: "D".to_string(),
            action: None,
        };

        let id = queue.push(payload, "toast-custom");

        let queued = &queue.items()[0];
        assert_eq!(queued.id, id);
        assert_eq!(queued.payload.title, "T");
        assert_eq!(queued.payload.description, "D");
        assert_eq!(queued.class, "toast-custom");
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::new();
        let a = queue.push(payload_for(ToastLevel::Info, "one", None), "toast-info");
        let b = queue.push(payload_for(ToastLevel::Info, "two", None), "toast-info");

        queue.dismiss(a);

        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut queue = ToastQueue::new();
        queue.push(payload_for(ToastLevel::Info, "one", None), "toast-info");

        queue.dismiss(999);

        assert_eq!(queue.items().len(), 1);
    }
}
