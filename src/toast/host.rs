//! # Toast Host Component
//!
//! Fixed-position overlay rendering the active toast stack.

use dioxus::prelude::*;

use super::Toaster;

/// Toast overlay component.
///
/// Renders every queued toast with its title, message, optional action
/// element, and a close button.
#[component]
pub fn ToastHost() -> Element {
    let mut toaster = use_context::<Toaster>();
    let toasts = toaster.snapshot();

    rsx! {
        div {
            class: "toast-stack",

            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.class}",

                    div {
                        class: "toast-body",

                        strong { class: "toast-title", "{toast.payload.title}" }

                        p { class: "toast-description", "{toast.payload.description}" }

                        if let Some(action) = toast.payload.action.clone() {
                            div { class: "toast-action", {action} }
                        }
                    }

                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| toaster.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
