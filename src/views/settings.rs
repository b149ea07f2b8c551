//! # Settings View
//!
//! Account settings plus demo buttons for every notification facade call.

use dioxus::prelude::*;

use crate::session::{Session, SessionStore};
use crate::state::AppState;
use crate::toast::{Toaster, ToastPayload};
use crate::util::validate;

/// Settings view component.
#[component]
pub fn Settings() -> Element {
    let state = use_context::<AppState>();
    let mut toaster = use_context::<Toaster>();

    let mut email_input = use_signal(String::new);

    let username = state.current_user.read().clone().unwrap_or_default();

    let on_save_email = {
        let username = username.clone();
        move |_| {
            let email = email_input.read().trim().to_string();

            match validate::email(&email) {
                Ok(()) => {
                    let session = Session {
                        username: username.clone(),
                        email: Some(email),
                    };
                    if let Some(store) = SessionStore::from_config_dir() {
                        if let Err(e) = store.save(&session) {
                            tracing::warn!("Failed to save contact email: {e}");
                        }
                    }
                    toaster.success("Contact email saved", None);
                }
                Err(e) => toaster.error(e.to_string(), None),
            }
        }
    };

    rsx! {
        div {
            class: "settings-view",

            h2 { class: "mb-lg", "Settings" }

            div {
                class: "settings-section",

                h3 { class: "mb-md", "Account" }

                div {
                    div {
                        strong { "Signed in as: " }
                        span { class: "mono", "{username}" }
                    }
                }

                div {
                    class: "form-group",

                    label { r#for: "email", "Contact email" }

                    input {
                        id: "email",
                        r#type: "text",
                        placeholder: "you@example.com",
                        value: "{email_input}",
                        oninput: move |evt| email_input.set(evt.value().clone()),
                    }
                }

                button {
                    class: "btn-primary",
                    onclick: on_save_email,
                    "Save"
                }
            }

            div {
                class: "settings-section",

                h3 { class: "mb-md", "Notifications" }

                p { class: "text-secondary mb-md",
                    "Preview each notification style."
                }

                div {
                    class: "btn-group",

                    button {
                        class: "btn-success",
                        onclick: move |_| toaster.success("Everything worked", None),
                        "Success"
                    }

                    button {
                        class: "btn-danger",
                        onclick: move |_| toaster.error("Something went wrong", None),
                        "Error"
                    }

                    button {
                        class: "btn-secondary",
                        onclick: move |_| toaster.info("Nothing to worry about", None),
                        "Info"
                    }

                    button {
                        class: "btn-warning",
                        onclick: move |_| toaster.warning("Check this soon", None),
                        "Warning"
                    }

                    button {
                        class: "btn-ghost",
                        onclick: move |_| {
                            let mut inner = toaster;
                            toaster.custom(ToastPayload {
                                title: "Dashboard archived".to_string(),
                                description: "You can restore it from the archive.".to_string(),
                                action: Some(rsx! {
                                    button {
                                        class: "btn-sm btn-ghost",
                                        onclick: move |_| inner.info("Restore is not wired up yet", None),
                                        "Undo"
                                    }
                                }),
                            });
                        },
                        "Custom"
                    }
                }
            }
        }
    }
}
