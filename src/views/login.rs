//! # Login View
//!
//! Sign-in form for the unauthenticated landing route.

use dioxus::prelude::*;

use crate::router::Route;
use crate::session::Session;
use crate::state::AppState;
use crate::toast::Toaster;
use crate::util::validate;

/// Login view component.
///
/// Validates the username locally, establishes a session, and moves on to
/// the dashboards. Already-signed-in visitors are forwarded immediately.
#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let mut toaster = use_context::<Toaster>();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Already authenticated: nothing to do here.
    if state.is_logged_in() {
        nav.push(Route::Dashboards {});
    }

    let mut do_login = move || {
        let username_val = username.read().trim().to_lowercase();

        if let Err(e) = validate::username(&username_val) {
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        state.login(Session::new(username_val.clone()));
        toaster.success(format!("Signed in as {username_val}"), None);
        nav.push(Route::Dashboards {});
    };

    rsx! {
        div {
            class: "login-view",

            div {
                class: "login-card",

                div {
                    class: "login-header",

                    h1 { "Overlook" }

                    p { class: "text-secondary", "Sign in to your dashboards" }
                }

                div {
                    class: "login-form",

                    div {
                        class: "form-group",

                        label { r#for: "username", "Username" }

                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Enter your username",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value().clone()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter {
                                    do_login();
                                }
                            },
                        }
                    }

                    if let Some(err) = error.read().as_ref() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    button {
                        class: "btn-primary btn-lg btn-block",
                        onclick: move |_| do_login(),
                        "Sign In"
                    }

                    p { class: "login-hint text-secondary",
                        "Username: 3-39 chars, lowercase letters, numbers, hyphens"
                    }
                }
            }
        }
    }
}
