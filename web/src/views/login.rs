use dioxus::prelude::*;
use tracing::{debug, info, warn};
use types::{Credentials, LoginGate, OpenGate};

use crate::Route;

#[component]
pub fn Login() -> Element {
    use_hook(|| debug!("login mounted"));
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Welcome back" }
                    p { class: "login-subtitle", "Sign in to the admin dashboard" }
                }
                if let Some(err) = error.read().as_ref() {
                    div { class: "alert alert-error", "{err}" }
                }
                form {
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        let credentials = Credentials::new(email(), password());
                        match OpenGate.admit(&credentials) {
                            Ok(()) => {
                                info!(email = %credentials.email, "signed in");
                                password.set(String::new());
                                error.set(None);
                                navigator().push(Route::Dashboard {});
                            }
                            Err(err) => {
                                warn!(%err, "sign in rejected");
                                error.set(Some(err.message));
                            }
                        }
                    },
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            required: true,
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Sign in"
                    }
                }
            }
        }
    }
}
