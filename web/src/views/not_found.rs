use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    use_hook(|| tracing::debug!(%path, "no route"));

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { class: "login-title", "Page not found" }
                p { class: "text-muted", "There is nothing at /{path}." }
                Link { to: Route::Login {}, class: "btn btn-primary", "Go to sign in" }
            }
        }
    }
}
