use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for unknown paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        NotFoundView {}
    }
}

/// The 404 card, also shown when the API reports a listing as not found.
#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page you are looking for doesn't exist or has been moved."
                }
                div { class: "not-found-actions",
                    Link { to: Route::notices(),
                        class: "not-found-link primary",
                        "Go to Homepage"
                    }
                    button {
                        class: "not-found-link",
                        r#type: "button",
                        onclick: move |_| navigator().go_back(),
                        "Go Back"
                    }
                }
            }
        }
    }
}
