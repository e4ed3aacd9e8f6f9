use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent};

use crate::routes::Route;

/// Full-page failure card with "Try Again" and "Go Home".
#[component]
pub fn ErrorView(
    #[props(default = "Something went wrong".to_string())] title: String,
    message: String,
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "error-view",
            Card {
                CardContent {
                    h2 { class: "error-view-title", "{title}" }
                    p { class: "error-view-message", "{message}" }
                    div { class: "error-view-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_retry.call(()),
                            "Try Again"
                        }
                        Link { to: Route::notices(),
                            Button { variant: ButtonVariant::Outline, "Go Home" }
                        }
                    }
                }
            }
        }
    }
}
