use dioxus::prelude::*;

use client::NoticeClient;

mod format_helpers;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// The client's local calendar day, used for publish-date validation.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
fn App() -> Element {
    // One HTTP client for every page; config is read once on first use.
    use_context_provider(|| {
        let client = NoticeClient::from_env();
        tracing::info!(base_url = %client.config().base_url, "notices API configured");
        client
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "app-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
