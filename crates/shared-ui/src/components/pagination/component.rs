use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight};
use dioxus_free_icons::Icon;
use shared_types::{page_tokens, PageToken};

use crate::components::button::{Button, ButtonVariant};

/// Numbered page navigator with Previous/Next buttons.
///
/// Renders at most five page numbers with ellipses. The current page and the
/// ellipses are inert; every other page calls `on_select` with its number.
/// Previous/Next follow the server's `has_prev`/`has_next` flags.
#[component]
pub fn PageNavigator(
    current: u32,
    total: u32,
    has_prev: bool,
    has_next: bool,
    on_select: EventHandler<u32>,
) -> Element {
    if total == 0 {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Ghost,
                disabled: !has_prev,
                onclick: move |_| on_select.call(current.saturating_sub(1).max(1)),
                Icon { icon: LdChevronLeft, width: 12, height: 12 }
                "Previous"
            }
            div { class: "pagination-pages",
                for (idx, token) in page_tokens(current, total).into_iter().enumerate() {
                    {match token {
                        PageToken::Ellipsis => rsx! {
                            span { key: "gap-{idx}", class: "pagination-ellipsis", "{token}" }
                        },
                        PageToken::Page(page) if page == current => rsx! {
                            span {
                                key: "page-{page}",
                                class: "pagination-page",
                                "aria-current": "page",
                                "{page}"
                            }
                        },
                        PageToken::Page(page) => rsx! {
                            button {
                                key: "page-{page}",
                                class: "pagination-page",
                                r#type: "button",
                                onclick: move |_| on_select.call(page),
                                "{page}"
                            }
                        },
                    }}
                }
            }
            Button {
                variant: ButtonVariant::Ghost,
                disabled: !has_next,
                onclick: move |_| on_select.call(current + 1),
                "Next"
                Icon { icon: LdChevronRight, width: 12, height: 12 }
            }
        }
    }
}
