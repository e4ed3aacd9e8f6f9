use dioxus::prelude::*;

/// Row of filter controls above a listing.
#[component]
pub fn FilterBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "filter-bar", role: "search",
            {children}
        }
    }
}

/// One labelled slot inside a [`FilterBar`]. `grow` lets the slot take the
/// remaining width, which suits the search box.
#[component]
pub fn FilterItem(#[props(default = false)] grow: bool, children: Element) -> Element {
    rsx! {
        div {
            class: if grow { "filter-item grow" } else { "filter-item" },
            {children}
        }
    }
}
