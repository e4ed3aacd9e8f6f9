pub mod create;
pub mod detail;
pub mod drafts;
pub mod error_view;
pub mod not_found;
pub mod notices;

use crate::format_helpers::{format_long_date, greeting};
use chrono::Timelike;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdFileText, LdPlus};
use dioxus_free_icons::Icon;

use not_found::NotFound;

/// Application routes.
///
/// The listings take their raw query string so the filter and page values
/// survive reloads and back/forward navigation.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/?:..query")]
    NoticeList { query: String },
    #[route("/draft-notices?:..query")]
    DraftList { query: String },
    #[route("/create-notice")]
    CreateNotice {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn notices() -> Self {
        Route::NoticeList {
            query: String::new(),
        }
    }

    pub fn drafts() -> Self {
        Route::DraftList {
            query: String::new(),
        }
    }
}

/// Navigate to an in-app href such as `/?status=published&page=2`.
pub fn push_href(href: &str) {
    match href.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(err) => tracing::warn!(href, error = %err, "ignoring unroutable href"),
    }
}

/// Sidebar plus top bar around every page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    let page_title = match &route {
        Route::NoticeList { .. } => "Notice Board",
        Route::DraftList { .. } => "Draft Notices",
        Route::CreateNotice {} => "Create Notice",
        Route::NotFound { .. } => "",
    };
    let now = chrono::Local::now();
    let salutation = greeting(now.hour());
    let date_line = format_long_date(now.date_naive());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "Notice Board" }
                }
                nav { class: "sidebar-nav",
                    NavItem {
                        to: Route::notices(),
                        active: matches!(route, Route::NoticeList { .. }),
                        Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                        "Notices"
                    }
                    NavItem {
                        to: Route::CreateNotice {},
                        active: matches!(route, Route::CreateNotice {}),
                        Icon::<LdPlus> { icon: LdPlus, width: 18, height: 18 }
                        "Create Notice"
                    }
                    NavItem {
                        to: Route::drafts(),
                        active: matches!(route, Route::DraftList { .. }),
                        Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                        "Draft Notices"
                    }
                }
            }

            div { class: "app-main",
                header { class: "navbar",
                    div {
                        h1 { class: "navbar-greeting", "{salutation}" }
                        p { class: "navbar-date", "{date_line}" }
                    }
                    span { class: "navbar-title", "{page_title}" }
                }

                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavItem(to: Route, active: bool, children: Element) -> Element {
    let class = if active { "sidebar-link active" } else { "sidebar-link" };
    rsx! {
        Link {
            to: to,
            class: class,
            {children}
        }
    }
}

#[component]
fn NoticeList(query: String) -> Element {
    rsx! { notices::NoticeListPage { query: query } }
}

#[component]
fn DraftList(query: String) -> Element {
    rsx! { drafts::DraftListPage { query: query } }
}

#[component]
fn CreateNotice() -> Element {
    rsx! { create::CreateNoticePage {} }
}
