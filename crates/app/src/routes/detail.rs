use client::{DetailFetcher, DetailRequest, DetailState, NoticeApi, NoticeClient};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPaperclip;
use dioxus_free_icons::Icon;
use shared_types::Notice;
use shared_ui::{
    AlertBanner, Badge, Button, ButtonVariant, DialogActions, DialogContent, DialogDescription,
    DialogRoot, DialogTitle, SkeletonRows,
};

use crate::format_helpers::{format_notice_date, or_not_available};
use crate::routes::notices::status_badge_variant;

/// Detail dialog state plus the callbacks that drive it.
#[derive(Clone, Copy, PartialEq)]
pub struct NoticeDetail {
    pub state: Signal<DetailFetcher>,
    pub open: Callback<String>,
    pub retry: Callback<()>,
}

pub fn use_notice_detail() -> NoticeDetail {
    let api: NoticeClient = use_context();
    let mut state = use_signal(DetailFetcher::new);

    let open_api = api.clone();
    let open = use_callback(move |id: String| {
        let request = state.write().open(id);
        fetch_detail(open_api.clone(), state, request);
    });
    let retry = use_callback(move |_: ()| {
        let request = state.write().retry();
        if let Some(request) = request {
            fetch_detail(api.clone(), state, request);
        }
    });

    NoticeDetail { state, open, retry }
}

fn fetch_detail(api: NoticeClient, mut state: Signal<DetailFetcher>, request: DetailRequest) {
    spawn(async move {
        let result = api.get_notice(&request.id).await;
        state.write().resolve(&request, result);
    });
}

#[component]
pub fn NoticeDetailDialog(detail: NoticeDetail) -> Element {
    let mut state = detail.state;
    let is_open = state.read().is_open();
    let view = state.read().state().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./detail.css") }
        DialogRoot {
            open: is_open,
            on_open_change: move |value: bool| {
                if !value {
                    state.write().close();
                }
            },
            DialogContent {
                DialogTitle { "Notice Details" }
                match view {
                    DetailState::Closed => rsx! {},
                    DetailState::Loading { .. } => rsx! {
                        div { class: "detail-loading",
                            SkeletonRows { count: 4 }
                            p { class: "muted", "Loading notice details..." }
                        }
                    },
                    DetailState::Failed { message, .. } => rsx! {
                        div { class: "detail-error",
                            DialogDescription { "Error loading notice" }
                            AlertBanner { message: message }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| detail.retry.call(()),
                                "Try Again"
                            }
                        }
                    },
                    DetailState::Loaded(notice) => rsx! {
                        NoticeDetailBody { notice: *notice }
                    },
                }
                DialogActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| state.write().close(),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeDetailBody(notice: Notice) -> Element {
    let publish_date = format_notice_date(Some(&notice.publish_date));
    let created_at = format_notice_date(notice.created_at.as_deref());
    let departments = notice.department_list();
    let body = notice
        .notice_body
        .clone()
        .filter(|b| !b.trim().is_empty())
        .unwrap_or_else(|| "No content provided.".to_string());

    rsx! {
        div { class: "detail-body",
            div { class: "detail-heading",
                h3 { class: "detail-title", "{notice.notice_title}" }
                Badge { variant: status_badge_variant(&notice.status), "{notice.status.label()}" }
            }

            dl { class: "detail-grid",
                DetailField { label: "Publish Date", value: publish_date }
                DetailField { label: "Notice Type", value: notice.notice_type_name().to_string() }
                DetailField { label: "Target Department(s)", value: departments }
                DetailField { label: "Created At", value: created_at }
            }

            if notice.targets_individual() {
                section { class: "detail-section",
                    h4 { "Employee Details" }
                    dl { class: "detail-grid",
                        DetailField {
                            label: "Employee ID",
                            value: or_not_available(notice.employee_id.as_deref()).to_string(),
                        }
                        DetailField {
                            label: "Employee Name",
                            value: or_not_available(notice.employee_name.as_deref()).to_string(),
                        }
                        DetailField {
                            label: "Position",
                            value: or_not_available(notice.position.as_deref()).to_string(),
                        }
                    }
                }
            }

            section { class: "detail-section",
                h4 { "Notice Body" }
                p { class: "detail-text", "{body}" }
            }

            if !notice.attachments.is_empty() {
                section { class: "detail-section",
                    h4 { "Attachments ({notice.attachments.len()})" }
                    ul { class: "detail-attachments",
                        for (i, attachment) in notice.attachments.iter().enumerate() {
                            li { key: "{i}",
                                a {
                                    href: attachment.href(),
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    Icon::<LdPaperclip> { icon: LdPaperclip, width: 14, height: 14 }
                                    "{attachment.label(i)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailField(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "detail-field",
            dt { "{label}" }
            dd { "{value}" }
        }
    }
}
