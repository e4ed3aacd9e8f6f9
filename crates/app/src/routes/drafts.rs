use client::{DraftList, NoticeApi, NoticeClient, DRAFTS_PATH};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdEye, LdUpload};
use dioxus_free_icons::Icon;
use shared_types::{page_from_query, page_href, Notice, NoticeFilters};
use shared_ui::{
    Badge, Card, DataTable, DataTableBody, DataTableCell, DataTableCheckbox,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, PageNavigator,
    PageSubtitle, PageTitle, SkeletonRows,
};

use crate::format_helpers::format_notice_date;
use crate::routes::detail::{use_notice_detail, NoticeDetailDialog};
use crate::routes::error_view::ErrorView;
use crate::routes::not_found::NotFoundView;
use crate::routes::notices::status_badge_variant;
use crate::routes::{push_href, Route};

#[component]
pub fn DraftListPage(query: String) -> Element {
    let api: NoticeClient = use_context();
    let mut drafts = use_signal(DraftList::default);
    let detail = use_notice_detail();

    let fetch_api = api.clone();
    let mut data = use_resource(use_reactive(&query, move |query| {
        let api = fetch_api.clone();
        async move {
            let page = page_from_query(&query);
            api.list_drafts((page > 1).then_some(page)).await
        }
    }));

    use_effect(move || {
        if let Some(Ok(page)) = &*data.read() {
            drafts.write().replace_page(page.clone());
        }
    });

    let on_publish = use_callback(move |id: String| {
        if !drafts.write().begin_publish(&id) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let result = api.publish_draft(&id).await;
            if drafts.write().finish_publish(&id, result) {
                data.restart();
            }
        });
    });

    let on_page = move |page: u32| {
        push_href(&page_href(DRAFTS_PATH, &NoticeFilters::default(), page));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./notices.css") }

        match &*data.read() {
            Some(Err(err)) if err.is_not_found() => rsx! { NotFoundView {} },
            Some(Err(err)) => rsx! {
                ErrorView {
                    title: "Error Loading Draft Notices",
                    message: err.message.clone(),
                    on_retry: move |_| data.restart(),
                }
            },
            _ => rsx! {
                div { class: "container",
                    PageHeader {
                        div { class: "drafts-heading",
                            Link { to: Route::notices(), class: "back-link",
                                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 18, height: 18 }
                            }
                            div {
                                PageTitle { "Draft Notices" }
                                PageSubtitle {
                                    "Manage your draft notices ({drafts.read().total_count()} total)"
                                }
                            }
                        }
                    }

                    if data.read().is_none() {
                        Card { SkeletonRows { count: 6 } }
                    } else {
                        Card { flush: true,
                            DraftTable {
                                drafts: drafts,
                                on_publish: on_publish,
                                on_view: detail.open,
                            }
                        }
                        if let Some(info) = drafts.read().pagination().cloned() {
                            PageNavigator {
                                current: info.current_page,
                                total: info.total_pages,
                                has_prev: info.has_prev_page,
                                has_next: info.has_next_page,
                                on_select: on_page,
                            }
                        }
                    }

                    NoticeDetailDialog { detail: detail }
                }
            },
        }
    }
}

#[component]
fn DraftTable(
    drafts: Signal<DraftList>,
    on_publish: Callback<String>,
    on_view: Callback<String>,
) -> Element {
    let notices: Vec<Notice> = drafts.read().notices().to_vec();
    let all_selected = {
        let drafts = drafts.read();
        drafts
            .rows()
            .all_selected(drafts.notices().iter().map(|n| n.id.as_str()))
    };

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn {
                    DataTableCheckbox {
                        checked: all_selected,
                        disabled: notices.is_empty(),
                        label: "Select all drafts",
                        on_toggle: move |_| drafts.write().toggle_all(),
                    }
                }
                DataTableColumn { "Title" }
                DataTableColumn { "Notice Type" }
                DataTableColumn { "Department/Individual" }
                DataTableColumn { "Published On" }
                DataTableColumn { "Status" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                if notices.is_empty() {
                    DataTableEmpty { colspan: 7, title: "No draft notices found" }
                }
                for notice in notices {
                    DraftRow {
                        key: "{notice.id}",
                        notice: notice.clone(),
                        selected: drafts.read().rows().is_selected(&notice.id),
                        pending: drafts.read().rows().is_pending(&notice.id),
                        error: drafts.read().rows().error(&notice.id).map(str::to_string),
                        on_select: move |id: String| drafts.write().rows_mut().toggle_selected(&id),
                        on_dismiss: move |id: String| drafts.write().rows_mut().dismiss_error(&id),
                        on_publish: on_publish,
                        on_view: on_view,
                    }
                }
            }
        }
    }
}

#[component]
fn DraftRow(
    notice: Notice,
    selected: bool,
    pending: bool,
    error: Option<String>,
    on_select: EventHandler<String>,
    on_dismiss: EventHandler<String>,
    on_publish: Callback<String>,
    on_view: Callback<String>,
) -> Element {
    let id = notice.id.clone();
    let (select_id, publish_id, view_id, dismiss_id) = (id.clone(), id.clone(), id.clone(), id);
    let audience_code = notice.primary_target_code().unwrap_or_default().to_string();

    rsx! {
        DataTableRow { selected: selected,
            DataTableCell {
                DataTableCheckbox {
                    checked: selected,
                    label: "Select draft",
                    on_toggle: move |_| on_select.call(select_id.clone()),
                }
            }
            DataTableCell { class: "notice-title", "{notice.notice_title}" }
            DataTableCell { class: "muted", "{notice.notice_type_name()}" }
            DataTableCell {
                span { class: "audience", "data-target": "{audience_code}", "{notice.department_summary()}" }
            }
            DataTableCell { class: "muted", "{format_notice_date(Some(&notice.publish_date))}" }
            DataTableCell {
                Badge { variant: status_badge_variant(&notice.status), "{notice.status.label()}" }
            }
            DataTableCell {
                div { class: "row-actions",
                    button {
                        class: "icon-button",
                        r#type: "button",
                        title: "View notice",
                        onclick: move |_| on_view.call(view_id.clone()),
                        Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                    }
                    button {
                        class: "icon-button",
                        r#type: "button",
                        title: "Publish draft",
                        disabled: pending,
                        "aria-busy": if pending { "true" } else { "false" },
                        onclick: move |_| on_publish.call(publish_id.clone()),
                        if pending {
                            span { class: "row-spinner" }
                        } else {
                            Icon::<LdUpload> { icon: LdUpload, width: 18, height: 18 }
                        }
                    }
                }
                if let Some(message) = error {
                    p { class: "row-error",
                        "{message}"
                        button {
                            class: "row-error-dismiss",
                            r#type: "button",
                            onclick: move |_| on_dismiss.call(dismiss_id.clone()),
                            "Dismiss"
                        }
                    }
                }
            }
        }
    }
}
