use client::filters::wait_for_search;
use client::{FilterSync, NoticeApi, NoticeClient, NoticeList};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdFileText, LdPlus};
use dioxus_free_icons::Icon;
use shared_types::{
    page_from_query, page_href, FilterField, Notice, NoticeFilters, NoticeStatus, TARGET_OPTIONS,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, DataTable, DataTableBody, DataTableCell,
    DataTableCheckbox, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FilterBar,
    FilterItem, FormSelect, Input, LabeledSwitch, PageActions, PageHeader, PageNavigator,
    PageSubtitle, PageTitle, SkeletonRows,
};

use crate::format_helpers::format_notice_date;
use crate::routes::detail::{use_notice_detail, NoticeDetailDialog};
use crate::routes::error_view::ErrorView;
use crate::routes::not_found::NotFoundView;
use crate::routes::{push_href, Route};

const LIST_PATH: &str = "/";

pub fn status_badge_variant(status: &NoticeStatus) -> BadgeVariant {
    match status {
        NoticeStatus::Published => BadgeVariant::Success,
        NoticeStatus::Unpublished => BadgeVariant::Destructive,
        NoticeStatus::Draft => BadgeVariant::Warning,
        NoticeStatus::Other(_) => BadgeVariant::Secondary,
    }
}

#[component]
pub fn NoticeListPage(query: String) -> Element {
    let api: NoticeClient = use_context();
    let mut sync = use_signal(|| FilterSync::new(LIST_PATH, NoticeFilters::from_query_str(&query)));
    let mut list = use_signal(NoticeList::default);
    let detail = use_notice_detail();

    // Back/forward or a link changed the URL: adopt it and drop any pending
    // search navigation.
    use_effect(use_reactive(&query, move |query| {
        sync.write()
            .sync_from_url(NoticeFilters::from_query_str(&query));
    }));

    let fetch_api = api.clone();
    let mut data = use_resource(use_reactive(&query, move |query| {
        let api = fetch_api.clone();
        async move {
            let filters = NoticeFilters::from_query_str(&query);
            let page = page_from_query(&query);
            api.list_notices((page > 1).then_some(page), &filters).await
        }
    }));

    use_effect(move || {
        if let Some(Ok(page)) = &*data.read() {
            list.write().replace_page(page.clone());
        }
    });

    let mut set_filter = move |field: FilterField, value: String| {
        let href = sync.write().set_filter(field, value);
        push_href(&href);
    };

    let on_search = move |evt: FormEvent| {
        let ticket = sync.write().set_search(evt.value());
        spawn(async move {
            let settled = wait_for_search(move |t| sync.write().search_settled(t), ticket).await;
            if let Some(href) = settled {
                push_href(&href);
            }
        });
    };

    let on_reset = move |_: MouseEvent| {
        let href = sync.write().reset();
        push_href(&href);
    };

    let on_toggle = use_callback(move |id: String| {
        let Some(toggle) = list.write().begin_toggle(&id) else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = api.set_status(&toggle.id, toggle.status.clone()).await;
            if list.write().finish_toggle(&toggle, result) {
                data.restart();
            }
        });
    });

    let on_page = move |page: u32| {
        let href = page_href(LIST_PATH, sync.read().applied(), page);
        push_href(&href);
    };

    let current = sync.read().current().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./notices.css") }

        match &*data.read() {
            Some(Err(err)) if err.is_not_found() => rsx! { NotFoundView {} },
            Some(Err(err)) => rsx! {
                ErrorView {
                    title: "Error Loading Notices",
                    message: err.message.clone(),
                    on_retry: move |_| data.restart(),
                }
            },
            _ => rsx! {
                div { class: "container",
                    PageHeader {
                        div {
                            PageTitle { "Notice Management" }
                            PageSubtitle {
                                span { class: "count-active",
                                    strong { "Active Notices: " }
                                    "{list.read().total_count()}"
                                }
                                span { class: "count-published",
                                    strong { "Published: " }
                                    "{list.read().published_count()}"
                                }
                            }
                        }
                        PageActions {
                            Link { to: Route::CreateNotice {},
                                Button { variant: ButtonVariant::Primary,
                                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                                    "Create Notice"
                                }
                            }
                            Link { to: Route::drafts(),
                                Button { variant: ButtonVariant::Outline,
                                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                                    "Draft Notices"
                                }
                            }
                        }
                    }

                    FilterBar {
                        FilterItem {
                            FormSelect {
                                label: "Filter by:",
                                value: current.department.clone(),
                                placeholder: "Departments or individuals",
                                onchange: move |evt: FormEvent| set_filter(FilterField::Department, evt.value()),
                                for target in TARGET_OPTIONS.iter() {
                                    option { key: "{target.code()}", value: target.code(), "{target.label()}" }
                                }
                            }
                        }
                        FilterItem { grow: true,
                            Input {
                                value: current.search.clone(),
                                placeholder: "Employee Id or Name",
                                on_input: on_search,
                            }
                        }
                        FilterItem {
                            FormSelect {
                                value: current.status.clone(),
                                placeholder: "Status",
                                onchange: move |evt: FormEvent| set_filter(FilterField::Status, evt.value()),
                                option { value: NoticeStatus::Published.as_str().to_string(), "Published" }
                                option { value: NoticeStatus::Unpublished.as_str().to_string(), "Unpublished" }
                            }
                        }
                        FilterItem {
                            Input {
                                input_type: "date",
                                value: current.publish_date.clone(),
                                on_input: move |evt: FormEvent| set_filter(FilterField::PublishDate, evt.value()),
                            }
                        }
                        FilterItem {
                            Button { variant: ButtonVariant::Outline, onclick: on_reset, "Reset Filters" }
                        }
                    }

                    if data.read().is_none() {
                        Card { SkeletonRows { count: 6 } }
                    } else {
                        Card { flush: true,
                            NoticeTable {
                                list: list,
                                on_toggle: on_toggle,
                                on_view: detail.open,
                            }
                        }
                        if let Some(info) = list.read().pagination().cloned() {
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
fn NoticeTable(
    list: Signal<NoticeList>,
    on_toggle: Callback<String>,
    on_view: Callback<String>,
) -> Element {
    let notices: Vec<Notice> = list.read().notices().to_vec();
    let all_selected = {
        let list = list.read();
        list.rows().all_selected(list.ids())
    };

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn {
                    DataTableCheckbox {
                        checked: all_selected,
                        disabled: notices.is_empty(),
                        label: "Select all notices",
                        on_toggle: move |_| list.write().toggle_all(),
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
                    DataTableEmpty {
                        colspan: 7,
                        title: "No notices found",
                        hint: "Try adjusting your filters or create a new notice",
                    }
                }
                for notice in notices {
                    NoticeRow {
                        key: "{notice.id}",
                        notice: notice.clone(),
                        selected: list.read().rows().is_selected(&notice.id),
                        pending: list.read().rows().is_pending(&notice.id),
                        error: list.read().rows().error(&notice.id).map(str::to_string),
                        on_select: move |id: String| list.write().rows_mut().toggle_selected(&id),
                        on_dismiss: move |id: String| list.write().rows_mut().dismiss_error(&id),
                        on_toggle: on_toggle,
                        on_view: on_view,
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeRow(
    notice: Notice,
    selected: bool,
    pending: bool,
    error: Option<String>,
    on_select: EventHandler<String>,
    on_dismiss: EventHandler<String>,
    on_toggle: Callback<String>,
    on_view: Callback<String>,
) -> Element {
    let id = notice.id.clone();
    let (select_id, toggle_id, view_id, dismiss_id) = (id.clone(), id.clone(), id.clone(), id);
    let audience = notice.department_summary();
    let audience_code = notice.primary_target_code().unwrap_or_default().to_string();
    let published = notice.status == NoticeStatus::Published;
    let switch_label = if published { "Published" } else { "Unpublished" };

    rsx! {
        DataTableRow { selected: selected,
            DataTableCell {
                DataTableCheckbox {
                    checked: selected,
                    label: "Select notice",
                    on_toggle: move |_| on_select.call(select_id.clone()),
                }
            }
            DataTableCell { class: "notice-title", "{notice.notice_title}" }
            DataTableCell { class: "muted", "{notice.notice_type_name()}" }
            DataTableCell {
                span { class: "audience", "data-target": "{audience_code}", "{audience}" }
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
                        "aria-label": "View notice",
                        onclick: move |_| on_view.call(view_id.clone()),
                        Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                    }
                    if notice.status.toggled().is_some() {
                        LabeledSwitch {
                            checked: published,
                            label: switch_label,
                            busy: pending,
                            on_change: move |_| on_toggle.call(toggle_id.clone()),
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
