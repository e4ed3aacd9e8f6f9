use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        th {
            ..attributes,
            {children}
        }
    }
}

/// Table row. Selected rows get a highlighted background.
#[component]
pub fn DataTableRow(
    #[props(default = false)] selected: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            "data-selected": if selected { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        td {
            ..attributes,
            {children}
        }
    }
}

/// Row or header selection checkbox. Clicks do not bubble to the row.
#[component]
pub fn DataTableCheckbox(
    checked: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] label: String,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        input {
            class: "data-table-checkbox",
            r#type: "checkbox",
            checked: checked,
            disabled: disabled,
            "aria-label": "{label}",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            onchange: move |_| on_toggle.call(()),
        }
    }
}

/// Full-width placeholder row for an empty result set.
#[component]
pub fn DataTableEmpty(
    colspan: u32,
    title: String,
    #[props(default)] hint: String,
) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}",
                p { class: "data-table-empty-title", "{title}" }
                if !hint.is_empty() {
                    p { class: "data-table-empty-hint", "{hint}" }
                }
            }
        }
    }
}
