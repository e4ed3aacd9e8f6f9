use dioxus::prelude::*;

/// Native `<select>` with a label and an inline error slot.
///
/// Children should be `option { value: "...", "Label" }` elements. When
/// `placeholder` is set, an empty-valued first option is rendered for it.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    /// Validation message shown under the select.
    #[props(default)]
    error: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let invalid = error.is_some();
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label",
                    "{label}"
                    if required {
                        span { class: "required-mark", " *" }
                    }
                }
            }
            select {
                value: value,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                ..merged,
                if !placeholder.is_empty() {
                    option { value: "", "{placeholder}" }
                }
                {children}
            }
            if let Some(message) = error {
                p { class: "form-select-error", "{message}" }
            }
        }
    }
}
