use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// Tone of an inline banner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Error,
    Info,
    Success,
}

impl AlertVariant {
    pub fn class(&self) -> &'static str {
        match self {
            AlertVariant::Error => "error",
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
        }
    }
}

/// Inline message banner. A dismiss button is shown when `on_dismiss` is set.
#[component]
pub fn AlertBanner(
    message: String,
    #[props(default)] variant: AlertVariant,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("role", "alert", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            p { class: "alert-message", "{message}" }
            if let Some(handler) = on_dismiss {
                button {
                    class: "alert-dismiss",
                    r#type: "button",
                    "aria-label": "Dismiss",
                    onclick: move |_| handler.call(()),
                    Icon { icon: LdX, width: 14, height: 14 }
                }
            }
        }
    }
}
