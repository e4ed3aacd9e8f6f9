use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Switch with a trailing text label, used for per-row status toggles.
///
/// `busy` disables the control while a change is being saved.
#[component]
pub fn LabeledSwitch(
    checked: bool,
    label: String,
    #[props(default = false)] busy: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "labeled-switch", "data-busy": if busy { "true" } else { "false" },
            Switch {
                checked: Some(checked),
                disabled: busy,
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb {}
            }
            span { class: "labeled-switch-text", "{label}" }
        }
    }
}
