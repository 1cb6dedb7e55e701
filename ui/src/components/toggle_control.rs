use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaToggleOff, FaToggleOn};
use dioxus_free_icons::Icon;
use shellkit_core::toggle::ToggleModel;

/// Props for the toggle switch
#[derive(Props, Clone, PartialEq)]
pub struct ToggleControlProps {
    /// Current state of the switch
    pub value: bool,
    /// Called with the negated value when the switch is clicked
    pub on_change: EventHandler<bool>,
    /// Tooltip shown while the switch is on
    #[props(into)]
    pub active_tooltip: Option<String>,
    /// Tooltip shown while the switch is off
    #[props(into)]
    pub inactive_tooltip: Option<String>,
    #[props(default)]
    pub disabled: bool,
}

#[component]
pub fn ToggleControl(props: ToggleControlProps) -> Element {
    let model = ToggleModel::new(props.value, props.disabled);
    let tooltip = model
        .tooltip(props.active_tooltip.as_deref(), props.inactive_tooltip.as_deref())
        .unwrap_or_default()
        .to_string();
    let on_change = props.on_change;

    rsx! {
        button {
            class: format_args!(
                "shell-toggle {} {}",
                if model.value { "is-on" } else { "is-off" },
                if model.disabled { "is-disabled" } else { "" }
            ),
            r#type: "button",
            role: "switch",
            title: "{tooltip}",
            disabled: model.disabled,
            "aria-checked": if model.value { "true" } else { "false" },
            onclick: move |_| {
                if let Some(next) = model.click() {
                    on_change.call(next);
                }
            },
            if model.value {
                Icon { width: 28, height: 28, icon: FaToggleOn }
            } else {
                Icon { width: 28, height: 28, icon: FaToggleOff }
            }
        }
    }
}
