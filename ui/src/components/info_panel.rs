use dioxus::prelude::*;

/// Titled panel with an optional leading icon and optional side content.
#[component]
pub fn InfoPanel(
    #[props(into)] title: String,
    icon: Option<Element>,
    side: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "shell-info-panel",
            header { class: "shell-info-panel-header",
                if let Some(icon) = icon {
                    span { class: "shell-info-panel-icon", {icon} }
                }
                h2 { class: "shell-info-panel-title", "{title}" }
            }
            div { class: "shell-info-panel-body",
                div { class: "shell-info-panel-main", {children} }
                if let Some(side) = side {
                    aside { class: "shell-info-panel-side", {side} }
                }
            }
        }
    }
}
