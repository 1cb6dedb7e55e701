use super::{
    breadcrumb_trail::BreadcrumbTrail, info_panel::InfoPanel, modal_overlay::ModalOverlay,
    online_indicator::OnlineIndicator, toggle_control::ToggleControl,
};
use crate::connectivity::use_connectivity_provider;
use crate::constants::SHELL_CONFIG;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleInfo, FaGear};
use dioxus_free_icons::Icon;
use document::Stylesheet;
use shellkit_core::breadcrumb::BreadcrumbItem;
use shellkit_core::ConnectivityStore;

/// Whether the settings overlay is requested. Owned by the shell, not by the
/// overlay.
pub static SETTINGS_OVERLAY: GlobalSignal<bool> = Global::new(|| cfg!(feature = "demo-open"));

#[component]
pub fn App() -> Element {
    info!("App component loaded");

    use_connectivity_provider(|| ConnectivityStore::with_config(&SHELL_CONFIG.connectivity));

    let mut notifications = use_signal(|| true);
    let paths = use_signal(|| {
        vec![
            BreadcrumbItem::new("Workspace", "/"),
            BreadcrumbItem::new("Settings", "/settings"),
            BreadcrumbItem::new("Notifications", "/settings/notifications"),
        ]
    });

    rsx! {
        Stylesheet { href: asset!("/assets/main.css") }

        div { class: "shell",
            header { class: "shell-header",
                BreadcrumbTrail { paths: paths() }
                OnlineIndicator {}
            }

            main { class: "shell-main",
                InfoPanel {
                    title: "Notifications",
                    icon: rsx! { Icon { width: 18, height: 18, icon: FaCircleInfo } },
                    side: rsx! {
                        button {
                            class: "shell-button",
                            r#type: "button",
                            title: "Open settings",
                            onclick: move |_| {
                                *SETTINGS_OVERLAY.write() = true;
                            },
                            Icon { width: 14, height: 14, icon: FaGear }
                            span { "Settings" }
                        }
                    },
                    p { "Desktop notifications for new activity." }
                    ToggleControl {
                        value: notifications(),
                        on_change: move |value| notifications.set(value),
                        active_tooltip: "Turn notifications off",
                        inactive_tooltip: "Turn notifications on",
                    }
                }
            }
        }

        ModalOverlay {
            show: *SETTINGS_OVERLAY.read(),
            class: "shell-settings",
            h2 { class: "shell-overlay-title", "Settings" }
            p { "Notifications are currently "
                if notifications() { "on" } else { "off" }
                "."
            }
            ToggleControl {
                value: notifications(),
                on_change: move |value| notifications.set(value),
                disabled: true,
                active_tooltip: "Change this from the notifications panel",
                inactive_tooltip: "Change this from the notifications panel",
            }
            button {
                class: "shell-button",
                r#type: "button",
                onclick: move |_| {
                    *SETTINGS_OVERLAY.write() = false;
                },
                "Close"
            }
        }
    }
}
