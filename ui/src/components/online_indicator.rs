use crate::connectivity::use_online;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaWifi};
use dioxus_free_icons::Icon;

/// Small badge reflecting the shared connectivity store.
#[component]
pub fn OnlineIndicator() -> Element {
    let online = use_online();

    if online() {
        rsx! {
            span {
                class: "shell-online-indicator is-online",
                title: "Online",
                Icon { icon: FaWifi, width: 14, height: 14 }
            }
        }
    } else {
        rsx! {
            span {
                class: "shell-online-indicator is-offline",
                title: "Offline",
                Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                span { "Offline" }
            }
        }
    }
}
