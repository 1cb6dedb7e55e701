//! Animated modal overlay.
//!
//! Visibility is owned by the caller through `show`. The overlay keeps its
//! content mounted while it animates out and only removes it once the exit
//! has finished, so `show` going false never cuts the content off mid-frame.

use crate::constants::{OVERLAY_CLASS, OVERLAY_CONTENT_CLASS, SHELL_CONFIG};
use crate::util::{frame_driver, DelayTimer};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use shellkit_core::overlay::{FrameDriver, OverlayController, OverlaySnapshot};
use std::rc::Rc;

type BrowserOverlay = OverlayController<FrameDriver<DelayTimer>, DelayTimer>;

#[component]
pub fn ModalOverlay(
    show: bool,
    #[props(into)] class: Option<String>,
    children: Element,
) -> Element {
    let snapshot = use_signal(|| OverlaySnapshot::hidden(&SHELL_CONFIG.overlay));

    let controller: Rc<BrowserOverlay> = use_hook(|| {
        let config = SHELL_CONFIG.overlay.clone();
        let driver = frame_driver(config.frame_interval());
        let controller = Rc::new(OverlayController::new(config, driver, DelayTimer));
        controller.on_change(move |next| {
            let mut snapshot = snapshot;
            snapshot.set(next);
        });
        controller
    });

    use_effect(use_reactive((&show,), {
        let controller = controller.clone();
        move |(show,)| {
            debug!("Modal overlay show={}", show);
            controller.set_visible(show);
        }
    }));

    use_drop(move || controller.teardown());

    let current = snapshot();
    if !current.is_mounted() {
        return rsx! {};
    }

    let content_class = match class {
        Some(extra) if !extra.is_empty() => format!("{} {}", OVERLAY_CONTENT_CLASS, extra),
        _ => OVERLAY_CONTENT_CLASS.to_string(),
    };
    let phase = current.phase;
    let busy = if current.is_animating() { "true" } else { "false" };
    let backdrop_style = format!("opacity: {:.3};", current.pose.opacity);
    let content_style = current.pose.to_css();

    rsx! {
        div {
            class: OVERLAY_CLASS,
            "data-phase": "{phase}",
            style: "{backdrop_style}",
            div {
                class: "{content_class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-busy": "{busy}",
                style: "{content_style}",
                {children}
            }
        }
    }
}
