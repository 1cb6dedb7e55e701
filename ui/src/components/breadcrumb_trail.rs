use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaChevronRight;
use dioxus_free_icons::Icon;
use shellkit_core::breadcrumb::{segments, BreadcrumbItem, Segment};

/// Horizontal trail of labels separated by chevrons.
///
/// Crumbs are keyed by title; callers are expected to keep titles unique.
/// The `url` of each item is not used for navigation.
#[component]
pub fn BreadcrumbTrail(paths: Vec<BreadcrumbItem>) -> Element {
    rsx! {
        nav { class: "shell-breadcrumb", "aria-label": "Breadcrumb",
            {segments(&paths).map(|segment| match segment {
                Segment::Crumb(item) => {
                    let title = &item.title;
                    rsx! {
                        button {
                            key: "{title}",
                            class: "shell-breadcrumb-item",
                            r#type: "button",
                            "{title}"
                        }
                    }
                }
                Segment::Separator { after } => rsx! {
                    span {
                        key: "{after}-separator",
                        class: "shell-breadcrumb-separator",
                        "aria-hidden": "true",
                        Icon { width: 10, height: 10, icon: FaChevronRight }
                    }
                },
            })}
        }
    }
}
