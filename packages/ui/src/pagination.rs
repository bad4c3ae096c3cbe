//! Page-navigation controls.

use dioxus::prelude::*;
use store::PageControls;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Prev/next buttons plus the "x of y" indicator.
///
/// Enablement comes entirely from [`store::Paged::controls`]; this component
/// adds no logic of its own.
#[component]
pub fn Pagination(
    controls: PageControls,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "pagination",
            button {
                class: "pagination-btn",
                disabled: controls.prev_disabled,
                onclick: move |_| on_prev.call(()),
                Icon { icon: FaChevronLeft, width: 12, height: 12 }
                " Prev"
            }
            span {
                class: "pagination-indicator",
                "{controls.indicator}"
            }
            button {
                class: "pagination-btn",
                disabled: controls.next_disabled,
                onclick: move |_| on_next.call(()),
                "Next "
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
        }
    }
}
