//! Structural loading placeholder.

use dioxus::prelude::*;

/// Placeholder with the same row/column geometry as the table it stands in
/// for, shown during a list's first load so the layout does not jump when
/// real rows arrive.
#[component]
pub fn SkeletonTable(
    #[props(default = 5)] rows: usize,
    #[props(default = 4)] columns: usize,
) -> Element {
    rsx! {
        div {
            class: "skeleton-table",
            for _ in 0..rows {
                div {
                    class: "skeleton-row",
                    for _ in 0..columns {
                        div { class: "skeleton-cell" }
                    }
                }
            }
        }
    }
}
