//! Panel open/close arrow

use dioxus::prelude::*;

/// Directional indicator that forwards clicks. Never owns the open flag.
#[component]
pub fn ArrowButton(is_open: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: if is_open { "arrow-button arrow-button-open" } else { "arrow-button" },
            role: "button",
            tabindex: 0,
            aria_label: if is_open { "Close the parameters panel" } else { "Open the parameters panel" },
            onclick: move |_| on_click.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    on_click.call(());
                }
            },
            i { class: "fa-solid fa-chevron-right arrow-icon" }
        }
    }
}
