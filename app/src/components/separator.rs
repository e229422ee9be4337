use dioxus::prelude::*;

#[component]
pub fn Separator(#[props(default)] class: String) -> Element {
    rsx! {
        div { class: "separator {class}" }
    }
}
