//! Panel action button

use dioxus::prelude::*;

use super::Text;

/// Visual variant of a panel button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Apply,
    Clear,
}

impl ButtonKind {
    fn class(&self) -> &'static str {
        match self {
            ButtonKind::Apply => "button button-apply",
            ButtonKind::Clear => "button button-clear",
        }
    }
}

/// Clickable label that forwards activation.
///
/// With `submit` set the button submits its form instead of only calling
/// `on_click`.
#[component]
pub fn Button(
    title: String,
    kind: ButtonKind,
    #[props(default = false)] submit: bool,
    #[props(default)] on_click: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: kind.class(),
            r#type: if submit { "submit" } else { "button" },
            onclick: move |e| on_click.call(e),
            Text { weight: 800, uppercase: true, "{title}" }
        }
    }
}
