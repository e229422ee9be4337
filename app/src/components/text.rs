//! Text rendering primitive

use article_params_types::style::{class_list, is_font_family_class};
use dioxus::prelude::*;

/// Styled text run. Pure display, no state.
///
/// `family` is only applied when it names a known font-family class.
#[component]
pub fn Text(
    children: Element,
    #[props(default = 18)] size: u32,
    #[props(default = 400)] weight: u32,
    #[props(default = false)] uppercase: bool,
    #[props(default = "left")] align: &'static str,
    #[props(default)] family: String,
    #[props(default = false)] heading: bool,
) -> Element {
    let family_class = if is_font_family_class(Some(&family)) {
        family.as_str()
    } else {
        ""
    };
    let size_class = format!("text-size-{size}");
    let weight_class = format!("text-weight-{weight}");
    let align_class = format!("text-align-{align}");
    let class = class_list(&[
        "text",
        size_class.as_str(),
        weight_class.as_str(),
        align_class.as_str(),
        if uppercase { "text-uppercase" } else { "" },
        family_class,
    ]);

    if heading {
        rsx! { h2 { class, {children} } }
    } else {
        rsx! { div { class, {children} } }
    }
}
