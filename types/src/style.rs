//! Rendering hints derived from options and article state.
//!
//! All the places that turn an option into a CSS class or custom property go
//! through this module so the panel, its dropdowns and the article preview agree.

use crate::{ArticleState, FONT_FAMILY_CLASSES};

/// Whether a class name is one of the known font-family classes.
///
/// Only font-family classes are forwarded to the text primitive as a family.
///
/// # Examples
/// ```
/// use article_params_types::style::is_font_family_class;
/// assert!(is_font_family_class(Some("days-one")));
/// assert!(!is_font_family_class(Some("width-wide")));
/// assert!(!is_font_family_class(None));
/// ```
pub fn is_font_family_class(class_name: Option<&str>) -> bool {
    class_name.is_some_and(|c| FONT_FAMILY_CLASSES.contains(&c))
}

/// CSS custom properties the article preview reads.
///
/// Returned in a fixed order: family, size, color, width, background.
pub fn css_variables(state: &ArticleState) -> Vec<(&'static str, String)> {
    vec![
        ("--font-family", state.font_family.value.clone()),
        ("--font-size", state.font_size.value.clone()),
        ("--font-color", state.font_color.value.clone()),
        ("--container-width", state.content_width.value.clone()),
        ("--bg-color", state.background_color.value.clone()),
    ]
}

/// Render [`css_variables`] as an inline `style` attribute value.
///
/// # Examples
/// ```
/// use article_params_types::{style::inline_style, OptionCatalog};
/// let style = inline_style(&OptionCatalog::builtin().defaults);
/// assert!(style.starts_with("--font-family: Open Sans;"));
/// assert!(style.ends_with("--bg-color: #FFFFFF;"));
/// ```
pub fn inline_style(state: &ArticleState) -> String {
    css_variables(state)
        .into_iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join class names, skipping empty ones.
///
/// # Examples
/// ```
/// use article_params_types::style::class_list;
/// assert_eq!(class_list(&["select", "", "open"]), "select open");
/// assert_eq!(class_list(&[]), "");
/// ```
pub fn class_list(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
