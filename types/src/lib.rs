//! Shared types for the article parameters panel
//!
//! Contains the option model, the five article settings fields, the article
//! state record and the built-in option catalog. Used by both the
//! framework-free core and the Dioxus frontend.

pub mod style;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// One selectable value/label pair within a field's fixed option set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleOption {
    /// Display label
    pub title: String,
    /// Unique within its option set
    pub value: String,
    /// Group tag used for rendering hints (font-family class, width class, ...)
    #[serde(default)]
    pub class_name: String,
    /// Extra class applied to the option row (color swatches)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_class_name: Option<String>,
}

impl ArticleOption {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            class_name: String::new(),
            option_class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_option_class(mut self, option_class_name: impl Into<String>) -> Self {
        self.option_class_name = Some(option_class_name.into());
        self
    }

    /// Options are identified by value, never by label.
    pub fn same_value(&self, other: &ArticleOption) -> bool {
        self.value == other.value
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fields
// ─────────────────────────────────────────────────────────────────────────────

/// How a field is rendered in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Closed-by-default single select
    Dropdown { hide_selected: bool },
    /// Always-visible single select
    Radio,
}

/// The five article settings fields, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl FieldId {
    /// All fields in the order the panel renders them
    pub fn all() -> &'static [FieldId] {
        &[
            FieldId::FontFamily,
            FieldId::FontSize,
            FieldId::FontColor,
            FieldId::BackgroundColor,
            FieldId::ContentWidth,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FontFamily => "Font",
            FieldId::FontSize => "Font size",
            FieldId::FontColor => "Font color",
            FieldId::BackgroundColor => "Background color",
            FieldId::ContentWidth => "Content width",
        }
    }

    /// Key used in catalog files and form control names
    pub fn config_key(&self) -> &'static str {
        match self {
            FieldId::FontFamily => "font_family",
            FieldId::FontSize => "font_size",
            FieldId::FontColor => "font_color",
            FieldId::BackgroundColor => "background_color",
            FieldId::ContentWidth => "content_width",
        }
    }

    pub fn control(&self) -> ControlKind {
        match self {
            FieldId::FontSize => ControlKind::Radio,
            // Re-selecting the same family or width is meaningless
            FieldId::FontFamily | FieldId::ContentWidth => {
                ControlKind::Dropdown { hide_selected: true }
            }
            FieldId::FontColor | FieldId::BackgroundColor => {
                ControlKind::Dropdown { hide_selected: false }
            }
        }
    }

    /// Color fields show a swatch next to the selected label
    pub fn is_color(&self) -> bool {
        matches!(self, FieldId::FontColor | FieldId::BackgroundColor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Article State
// ─────────────────────────────────────────────────────────────────────────────

/// The applied (or draft) article display parameters.
///
/// Every field must hold a member of that field's option set. The record never
/// holds loose strings, only options taken from an [`OptionCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleState {
    pub font_family: ArticleOption,
    pub font_size: ArticleOption,
    pub font_color: ArticleOption,
    pub background_color: ArticleOption,
    pub content_width: ArticleOption,
}

impl ArticleState {
    pub fn get(&self, field: FieldId) -> &ArticleOption {
        match field {
            FieldId::FontFamily => &self.font_family,
            FieldId::FontSize => &self.font_size,
            FieldId::FontColor => &self.font_color,
            FieldId::BackgroundColor => &self.background_color,
            FieldId::ContentWidth => &self.content_width,
        }
    }

    pub fn set(&mut self, field: FieldId, option: ArticleOption) {
        let slot = match field {
            FieldId::FontFamily => &mut self.font_family,
            FieldId::FontSize => &mut self.font_size,
            FieldId::FontColor => &mut self.font_color,
            FieldId::BackgroundColor => &mut self.background_color,
            FieldId::ContentWidth => &mut self.content_width,
        };
        *slot = option;
    }

    /// Copy of this state with one field replaced
    pub fn with(mut self, field: FieldId, option: ArticleOption) -> Self {
        self.set(field, option);
        self
    }
}

impl Default for ArticleState {
    fn default() -> Self {
        OptionCatalog::builtin().defaults
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Option Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Font-family classes understood by the text primitive
pub const FONT_FAMILY_CLASSES: &[&str] = &[
    "open-sans",
    "ubuntu",
    "cormorant-garamond",
    "days-one",
    "merriweather",
];

/// The five ordered option sets plus the reset defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCatalog {
    pub font_family: Vec<ArticleOption>,
    pub font_size: Vec<ArticleOption>,
    pub font_color: Vec<ArticleOption>,
    pub background_color: Vec<ArticleOption>,
    pub content_width: Vec<ArticleOption>,
    pub defaults: ArticleState,
}

impl OptionCatalog {
    pub fn options(&self, field: FieldId) -> &[ArticleOption] {
        match field {
            FieldId::FontFamily => &self.font_family,
            FieldId::FontSize => &self.font_size,
            FieldId::FontColor => &self.font_color,
            FieldId::BackgroundColor => &self.background_color,
            FieldId::ContentWidth => &self.content_width,
        }
    }

    /// Whether `option` is a member of the field's set (matched by value)
    pub fn contains(&self, field: FieldId, option: &ArticleOption) -> bool {
        self.options(field).iter().any(|o| o.same_value(option))
    }

    /// Look up a field option by value
    pub fn find(&self, field: FieldId, value: &str) -> Option<&ArticleOption> {
        self.options(field).iter().find(|o| o.value == value)
    }

    /// Compiled-in option sets
    pub fn builtin() -> Self {
        let font_family: Vec<ArticleOption> = [
            ("Open Sans", "Open Sans"),
            ("Ubuntu", "Ubuntu"),
            ("Cormorant Garamond", "Cormorant Garamond"),
            ("Days One", "Days One"),
            ("Merriweather", "Merriweather"),
        ]
        .iter()
        .zip(FONT_FAMILY_CLASSES)
        .map(|((title, value), class)| ArticleOption::new(*title, *value).with_class(*class))
        .collect();

        let font_size: Vec<ArticleOption> = ["18px", "25px", "38px"]
            .iter()
            .map(|size| {
                ArticleOption::new(*size, *size)
                    .with_class(format!("font-size-{}", size.trim_end_matches("px")))
            })
            .collect();

        let font_color = color_set(
            "font",
            &[
                ("Black", "#000000", "black"),
                ("White", "#FFFFFF", "white"),
                ("Gray", "#C4C4C4", "gray"),
                ("Pink", "#FEAFE8", "pink"),
                ("Fuchsia", "#FD24AF", "fuchsia"),
                ("Yellow", "#FFC802", "yellow"),
                ("Green", "#80D994", "green"),
                ("Blue", "#6FC1FD", "blue"),
                ("Purple", "#5F2AFF", "purple"),
            ],
        );

        let background_color = color_set(
            "bg",
            &[
                ("White", "#FFFFFF", "white"),
                ("Black", "#000000", "black"),
                ("Gray", "#C4C4C4", "gray"),
                ("Pink", "#FFC9F1", "pink"),
                ("Fuchsia", "#FEAFE8", "fuchsia"),
                ("Yellow", "#FFF3C0", "yellow"),
                ("Green", "#E9F9ED", "green"),
                ("Blue", "#E7F4FE", "blue"),
                ("Purple", "#DBCFFE", "purple"),
            ],
        );

        let content_width = vec![
            ArticleOption::new("Wide", "1394px")
                .with_class("width-wide")
                .with_option_class("option-wide"),
            ArticleOption::new("Narrow", "948px")
                .with_class("width-narrow")
                .with_option_class("option-narrow"),
        ];

        let defaults = ArticleState {
            font_family: font_family[0].clone(),
            font_size: font_size[0].clone(),
            font_color: font_color[0].clone(),
            background_color: background_color[0].clone(),
            content_width: content_width[0].clone(),
        };

        Self {
            font_family,
            font_size,
            font_color,
            background_color,
            content_width,
            defaults,
        }
    }
}

fn color_set(prefix: &str, colors: &[(&str, &str, &str)]) -> Vec<ArticleOption> {
    colors
        .iter()
        .map(|(title, hex, name)| {
            ArticleOption::new(*title, *hex)
                .with_class(format!("{prefix}-{name}"))
                .with_option_class(format!("option-{name}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults_are_first_options() {
        let catalog = OptionCatalog::builtin();
        for field in FieldId::all() {
            assert_eq!(catalog.defaults.get(*field), &catalog.options(*field)[0]);
        }
        assert_eq!(catalog.defaults.font_size.value, "18px");
        assert_eq!(catalog.defaults.background_color.value, "#FFFFFF");
    }

    #[test]
    fn test_builtin_set_sizes() {
        let catalog = OptionCatalog::builtin();
        assert_eq!(catalog.font_family.len(), 5);
        assert_eq!(catalog.font_size.len(), 3);
        assert_eq!(catalog.font_color.len(), 9);
        assert_eq!(catalog.background_color.len(), 9);
        assert_eq!(catalog.content_width.len(), 2);
    }

    #[test]
    fn test_contains_matches_by_value() {
        let catalog = OptionCatalog::builtin();
        let relabelled = ArticleOption::new("Huge", "25px");
        assert!(catalog.contains(FieldId::FontSize, &relabelled));
        assert!(!catalog.contains(FieldId::FontSize, &ArticleOption::new("14", "14px")));
        // Same value in another field's set does not count
        assert!(!catalog.contains(FieldId::FontColor, &ArticleOption::new("x", "25px")));
    }

    #[test]
    fn test_with_replaces_single_field() {
        let catalog = OptionCatalog::builtin();
        let big = catalog.find(FieldId::FontSize, "38px").unwrap().clone();
        let state = catalog.defaults.clone().with(FieldId::FontSize, big.clone());

        assert_eq!(state.font_size, big);
        assert_eq!(state.font_family, catalog.defaults.font_family);
        assert_eq!(state.content_width, catalog.defaults.content_width);
    }

    #[test]
    fn test_control_kinds() {
        assert_eq!(FieldId::FontSize.control(), ControlKind::Radio);
        assert_eq!(
            FieldId::FontFamily.control(),
            ControlKind::Dropdown { hide_selected: true }
        );
        assert_eq!(
            FieldId::FontColor.control(),
            ControlKind::Dropdown { hide_selected: false }
        );
        assert!(FieldId::BackgroundColor.is_color());
        assert!(!FieldId::ContentWidth.is_color());
    }

    #[test]
    fn test_state_toml_roundtrip_keys() {
        let state = OptionCatalog::builtin().defaults;
        let text = toml::to_string(&state).unwrap();
        assert!(text.contains("[font_family]"));
        assert!(text.contains("[content_width]"));
        let parsed: ArticleState = toml::from_str(&text).unwrap();
        assert_eq!(parsed, state);
    }
}
