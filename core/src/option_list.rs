//! Option list selection contract
//!
//! Stateless: lists options in order with exactly one marked selected, and turns
//! pointer or Enter activation into a single `on_select` call. State belongs to
//! the caller.

use article_params_types::ArticleOption;

/// One rendered row of an option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionItem<'a> {
    pub option: &'a ArticleOption,
    pub selected: bool,
}

/// Keys an option row reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Other,
}

/// How the user activated an option row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    Key(ActivationKey),
}

impl Activation {
    /// Enter is equivalent to a click; other keys are ignored
    pub fn triggers_select(&self) -> bool {
        matches!(self, Activation::Pointer | Activation::Key(ActivationKey::Enter))
    }
}

/// Rows for `options` in their given order.
///
/// A row is selected when its value equals the selected option's value.
pub fn option_items<'a>(
    options: &'a [ArticleOption],
    selected: Option<&ArticleOption>,
) -> Vec<OptionItem<'a>> {
    options
        .iter()
        .map(|option| OptionItem {
            option,
            selected: selected.is_some_and(|s| s.same_value(option)),
        })
        .collect()
}

/// Forward an activation to `on_select`. Returns whether it was forwarded.
pub fn activate(
    option: &ArticleOption,
    activation: Activation,
    on_select: impl FnOnce(&ArticleOption),
) -> bool {
    if !activation.triggers_select() {
        return false;
    }
    on_select(option);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use article_params_types::{FieldId, OptionCatalog};

    #[test]
    fn test_items_keep_order_and_mark_one() {
        let catalog = OptionCatalog::builtin();
        let options = catalog.options(FieldId::FontColor);
        let selected = &options[4];

        let items = option_items(options, Some(selected));
        assert_eq!(items.len(), options.len());
        for (item, option) in items.iter().zip(options) {
            assert_eq!(item.option, option);
        }
        let marked: Vec<_> = items.iter().filter(|i| i.selected).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].option.value, selected.value);
    }

    #[test]
    fn test_items_without_selection() {
        let catalog = OptionCatalog::builtin();
        let items = option_items(catalog.options(FieldId::FontSize), None);
        assert!(items.iter().all(|i| !i.selected));
    }

    #[test]
    fn test_selection_matches_by_value() {
        let catalog = OptionCatalog::builtin();
        let relabelled = ArticleOption::new("Big", "38px");
        let items = option_items(catalog.options(FieldId::FontSize), Some(&relabelled));
        assert!(items[2].selected);
    }

    #[test]
    fn test_activation_forwards_exactly_once() {
        let option = ArticleOption::new("Ubuntu", "Ubuntu");
        let mut calls = Vec::new();

        assert!(activate(&option, Activation::Pointer, |o| calls.push(o.value.clone())));
        assert!(activate(&option, Activation::Key(ActivationKey::Enter), |o| {
            calls.push(o.value.clone())
        }));
        assert!(!activate(&option, Activation::Key(ActivationKey::Other), |o| {
            calls.push(o.value.clone())
        }));

        assert_eq!(calls, vec!["Ubuntu", "Ubuntu"]);
    }
}
