//! Always-visible single select

use article_params_types::ArticleOption;

use crate::option_list::{Activation, OptionItem, activate, option_items};

/// Radio group over one field's options. Has no open state.
#[derive(Debug, Clone, Copy)]
pub struct RadioGroup<'a> {
    options: &'a [ArticleOption],
    selected: Option<&'a ArticleOption>,
}

impl<'a> RadioGroup<'a> {
    pub fn new(options: &'a [ArticleOption], selected: Option<&'a ArticleOption>) -> Self {
        Self { options, selected }
    }

    pub fn items(&self) -> Vec<OptionItem<'a>> {
        option_items(self.options, self.selected)
    }

    /// Forward an activation straight to `on_change`.
    ///
    /// Options outside the group are ignored.
    pub fn activate(
        &self,
        option: &ArticleOption,
        activation: Activation,
        on_change: impl FnOnce(&ArticleOption),
    ) -> bool {
        if !self.options.iter().any(|o| o.same_value(option)) {
            tracing::warn!(value = %option.value, "Activation for an option outside the radio group");
            return false;
        }
        activate(option, activation, on_change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_list::ActivationKey;
    use article_params_types::{FieldId, OptionCatalog};

    #[test]
    fn test_all_options_always_visible() {
        let catalog = OptionCatalog::builtin();
        let options = catalog.options(FieldId::FontSize);
        let group = RadioGroup::new(options, Some(&options[2]));

        let items = group.items();
        assert_eq!(items.len(), 3);
        assert!(items[2].selected);
        assert!(!items[0].selected);
    }

    #[test]
    fn test_activation_changes_immediately() {
        let catalog = OptionCatalog::builtin();
        let options = catalog.options(FieldId::FontSize);
        let group = RadioGroup::new(options, Some(&options[0]));

        let mut changed = Vec::new();
        group.activate(&options[1], Activation::Pointer, |o| changed.push(o.value.clone()));
        group.activate(&options[2], Activation::Key(ActivationKey::Enter), |o| {
            changed.push(o.value.clone())
        });
        group.activate(&options[0], Activation::Key(ActivationKey::Other), |o| {
            changed.push(o.value.clone())
        });

        assert_eq!(changed, vec!["25px", "38px"]);
    }

    #[test]
    fn test_one_pointer_activation_changes_once() {
        let catalog = OptionCatalog::builtin();
        let options = catalog.options(FieldId::FontSize);
        let group = RadioGroup::new(options, Some(&options[0]));

        let mut calls = 0;
        assert!(group.activate(&options[1], Activation::Pointer, |_| calls += 1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_foreign_option_is_ignored() {
        let catalog = OptionCatalog::builtin();
        let group = RadioGroup::new(catalog.options(FieldId::FontSize), None);
        let width = &catalog.options(FieldId::ContentWidth)[0];

        let mut changed = false;
        assert!(!group.activate(width, Activation::Pointer, |_| changed = true));
        assert!(!changed);
    }
}
