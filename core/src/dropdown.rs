//! Dropdown selection control
//!
//! Closed-by-default single select. Transitions:
//!
//! ```text
//!   Closed ──header──► Open ──header──► Closed
//!                       │
//!                       ├──outside click──► Closed   (no selection)
//!                       └──option────────► Closed   (on_change(option) first)
//! ```
//!
//! Closing never forwards a selection; selecting always closes.

use article_params_types::ArticleOption;

use crate::open_state::OpenState;
use crate::option_list::{Activation, OptionItem, option_items};

/// Events returned from dropdown input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Header opened the list
    Opened,
    /// Header closed the list
    Closed,
    /// Outside click closed the list
    Dismissed,
    /// An option was picked and the list closed
    Selected(ArticleOption),
}

/// State for a dropdown control
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    open: OpenState,
    /// Leave the current selection out of the open list
    pub hide_selected: bool,
}

impl DropdownState {
    /// Dropdown that owns its open flag, initially closed
    pub fn new(hide_selected: bool) -> Self {
        Self {
            open: OpenState::local(),
            hide_selected,
        }
    }

    /// Dropdown whose open flag is owned elsewhere
    pub fn with_open_state(open: OpenState, hide_selected: bool) -> Self {
        Self { open, hide_selected }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    pub fn open_state(&self) -> &OpenState {
        &self.open
    }

    /// Header activated
    pub fn toggle(&mut self) -> DropdownEvent {
        if self.is_open() {
            self.open.request(false);
            DropdownEvent::Closed
        } else {
            self.open.request(true);
            DropdownEvent::Opened
        }
    }

    /// Outside click while open
    pub fn dismiss(&mut self) -> Option<DropdownEvent> {
        if !self.is_open() {
            return None;
        }
        self.open.request(false);
        Some(DropdownEvent::Dismissed)
    }

    /// An option was activated in the open list.
    ///
    /// `on_change` sees the option before the dropdown closes.
    pub fn select(
        &mut self,
        option: &ArticleOption,
        on_change: impl FnOnce(&ArticleOption),
    ) -> DropdownEvent {
        on_change(option);
        if self.is_open() {
            self.open.request(false);
        }
        DropdownEvent::Selected(option.clone())
    }

    /// Row activation from the option list; ignores keys other than Enter
    pub fn activate(
        &mut self,
        option: &ArticleOption,
        activation: Activation,
        on_change: impl FnOnce(&ArticleOption),
    ) -> Option<DropdownEvent> {
        if !activation.triggers_select() {
            return None;
        }
        Some(self.select(option, on_change))
    }

    /// Options listed while open
    pub fn visible_options<'a>(
        &self,
        options: &'a [ArticleOption],
        selected: Option<&ArticleOption>,
    ) -> Vec<&'a ArticleOption> {
        options
            .iter()
            .filter(|o| !(self.hide_selected && selected.is_some_and(|s| s.same_value(o))))
            .collect()
    }

    /// Rows for the open list, honoring `hide_selected`
    pub fn items<'a>(
        &self,
        options: &'a [ArticleOption],
        selected: Option<&ArticleOption>,
    ) -> Vec<OptionItem<'a>> {
        option_items(options, selected)
            .into_iter()
            .filter(|item| !(self.hide_selected && item.selected))
            .collect()
    }
}

/// Label shown on the closed header
pub fn header_label<'a>(selected: Option<&'a ArticleOption>, placeholder: &'a str) -> &'a str {
    match selected {
        Some(option) if !option.title.is_empty() => &option.title,
        _ => placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_list::ActivationKey;
    use article_params_types::{FieldId, OptionCatalog};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_starts_closed() {
        assert!(!DropdownState::new(false).is_open());
    }

    #[test]
    fn test_select_forwards_once_and_closes() {
        let catalog = OptionCatalog::builtin();
        let pick = &catalog.font_color[3];
        let mut dropdown = DropdownState::new(false);
        dropdown.toggle();

        let mut calls = Vec::new();
        let event = dropdown.select(pick, |o| calls.push(o.clone()));

        assert_eq!(calls, vec![pick.clone()]);
        assert_eq!(event, DropdownEvent::Selected(pick.clone()));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_double_toggle_has_no_side_effects() {
        let mut dropdown = DropdownState::new(true);
        assert_eq!(dropdown.toggle(), DropdownEvent::Opened);
        assert!(dropdown.is_open());
        assert_eq!(dropdown.toggle(), DropdownEvent::Closed);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_dismiss_only_when_open() {
        let mut dropdown = DropdownState::new(false);
        assert_eq!(dropdown.dismiss(), None);

        dropdown.toggle();
        assert_eq!(dropdown.dismiss(), Some(DropdownEvent::Dismissed));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_enter_selects_other_keys_do_not() {
        let option = ArticleOption::new("Narrow", "948px");
        let mut dropdown = DropdownState::new(false);
        dropdown.toggle();

        let mut calls = 0;
        let ignored = dropdown.activate(&option, Activation::Key(ActivationKey::Other), |_| calls += 1);
        assert_eq!(ignored, None);
        assert!(dropdown.is_open());

        let picked = dropdown.activate(&option, Activation::Key(ActivationKey::Enter), |_| calls += 1);
        assert_eq!(picked, Some(DropdownEvent::Selected(option.clone())));
        assert_eq!(calls, 1);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_hide_selected_filters_open_list() {
        let catalog = OptionCatalog::builtin();
        let options = catalog.options(FieldId::FontFamily);
        let selected = &options[1];

        let hiding = DropdownState::new(true);
        let visible = hiding.visible_options(options, Some(selected));
        assert_eq!(visible.len(), options.len() - 1);
        assert!(visible.iter().all(|o| o.value != selected.value));
        assert_eq!(hiding.items(options, Some(selected)).len(), options.len() - 1);

        let showing = DropdownState::new(false);
        assert_eq!(showing.visible_options(options, Some(selected)).len(), options.len());
        // Nothing to hide without a selection
        assert_eq!(hiding.visible_options(options, None).len(), options.len());
    }

    #[test]
    fn test_controlled_dropdown_forwards_requests() {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&requests);
        let open = OpenState::controlled(true, Rc::new(move |o| sink.borrow_mut().push(o)));
        let mut dropdown = DropdownState::with_open_state(open, false);

        let option = ArticleOption::new("Gray", "#C4C4C4");
        dropdown.select(&option, |_| {});
        assert_eq!(dropdown.dismiss(), Some(DropdownEvent::Dismissed));

        assert_eq!(*requests.borrow(), vec![false, false]);
    }

    #[test]
    fn test_header_label() {
        let option = ArticleOption::new("Ubuntu", "Ubuntu");
        assert_eq!(header_label(Some(&option), "Choose"), "Ubuntu");
        assert_eq!(header_label(None, "Choose"), "Choose");
    }
}
