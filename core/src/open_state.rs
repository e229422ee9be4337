//! Ownership of open/closed flags
//!
//! A panel or dropdown either owns its open flag ([`OpenState::Local`]) or is
//! handed the flag and a setter by its owner ([`OpenState::Controlled`]). The
//! choice is made where the component is composed.
//!
//! [`ActiveField`] is the panel-level coordinator that keeps at most one field
//! dropdown open.

use std::fmt;
use std::rc::Rc;

use article_params_types::FieldId;

/// Setter supplied by the owner of a controlled open flag
pub type ToggleFn = Rc<dyn Fn(bool)>;

#[derive(Clone)]
pub enum OpenState {
    Local(bool),
    Controlled { open: bool, on_toggle: ToggleFn },
}

impl OpenState {
    pub fn local() -> Self {
        OpenState::Local(false)
    }

    pub fn controlled(open: bool, on_toggle: ToggleFn) -> Self {
        OpenState::Controlled { open, on_toggle }
    }

    pub fn is_open(&self) -> bool {
        match self {
            OpenState::Local(open) => *open,
            OpenState::Controlled { open, .. } => *open,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, OpenState::Controlled { .. })
    }

    /// Ask for a new flag value.
    ///
    /// Local state updates in place. Controlled state only forwards to the
    /// owner; the visible flag changes when the owner passes it back.
    pub fn request(&mut self, open: bool) {
        match self {
            OpenState::Local(current) => *current = open,
            OpenState::Controlled { on_toggle, .. } => on_toggle(open),
        }
    }
}

impl Default for OpenState {
    fn default() -> Self {
        Self::local()
    }
}

impl fmt::Debug for OpenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenState::Local(open) => f.debug_tuple("Local").field(open).finish(),
            OpenState::Controlled { open, .. } => {
                f.debug_struct("Controlled").field("open", open).finish_non_exhaustive()
            }
        }
    }
}

/// Which field's dropdown is open, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveField(Option<FieldId>);

impl ActiveField {
    pub fn current(&self) -> Option<FieldId> {
        self.0
    }

    pub fn is_open(&self, field: FieldId) -> bool {
        self.0 == Some(field)
    }

    /// Open `field` (closing any other) or close it if it is the open one
    pub fn toggle(&mut self, field: FieldId) {
        self.0 = if self.is_open(field) { None } else { Some(field) };
    }

    /// Set the open flag of one field
    pub fn set(&mut self, field: FieldId, open: bool) {
        if open {
            self.0 = Some(field);
        } else {
            self.dismiss(field);
        }
    }

    /// Close `field` if it is the open one. Returns whether it was.
    ///
    /// A stale dismissal from a field that is no longer open must not close the
    /// field that replaced it.
    pub fn dismiss(&mut self, field: FieldId) -> bool {
        if self.is_open(field) {
            self.0 = None;
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_local_request_updates_in_place() {
        let mut state = OpenState::local();
        assert!(!state.is_open());
        state.request(true);
        assert!(state.is_open());
        assert!(!state.is_controlled());
    }

    #[test]
    fn test_controlled_request_only_forwards() {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&requests);
        let mut state = OpenState::controlled(false, Rc::new(move |open| sink.borrow_mut().push(open)));

        state.request(true);
        assert!(!state.is_open());
        assert_eq!(*requests.borrow(), vec![true]);
    }

    #[test]
    fn test_only_one_field_open() {
        let mut active = ActiveField::default();
        active.toggle(FieldId::FontFamily);
        active.toggle(FieldId::FontColor);

        assert!(active.is_open(FieldId::FontColor));
        assert!(!active.is_open(FieldId::FontFamily));

        active.toggle(FieldId::FontColor);
        assert_eq!(active.current(), None);
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut active = ActiveField::default();
        active.set(FieldId::ContentWidth, true);

        assert!(!active.dismiss(FieldId::FontFamily));
        assert!(active.is_open(FieldId::ContentWidth));
        assert!(active.dismiss(FieldId::ContentWidth));
        assert_eq!(active.current(), None);
    }
}
