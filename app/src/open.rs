//! Local or lifted open flags for components
//!
//! A component gets `is_open: Option<bool>` and `on_open_change` props. When
//! `is_open` is given the owner holds the flag; otherwise the component keeps it
//! in its own signal.

use std::rc::Rc;

use article_params_core::OpenState;
use dioxus::prelude::*;

pub fn open_state(
    controlled: Option<bool>,
    on_open_change: EventHandler<bool>,
    local: Signal<bool>,
) -> OpenState {
    match controlled {
        Some(open) => OpenState::controlled(open, Rc::new(move |open| on_open_change.call(open))),
        None => OpenState::Local(*local.read()),
    }
}

/// Write a locally owned flag back to its signal after `OpenState::request`
pub fn commit_local(state: &OpenState, mut local: Signal<bool>) {
    if let OpenState::Local(open) = state
        && *local.peek() != *open
    {
        local.set(*open);
    }
}

/// Request a new flag value from a component's open state
pub fn request_open(
    controlled: Option<bool>,
    on_open_change: EventHandler<bool>,
    local: Signal<bool>,
    open: bool,
) {
    let mut state = open_state(controlled, on_open_change, local);
    state.request(open);
    commit_local(&state, local);
}
