//! Dropdown select component
//!
//! Renders as a header showing the current selection and, while open, the
//! option list underneath. Open state is local unless `is_open` is passed.

use article_params_core::{Activation, ActivationKey, DropdownState, header_label};
use article_params_types::ArticleOption;
use article_params_types::style::class_list;
use dioxus::prelude::*;

use super::Text;
use crate::dismiss::{mount_region, use_outside_click_close, use_region};
use crate::open::{commit_local, open_state};

pub(crate) fn activation_key(key: &Key) -> ActivationKey {
    match key {
        Key::Enter => ActivationKey::Enter,
        _ => ActivationKey::Other,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Option Row
// ─────────────────────────────────────────────────────────────────────────────

/// One row of an open option list. Forwards pointer and Enter activation.
#[component]
pub fn OptionItem(
    option: ArticleOption,
    #[props(default = false)] selected: bool,
    #[props(default = false)] with_borders: bool,
    on_activate: EventHandler<Activation>,
) -> Element {
    let option_class = option.option_class_name.clone().unwrap_or_default();
    let class = class_list(&[
        "select-option",
        option_class.as_str(),
        if with_borders { "select-option-bordered" } else { "" },
        if selected { "select-option-selected" } else { "" },
    ]);

    rsx! {
        li {
            class,
            "data-value": "{option.value}",
            tabindex: 0,
            "data-testid": "select-option-{option.value}",
            onclick: move |_| on_activate.call(Activation::Pointer),
            onkeydown: move |e| on_activate.call(Activation::Key(activation_key(&e.key()))),
            Text { family: option.class_name.clone(), "{option.title}" }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Select
// ─────────────────────────────────────────────────────────────────────────────

#[component]
pub fn Select(
    options: Vec<ArticleOption>,
    selected: Option<ArticleOption>,
    #[props(default)] on_change: EventHandler<ArticleOption>,
    #[props(default)] placeholder: String,
    #[props(default)] title: Option<String>,
    #[props(default = false)] hide_selected: bool,
    // Color swatch next to the selected label
    #[props(default = false)] swatch: bool,
    #[props(default)] class: String,
    // Owner-held open flag; local state when absent
    #[props(default)] is_open: Option<bool>,
    #[props(default)] on_open_change: EventHandler<bool>,
) -> Element {
    let local_open = use_signal(|| false);
    let region = use_region();

    // Rebuilt per use so handlers always see the current props
    let dropdown = move || {
        DropdownState::with_open_state(open_state(is_open, on_open_change, local_open), hide_selected)
    };
    let current = dropdown();
    let open = current.is_open();

    use_outside_click_close(open, &region, move |_| {
        let mut d = dropdown();
        if let Some(event) = d.dismiss() {
            tracing::debug!(?event, "Select dismissed");
        }
        commit_local(d.open_state(), local_open);
    });

    let toggle = move || {
        let mut d = dropdown();
        let event = d.toggle();
        tracing::debug!(?event, "Select header toggled");
        commit_local(d.open_state(), local_open);
    };

    let visible: Vec<ArticleOption> = current
        .visible_options(&options, selected.as_ref())
        .into_iter()
        .cloned()
        .collect();
    let label = header_label(selected.as_ref(), &placeholder).to_string();
    let family = selected.as_ref().map(|s| s.class_name.clone()).unwrap_or_default();
    let header_option_class = selected
        .as_ref()
        .and_then(|s| s.option_class_name.clone())
        .unwrap_or_default();
    let selected_value = selected.as_ref().map(|s| s.value.clone());
    let region_for_mount = region.clone();

    rsx! {
        div { class: class_list(&["select-container", class.as_str()]),
            if let Some(title) = &title {
                Text { size: 12, weight: 800, uppercase: true, "{title}" }
            }
            div {
                class: "select-wrapper",
                "data-is-active": open,
                "data-testid": "selectWrapper",
                onmounted: move |e| mount_region(&region_for_mount, &e),
                i { class: if open { "fa-solid fa-chevron-up select-arrow" } else { "fa-solid fa-chevron-down select-arrow" } }
                div {
                    class: class_list(&["select-placeholder", header_option_class.as_str()]),
                    "data-selected": selected.is_some(),
                    role: "button",
                    tabindex: 0,
                    onclick: move |_| toggle(),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            toggle();
                        }
                    },
                    if swatch {
                        if let Some(sel) = &selected {
                            span {
                                class: "color-indicator",
                                style: "background-color: {sel.value}",
                                span { class: "color-dot" }
                            }
                        }
                    }
                    Text { family, "{label}" }
                }
                if open {
                    ul { class: "select-dropdown", "data-testid": "selectDropdown",
                        for option in visible {
                            OptionItem {
                                key: "{option.value}",
                                selected: selected_value.as_deref() == Some(option.value.as_str()),
                                option: option.clone(),
                                on_activate: {
                                    let option = option.clone();
                                    move |activation: Activation| {
                                        let mut d = dropdown();
                                        let event = d.activate(&option, activation, |o| on_change.call(o.clone()));
                                        if event.is_some() {
                                            commit_local(d.open_state(), local_open);
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
