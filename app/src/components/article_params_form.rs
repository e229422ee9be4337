//! Article parameters side panel
//!
//! Collapsible form holding a draft of the article settings. Field edits stay
//! in the draft until "Apply"; "Reset" reverts the draft and notifies the
//! owner. The arrow button and the panel share one outside-click region, so
//! pressing the arrow never counts as an outside click.

use std::rc::Rc;

use article_params_core::{ControlKind, FieldId, OptionCatalog, PanelIntent, SettingsPanel};
use article_params_types::{ArticleOption, ArticleState};
use dioxus::prelude::*;

use super::{ArrowButton, Button, ButtonKind, RadioGroup, Select, Separator, Text};
use crate::dismiss::{mount_region, use_outside_click_close, use_region};
use crate::open::{open_state, request_open};

/// Make the option catalog available to the panel.
///
/// Call once in the root component.
pub fn use_catalog_provider(init: impl FnOnce() -> OptionCatalog) -> Rc<OptionCatalog> {
    use_context_provider(|| Rc::new(init()))
}

pub fn use_catalog() -> Rc<OptionCatalog> {
    use_context::<Rc<OptionCatalog>>()
}

#[component]
pub fn ArticleParamsForm(
    current_state: ArticleState,
    on_apply: EventHandler<ArticleState>,
    on_reset: EventHandler<()>,
    // Owner-held panel flag; local state when absent
    #[props(default)] is_open: Option<bool>,
    #[props(default)] on_toggle_open: EventHandler<bool>,
) -> Element {
    let catalog = use_catalog();
    let mut panel = use_signal(|| SettingsPanel::new(&current_state));
    let local_open = use_signal(|| false);
    let region = use_region();

    use_effect(use_reactive!(|current_state| {
        panel.write().sync_applied(&current_state);
    }));

    let open = open_state(is_open, on_toggle_open, local_open).is_open();

    let set_open = move |value: bool| {
        if !value {
            let mut panel = panel;
            panel.write().close_fields();
        }
        request_open(is_open, on_toggle_open, local_open, value);
    };

    use_outside_click_close(open, &region, set_open);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        match panel.read().apply() {
            PanelIntent::Apply(state) => on_apply.call(state),
            PanelIntent::Reset => {}
        }
    };

    let reset_defaults = catalog.defaults.clone();
    let on_reset_click = move |e: MouseEvent| {
        e.prevent_default();
        let intent = panel.write().reset(&reset_defaults);
        tracing::debug!(?intent, "Panel reset");
        on_reset.call(());
    };

    let snapshot = panel.read().clone();
    let controls = snapshot.controls(&catalog);
    let region_for_mount = region.clone();

    rsx! {
        div {
            class: "article-params",
            onmounted: move |e| mount_region(&region_for_mount, &e),
            ArrowButton { is_open: open, on_click: move |_| set_open(!open) }
            aside {
                class: if open { "params-container params-container-open" } else { "params-container" },
                form { class: "params-form", onsubmit: on_submit,
                    Text {
                        heading: true,
                        size: 31,
                        weight: 800,
                        uppercase: true,
                        align: "center",
                        "Set the parameters"
                    }
                    for control in controls {
                        div { key: "{control.field.config_key()}", class: "params-section",
                            if control.field == FieldId::BackgroundColor {
                                Separator { class: "params-divider" }
                            }
                            {
                                let field = control.field;
                                let catalog = Rc::clone(&catalog);
                                let on_change = move |option: ArticleOption| {
                                    if let Err(e) = panel.write().select(&catalog, field, &option) {
                                        tracing::error!(error = %e, "Rejected panel selection");
                                    }
                                };
                                match control.kind {
                                    ControlKind::Radio => rsx! {
                                        RadioGroup {
                                            name: field.config_key().to_string(),
                                            title: field.label().to_string(),
                                            options: control.options.to_vec(),
                                            selected: control.selected.clone(),
                                            on_change,
                                        }
                                    },
                                    ControlKind::Dropdown { hide_selected } => rsx! {
                                        Select {
                                            class: "params-select-{field.config_key()}",
                                            title: field.label().to_string(),
                                            options: control.options.to_vec(),
                                            selected: control.selected.clone(),
                                            hide_selected,
                                            swatch: field.is_color(),
                                            is_open: control.open,
                                            on_open_change: move |value: bool| panel.write().set_field_open(field, value),
                                            on_change,
                                        }
                                    },
                                }
                            }
                        }
                    }
                    div { class: "params-buttons",
                        Button { title: "Reset", kind: ButtonKind::Clear, on_click: on_reset_click }
                        Button { title: "Apply", kind: ButtonKind::Apply, submit: true }
                    }
                }
            }
        }
    }
}
