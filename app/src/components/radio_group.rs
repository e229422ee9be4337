//! Radio group component
//!
//! Every option is always visible; activation changes the value immediately.

use std::rc::Rc;

use article_params_core::radio::RadioGroup as RadioModel;
use article_params_core::Activation;
use article_params_types::ArticleOption;
use dioxus::prelude::*;

use super::Text;
use super::select::activation_key;

#[component]
pub fn RadioGroup(
    name: String,
    options: Vec<ArticleOption>,
    selected: Option<ArticleOption>,
    #[props(default)] on_change: EventHandler<ArticleOption>,
    #[props(default)] title: Option<String>,
) -> Element {
    let rows: Vec<(ArticleOption, bool)> = RadioModel::new(&options, selected.as_ref())
        .items()
        .into_iter()
        .map(|item| (item.option.clone(), item.selected))
        .collect();

    let shared = Rc::new(options);
    let forward = move |options: &[ArticleOption], option: &ArticleOption, activation: Activation| {
        RadioModel::new(options, None).activate(option, activation, |o| on_change.call(o.clone()));
    };

    rsx! {
        div { class: "radio-container",
            if let Some(title) = &title {
                Text { size: 12, weight: 800, uppercase: true, "{title}" }
            }
            div { class: "radio-group", role: "radiogroup",
                for (option, checked) in rows {
                    div {
                        key: "{option.value}",
                        class: if checked { "radio-item radio-item-checked" } else { "radio-item" },
                        "data-checked": checked,
                        "data-testid": "radio-element-{option.value}",
                        tabindex: 0,
                        onclick: {
                            let options = Rc::clone(&shared);
                            let option = option.clone();
                            move |_| forward(&options, &option, Activation::Pointer)
                        },
                        onkeydown: {
                            let options = Rc::clone(&shared);
                            let option = option.clone();
                            move |e: KeyboardEvent| {
                                forward(&options, &option, Activation::Key(activation_key(&e.key())))
                            }
                        },
                        input {
                            class: "radio-input",
                            r#type: "radio",
                            name: "{name}",
                            value: "{option.value}",
                            checked,
                            tabindex: -1,
                        }
                        // Not tied to the input: a linked label would click it
                        // again and activate the row twice
                        label { class: "radio-label",
                            Text { size: 18, uppercase: false, "{option.title}" }
                        }
                    }
                }
            }
        }
    }
}
