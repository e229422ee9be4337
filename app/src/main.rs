//! Article parameters web app
//!
//! Renders a sample article next to a collapsible settings panel. Applied
//! settings reach the article as CSS custom properties on the page root.

mod components;
mod dismiss;
mod open;

use article_params_core::{CATALOG_TOML, load_or_builtin};
use article_params_types::ArticleState;
use article_params_types::style::inline_style;
use dioxus::prelude::*;

use components::article_params_form::use_catalog_provider;
use components::{Article, ArticleParamsForm};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus_logger::init(tracing::Level::INFO) {
        eprintln!("failed to init logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let catalog = use_catalog_provider(|| load_or_builtin(CATALOG_TOML));

    let defaults = catalog.defaults.clone();
    let mut applied = use_signal(move || defaults);
    let mut panel_open = use_signal(|| false);

    let reset_defaults = catalog.defaults.clone();
    let state: ArticleState = applied();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        main { class: "page", style: inline_style(&state),
            ArticleParamsForm {
                current_state: state.clone(),
                is_open: panel_open(),
                on_toggle_open: move |open| panel_open.set(open),
                on_apply: move |next: ArticleState| {
                    tracing::info!(
                        font_family = %next.font_family.value,
                        font_size = %next.font_size.value,
                        content_width = %next.content_width.value,
                        "Applying article parameters"
                    );
                    applied.set(next);
                },
                on_reset: move |_| {
                    tracing::info!("Resetting article parameters");
                    applied.set(reset_defaults.clone());
                },
            }
            Article {}
        }
    }
}
