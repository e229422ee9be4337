//! Article preview styled by the applied parameters

use dioxus::prelude::*;

use super::Text;

const PARAGRAPHS: &[&str] = &[
    "Before a reader commits to a long text, they glance at its shape: how wide \
     the column runs, how large the letters sit, how the ink meets the page.",
    "Typography decides most of that first impression. A narrow column keeps the \
     eye from losing its line, and a warm background softens long reading sessions.",
    "Use the panel on the left to try other combinations. Nothing changes here \
     until the new settings are applied.",
];

/// Sample article. Its look comes from the CSS variables on an ancestor.
#[component]
pub fn Article() -> Element {
    rsx! {
        article { class: "article",
            Text { heading: true, size: 45, weight: 800, uppercase: true, "Reading comfort" }
            div { class: "article-body",
                for paragraph in PARAGRAPHS.iter() {
                    p { class: "article-paragraph", "{paragraph}" }
                }
            }
        }
    }
}
