use barkedlogy_core::clusters::cluster_image_path;
use barkedlogy_core::config::FALLBACK_IMAGE;
use barkedlogy_core::state::ResultList;
use barkedlogy_core::storage::save_selected_article;
use barkedlogy_core::{Article, Page};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::components::use_app_context;
use crate::platform;

/// Grid of article cards, or a "no results" line once a fetch came back empty.
#[component]
pub fn ResultsGrid(results: ReadSignal<ResultList>) -> Element {
    let list = results.read();

    rsx! {
        div { class: "articles-grid",
            if list.show_placeholder() {
                p { class: "no-results", "No se encontraron resultados." }
            }
            for (idx, article) in list.articles().iter().enumerate() {
                ArticleCard { key: "{idx}:{article.link_href()}", article: article.clone() }
            }
        }
    }
}

/// Clickable card for one article: cluster thumbnail, title and category.
///
/// The thumbnail falls back to the site logo once if the cluster image is
/// missing. Clicking stores the article and opens the detail page.
#[component]
pub fn ArticleCard(article: Article) -> Element {
    let ctx = use_app_context();
    let mut image_failed = use_signal(|| false);

    let image_src = if image_failed() {
        FALLBACK_IMAGE.to_string()
    } else {
        cluster_image_path(article.cluster_key().as_deref())
    };
    let alt = article.cluster_name.clone().unwrap_or_default();
    let title = article.display_title().to_string();
    let category = article.card_category().to_string();

    rsx! {
        button {
            class: "article-card",
            onclick: move |_| {
                if let Err(e) = save_selected_article(&ctx.store, &article) {
                    error!("Failed to store selected article: {}", e);
                }
                platform::navigate_to(Page::Article);
            },
            img {
                class: "card-image",
                src: "{image_src}",
                alt: "{alt}",
                onerror: move |_| {
                    if !image_failed() {
                        image_failed.set(true);
                    }
                },
            }
            div { class: "card-info",
                h2 { class: "article-name", "{title}" }
                p { class: "keywords", "{category}" }
            }
        }
    }
}
