use barkedlogy_core::config::SITE_NAME;
use barkedlogy_core::storage::load_selected_article;
use barkedlogy_core::SearchState;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use super::{dispatch_search, use_app_context, AutocompleteInput};
use crate::platform::{self, register_click_outside, unregister_click_outside, SIDEBAR_OPEN_CLASS};

const SIDEBAR_ID: &str = "mainSidebar";
const TOGGLE_ID: &str = "toggleSidebar";
const SIDEBAR_LISTENER_KEY: &str = "article-sidebar";

/// Detail view of the article stored by the results page.
///
/// Renders nothing when no article was selected or the stored record can't
/// be decoded. The sidebar holds a second search box.
#[component]
pub fn ArticlePage() -> Element {
    let ctx = use_app_context();
    let article = use_hook(|| match load_selected_article(&ctx.store) {
        Ok(article) => article,
        Err(e) => {
            error!("Failed to read selected article: {}", e);
            None
        }
    });
    let state = use_signal(|| SearchState::new(ctx.config.page_size));
    let query = use_signal(String::new);
    let mut sidebar_open = use_signal(|| false);

    use_effect(move || platform::set_body_class(SIDEBAR_OPEN_CLASS, sidebar_open()));

    use_hook(move || {
        register_click_outside(SIDEBAR_LISTENER_KEY, move |target| {
            let outside = !target.is_inside(SIDEBAR_ID) && !target.is_inside(TOGGLE_ID);
            if outside && *sidebar_open.peek() {
                sidebar_open.set(false);
            }
        });
    });
    use_drop(|| {
        unregister_click_outside(SIDEBAR_LISTENER_KEY);
        platform::set_body_class(SIDEBAR_OPEN_CLASS, false);
    });

    let search = use_callback(move |term: String| {
        if term.is_empty() {
            return;
        }
        dispatch_search(&ctx, state, &term, None);
    });

    let Some(article) = article else {
        info!("No article selected");
        return rsx! {};
    };

    let title = article.title.clone().filter(|t| !t.is_empty());
    let display_title = article.display_title().to_string();
    let category = article.detail_category();
    let summary = article.abstract_or_default().to_string();
    let href = article.link_href().to_string();
    let link_text = article.link_text().to_string();

    rsx! {
        {title.map(|title| rsx! { document::Title { "{title} | {SITE_NAME}" } })}
        header { class: "article-header",
            button {
                id: TOGGLE_ID,
                class: "sidebar-toggle",
                onclick: move |_| sidebar_open.toggle(),
                "☰"
            }
        }
        aside { id: SIDEBAR_ID, class: "sidebar",
            AutocompleteInput {
                input_id: "sidebarSearchInput",
                class: "search-input",
                placeholder: "Buscar artículos...",
                value: query,
                on_search: search,
            }
            button {
                id: "sidebarSearchBtn",
                onclick: move |_| search.call(query.read().trim().to_string()),
                "Buscar"
            }
        }
        article { class: "article-detail",
            h1 { id: "art-title", "{display_title}" }
            p { id: "art-cluster", "{category}" }
            a {
                id: "art-link",
                href: "{href}",
                "{link_text}"
            }
            div { id: "art-abstract",
                p { "{summary}" }
            }
        }
    }
}
