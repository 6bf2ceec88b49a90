use barkedlogy_core::session::{fetch_page, load_more, load_suggested_filters, SearchOutcome};
use barkedlogy_core::state::ResultList;
use barkedlogy_core::storage::{load_search, load_total};
use barkedlogy_core::Cluster;
use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;

use super::{dispatch_search, use_app_context, AutocompleteInput, ResultsGrid};

/// Requests handled by the results coroutine, one at a time.
pub enum ResultsMessage {
    /// Fetch the first page of the current search and replace the grid
    Refresh,
    /// Advance the offset and append the next page
    LoadMore,
}

/// Sidebar filter state.
#[derive(Clone, PartialEq)]
enum Filters {
    Loading,
    Loaded(Vec<Cluster>),
    Failed,
}

/// Results page: restores the persisted search, shows the grid with
/// "load more", and offers a random handful of clusters as filters.
#[component]
pub fn SearchPage() -> Element {
    let ctx = use_app_context();
    let mut state = use_signal(|| load_search(&ctx.store, ctx.config.page_size));
    let query = use_signal(|| state.peek().search_term().to_string());
    let mut total = use_signal(|| load_total(&ctx.store));
    let mut results = use_signal(ResultList::default);
    let mut show_load_more = use_signal(|| false);
    let mut filters = use_signal(|| Filters::Loading);

    let results_task = use_coroutine({
        let ctx = ctx.clone();
        move |mut rx: UnboundedReceiver<ResultsMessage>| {
            let ctx = ctx.clone();
            async move {
                while let Some(msg) = rx.next().await {
                    let reset = match msg {
                        ResultsMessage::Refresh => true,
                        ResultsMessage::LoadMore => {
                            load_more(&mut state.write());
                            false
                        }
                    };
                    let snapshot = state.peek().clone();
                    debug!(
                        "Fetching articles (skip={}, reset={})",
                        snapshot.skip(),
                        reset
                    );

                    match fetch_page(&ctx.api, &ctx.store, &snapshot, reset).await {
                        Ok(update) => {
                            total.set(Some(update.total_results));
                            show_load_more.set(update.show_load_more);
                            results.write().apply(update.reset, update.articles);
                        }
                        Err(e) => error!("Error loading articles: {}", e),
                    }
                }
            }
        }
    });

    use_hook({
        let api = ctx.api.clone();
        move || {
            results_task.send(ResultsMessage::Refresh);
            spawn(async move {
                match load_suggested_filters(&api).await {
                    Ok(selected) => filters.set(Filters::Loaded(selected)),
                    Err(e) => {
                        error!("Error loading suggested filters: {}", e);
                        filters.set(Filters::Failed);
                    }
                }
            });
        }
    });

    let search = use_callback(move |(term, cluster_id): (String, Option<String>)| {
        if dispatch_search(&ctx, state, &term, cluster_id.as_deref()) == SearchOutcome::RenderInPlace
        {
            results_task.send(ResultsMessage::Refresh);
        }
    });

    let count_label = total().map(|count| format!("({count})")).unwrap_or_default();
    let filter_nodes = match filters() {
        Filters::Loaded(clusters) if clusters.is_empty() => rsx! {
            p { style: "font-size:12px", "No hay temas disponibles." }
        },
        Filters::Loaded(clusters) => rsx! {
            for cluster in clusters {
                FilterButton {
                    key: "{cluster.id.as_key()}",
                    cluster: cluster.clone(),
                    on_pick: move |id: String| search.call((String::new(), Some(id))),
                }
            }
        },
        Filters::Loading | Filters::Failed => rsx! {},
    };

    rsx! {
        div { class: "search-layout",
            aside { class: "sidebar",
                h3 { "Temas sugeridos" }
                div { id: "sidebar-keywords-container",
                    {filter_nodes}
                }
            }
            main { class: "results",
                div { class: "results-header",
                    AutocompleteInput {
                        input_id: "searchInput",
                        class: "search-input",
                        placeholder: "Buscar artículos...",
                        value: query,
                        on_search: move |term: String| search.call((term, None)),
                    }
                    span { id: "result-count", "{count_label}" }
                }
                ResultsGrid { results }
                button {
                    id: "loadMoreBtn",
                    style: if show_load_more() { "display: inline-block;" } else { "display: none;" },
                    onclick: move |_| results_task.send(ResultsMessage::LoadMore),
                    "Cargar más"
                }
            }
        }
    }
}

#[component]
fn FilterButton(cluster: Cluster, on_pick: EventHandler<String>) -> Element {
    let id = cluster.id.as_key();

    rsx! {
        button {
            class: "keyword-tag",
            onclick: move |_| on_pick.call(id.clone()),
            "{cluster.name}"
        }
    }
}
