use barkedlogy_core::{Cluster, SearchState};
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use super::{dispatch_search, use_app_context, AutocompleteInput};

/// Landing page: main search box plus every cluster as a clickable tag.
#[component]
pub fn HomePage() -> Element {
    let ctx = use_app_context();
    let state = use_signal(|| SearchState::new(ctx.config.page_size));
    let query = use_signal(String::new);
    let mut clusters = use_signal(Vec::<Cluster>::new);

    use_hook({
        let api = ctx.api.clone();
        move || {
            spawn(async move {
                match api.fetch_clusters().await {
                    Ok(loaded) => {
                        info!("Loaded {} clusters", loaded.len());
                        clusters.set(loaded);
                    }
                    Err(e) => error!("Error loading clusters: {}", e),
                }
            });
        }
    });

    let search = use_callback(move |(term, cluster_id): (String, Option<String>)| {
        dispatch_search(&ctx, state, &term, cluster_id.as_deref());
    });

    rsx! {
        main { class: "home",
            div { class: "search-container",
                AutocompleteInput {
                    input_id: "main-search",
                    class: "search-input",
                    placeholder: "Buscar artículos...",
                    value: query,
                    on_search: move |term: String| search.call((term, None)),
                }
                button {
                    class: "search-btn",
                    onclick: move |_| search.call((query.read().trim().to_string(), None)),
                    "Buscar"
                }
            }
            div { id: "tags-container",
                for cluster in clusters.read().iter() {
                    ClusterTag {
                        key: "{cluster.id.as_key()}",
                        cluster: cluster.clone(),
                        on_pick: move |id: String| search.call((String::new(), Some(id))),
                    }
                }
            }
        }
    }
}

#[component]
fn ClusterTag(cluster: Cluster, on_pick: EventHandler<String>) -> Element {
    let label = cluster.tag_label();
    let id = cluster.id.as_key();

    rsx! {
        span {
            class: "tag",
            onclick: move |_| on_pick.call(id.clone()),
            "{label}"
        }
    }
}
