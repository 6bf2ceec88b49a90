use barkedlogy_core::autocomplete::{Autocomplete, InputAction};
use barkedlogy_core::config::AUTOCOMPLETE_DEBOUNCE_MS;
use dioxus::prelude::*;

use crate::components::use_app_context;
use crate::platform::{self, register_click_outside, unregister_click_outside};

/// Search input with a debounced "related terms" dropdown.
///
/// Typing schedules a lookup 300ms after the last keystroke; picking a
/// suggestion fills the input and searches immediately. Enter searches with
/// the trimmed text. A click anywhere outside the wrapper hides the box.
#[component]
pub fn AutocompleteInput(
    input_id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    mut value: Signal<String>,
    on_search: EventHandler<String>,
) -> Element {
    let ctx = use_app_context();
    let mut widget = use_signal(Autocomplete::new);
    let wrapper_id = format!("{}-autocomplete", input_id);

    use_hook({
        let wrapper_id = wrapper_id.clone();
        move || {
            let inside = wrapper_id.clone();
            register_click_outside(&wrapper_id, move |target| {
                if !target.is_inside(&inside) && widget.peek().is_open() {
                    widget.write().on_outside_click();
                }
            });
        }
    });
    use_drop({
        let wrapper_id = wrapper_id.clone();
        move || unregister_click_outside(&wrapper_id)
    });

    let handle_input = move |evt: FormEvent| {
        let text = evt.value();
        value.set(text.clone());

        let InputAction::Schedule(ticket) = widget.write().on_input(&text) else {
            return;
        };
        let api = ctx.api.clone();
        spawn(async move {
            platform::sleep_ms(AUTOCOMPLETE_DEBOUNCE_MS).await;
            let Some(term) = widget.write().on_debounce_elapsed(ticket) else {
                return;
            };
            let suggestions = api.fetch_suggestions(&term).await;
            widget.write().on_suggestions(suggestions);
        });
    };

    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            on_search.call(value.read().trim().to_string());
        }
    };

    let handle_pick = move |word: String| {
        let term = widget.write().select(&word);
        value.set(term.clone());
        on_search.call(term);
    };

    let open = widget.read().is_open();
    let suggestions = widget.read().suggestions().to_vec();

    rsx! {
        div { id: "{wrapper_id}", class: "autocomplete-wrapper",
            input {
                id: "{input_id}",
                class: "{class}",
                r#type: "text",
                autocomplete: "off",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: handle_input,
                onkeypress: handle_keypress,
            }
            div {
                class: "suggestions-box",
                style: if open { "display: block;" } else { "display: none;" },
                for word in suggestions {
                    SuggestionItem { key: "{word}", word, on_pick: handle_pick }
                }
            }
        }
    }
}

#[component]
fn SuggestionItem(word: String, on_pick: EventHandler<String>) -> Element {
    let picked = word.clone();
    rsx! {
        div {
            class: "suggestion-item",
            onclick: move |_| on_pick.call(picked.clone()),
            "Relacionado: "
            strong { "{word}" }
        }
    }
}
