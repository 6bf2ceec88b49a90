//! Document-level click listeners keyed by owner.
//!
//! Dropdowns and the article sidebar close when the user clicks anywhere
//! outside them. Each owner registers one listener under a key; registering
//! again under the same key detaches the previous listener first, so setup
//! can run any number of times without stacking handlers. Dropping a
//! listener removes it from the document.

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;

thread_local! {
    static REGISTRY: RefCell<HashMap<String, DocumentClickListener>> =
        RefCell::new(HashMap::new());
}

/// The node a click landed on.
#[derive(Debug, Clone, Default)]
pub struct ClickTarget {
    #[cfg(target_arch = "wasm32")]
    node: Option<web_sys::Node>,
}

impl ClickTarget {
    /// True if the click landed on the element with `element_id` or inside it.
    #[cfg(target_arch = "wasm32")]
    pub fn is_inside(&self, element_id: &str) -> bool {
        let Some(node) = self.node.as_ref() else {
            return false;
        };
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .map(|element| element.contains(Some(node)))
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn is_inside(&self, _element_id: &str) -> bool {
        false
    }
}

type ClickHandler = Box<dyn FnMut(&ClickTarget)>;

/// A click listener attached to `document` for as long as it lives.
struct DocumentClickListener {
    #[cfg(target_arch = "wasm32")]
    document: web_sys::Document,
    #[cfg(target_arch = "wasm32")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    #[cfg(not(target_arch = "wasm32"))]
    _handler: ClickHandler,
}

impl DocumentClickListener {
    #[cfg(target_arch = "wasm32")]
    fn attach(mut handler: ClickHandler) -> Option<Self> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let node = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            handler(&ClickTarget { node });
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(e) =
            document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to attach document click listener: {:?}", e);
            return None;
        }
        Some(Self { document, callback })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn attach(handler: ClickHandler) -> Option<Self> {
        Some(Self { _handler: handler })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for DocumentClickListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}

/// Calls `handler` for every click on the document, replacing any listener
/// previously registered under `key`.
pub fn register_click_outside(key: &str, handler: impl FnMut(&ClickTarget) + 'static) {
    let previous = REGISTRY.with(|registry| registry.borrow_mut().remove(key));
    drop(previous);

    if let Some(listener) = DocumentClickListener::attach(Box::new(handler)) {
        REGISTRY.with(|registry| {
            registry.borrow_mut().insert(key.to_string(), listener);
        });
    }
}

/// Detaches the listener registered under `key`, if any.
pub fn unregister_click_outside(key: &str) {
    let previous = REGISTRY.with(|registry| registry.borrow_mut().remove(key));
    drop(previous);
}

#[cfg(test)]
fn registered_count() -> usize {
    REGISTRY.with(|registry| registry.borrow().len())
}
