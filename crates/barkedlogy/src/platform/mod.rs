//! Browser glue: timers, location, navigation and body classes.
//!
//! Every function has a native fallback so the crate builds and tests on the
//! host. The fallbacks log instead of touching a DOM that isn't there.

pub mod listener;

use barkedlogy_core::Page;
use dioxus::logger::tracing::{debug, warn};

pub use listener::{register_click_outside, unregister_click_outside, ClickTarget};

/// Class added to `<body>` while the article sidebar is open.
pub const SIDEBAR_OPEN_CLASS: &str = "sidebar-open";

/// Path and query string of the page being shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
}

/// Waits `ms` milliseconds without blocking the event loop.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(target_arch = "wasm32")]
pub fn current_location() -> Location {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Location::default();
    };
    Location {
        path: location.pathname().unwrap_or_default(),
        query: location.search().unwrap_or_default(),
    }
}

/// Native builds always start on the home page.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_location() -> Location {
    Location {
        path: "/".to_string(),
        query: String::new(),
    }
}

/// Loads another page of the site.
pub fn navigate_to(page: Page) {
    let Some(href) = page.href() else {
        warn!("No document for page {:?}", page);
        return;
    };
    debug!("Navigating to {}", href);

    #[cfg(target_arch = "wasm32")]
    {
        let result = web_sys::window()
            .map(|w| w.location().set_href(href))
            .unwrap_or(Ok(()));
        if let Err(e) = result {
            warn!("Navigation to {} failed: {:?}", href, e);
        }
    }
}

/// Adds or removes `class` on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force(class, enabled) {
        warn!("Failed to update body class {}: {:?}", class, e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_body_class(class: &str, enabled: bool) {
    debug!("body class {} -> {}", class, enabled);
}
