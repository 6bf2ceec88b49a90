use barkedlogy::components::App as BarkedlogyApp;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/barkedlogy.css");

fn main() {
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");

    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "web")]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        BarkedlogyApp {}
    }
}
