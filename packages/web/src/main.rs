use dioxus::prelude::*;

use store::AppConfig;
use ui::AuthProvider;
use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

/// Client config, embedded at build time.
const CONFIG: &str = include_str!("../taskboard.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| api::load_app_config(CONFIG).map_err(|e| e.to_string()));

    match config {
        Ok(config) => rsx! {
            AuthProvider {
                config,
                Router::<Route> {}
            }
        },
        Err(e) => {
            tracing::error!("failed to load {}: {}", AppConfig::filename(), e);
            rsx! {
                p { class: "config-error", "Configuration error: {e}" }
            }
        }
    }
}
