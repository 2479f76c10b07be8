use dioxus::prelude::*;

use api::HttpUserDirectory;
use ui::{use_theme_controller, Themed, UserDirectoryView};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| {
        let client = HttpUserDirectory::from_env();
        tracing::info!(
            base_url = %client.directory().config().base_url,
            "user directory configured"
        );
        client
    });
    let theme = use_theme_controller();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Themed {
            controller: theme,
            UserDirectoryView { client: client, theme: theme }
        }
    }
}
