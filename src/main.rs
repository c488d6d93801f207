use dioxus::prelude::*;

use jukebox_tempo::components::{splash_delay, AppShell, SplashScreen};
use jukebox_tempo::config::{APP_NAME, APP_VERSION};

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut loading = use_signal(|| true);

    use_future(move || async move {
        tracing::info!(version = APP_VERSION, "{APP_NAME} starting");
        splash_delay().await;
        loading.set(false);
    });

    rsx! {
        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#1f2937" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: APP_NAME }
        document::Title { "{APP_NAME}" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        div { class: "min-h-screen bg-background flex flex-col",
            if loading() {
                SplashScreen {}
            } else {
                AppShell {}
            }
        }
    }
}
