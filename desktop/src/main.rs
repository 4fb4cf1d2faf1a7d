#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use api::{FixtureSource, SharedSource, DEMO_PROJECT};
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::views::HealthPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Demo {},
    #[route("/project/:project")]
    Project { project: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    init_logging();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Healthlens – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(960.0, 900.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already installed: {err}");
    }
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Global reactive language code; the health card's switcher updates it.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(|| {
        let fixtures = FixtureSource::demo();
        tracing::debug!(projects = ?fixtures.projects().collect::<Vec<_>>(), "health source ready");
        SharedSource::new(fixtures)
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[component]
fn Demo() -> Element {
    rsx! { HealthPage { project: DEMO_PROJECT.to_string() } }
}

#[component]
fn Project(project: String) -> Element {
    tracing::debug!(%project, "opening project health");
    rsx! { HealthPage { project } }
}
