use api::{FixtureSource, SharedSource, DEMO_PROJECT};
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
));

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(|| {
        let fixtures = FixtureSource::demo();
        tracing::debug!(projects = ?fixtures.projects().collect::<Vec<_>>(), "health source ready");
        SharedSource::new(fixtures)
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
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
