use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;
use views::{Home, PageNotFound, Shell};

/// Shared components: header, hero, footer and the document shell.
mod components;
/// Static site content: metadata, navigation links and copy.
mod site;
/// Route layouts and pages.
mod views;

/// Every route is wrapped by the [`Shell`] layout, which renders the page inside the root layout.
///
/// Only the landing page is implemented. `/jobs`, `/jobs/new` and `/dashboard` are linked from it
/// and fall through to the catch-all [`PageNotFound`] route.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        // Segments of any unmatched path are collected into `route`.
        #[route("/:..route")]
        PageNotFound { route: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    launch();
}

#[cfg(not(feature = "server"))]
fn main() {
    launch();
}

fn launch() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger unavailable: {err}");
    }
    info!(title = site::SITE_METADATA.title, "launching");
    dioxus::launch(App);
}

/// Root component: stylesheets, page head and the router.
#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        components::PageHead {}

        Router::<Route> {}
    }
}
