use crate::site::LinkStyle;
use crate::Route;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Catch-all for every path without a page of its own, including the job
/// and dashboard targets linked from the home page.
#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let path = requested_path(&route);
    debug!(%path, "no page for route");

    rsx! {
        section {
            id: "not-found",
            h1 { "Coming soon" }
            p { "Nothing lives at {path} yet." }
            Link {
                to: Route::Home {},
                class: LinkStyle::Primary.class(),
                "Back to Proof"
            }
        }
    }
}

fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}
