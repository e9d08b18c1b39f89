use crate::site::{DOCUMENT_LANG, SITE_METADATA};
use dioxus::prelude::*;

/// Document shell wrapping every page. The children are rendered exactly once.
#[component]
pub fn RootLayout(children: Element) -> Element {
    rsx! {
        div {
            id: "shell",
            lang: DOCUMENT_LANG,
            {children}
        }
    }
}

/// Head elements derived from [`SITE_METADATA`]. Dioxus hoists these into the
/// document head, on the server and in the browser.
#[component]
pub fn PageHead() -> Element {
    let title = SITE_METADATA.title;
    let structured_data = SITE_METADATA.structured_data().to_string();

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: SITE_METADATA.description }
        document::Script { r#type: "application/ld+json", "{structured_data}" }
    }
}
