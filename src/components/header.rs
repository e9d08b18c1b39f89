use crate::components::SiteLink;
use crate::site::{BRAND_MARK, BRAND_NAME, HEADER_LINKS};
use dioxus::prelude::*;

/// Brand mark on the left, navigation on the right.
#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            id: "site-header",
            div { class: "brand",
                span { class: "brand-mark", "{BRAND_MARK}" }
                span { class: "brand-name", "{BRAND_NAME}" }
            }
            nav {
                for link in HEADER_LINKS {
                    SiteLink { key: "{link.label}", link }
                }
            }
        }
    }
}
