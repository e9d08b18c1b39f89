use crate::components::SiteLink;
use crate::site::{CALLS_TO_ACTION, HERO_HEADING_ACCENT, HERO_HEADING_LEAD, HERO_SUBHEADING};
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: "hero",
            h1 {
                "{HERO_HEADING_LEAD}"
                span { class: "accent", "{HERO_HEADING_ACCENT}" }
            }
            p { "{HERO_SUBHEADING}" }
            div { class: "actions",
                for link in CALLS_TO_ACTION {
                    SiteLink { key: "{link.label}", link }
                }
            }
        }
    }
}
