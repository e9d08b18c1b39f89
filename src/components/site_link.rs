use crate::site::NavLink;
use dioxus::prelude::*;

/// Router link carrying the label, target and class of a [`NavLink`].
#[component]
pub fn SiteLink(link: NavLink) -> Element {
    rsx! {
        Link {
            to: link.target,
            class: link.style.class(),
            "{link.label}"
        }
    }
}
