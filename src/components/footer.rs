use crate::site::FOOTER_TAGLINE;
use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            id: "site-footer",
            p { "{FOOTER_TAGLINE}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_renders_single_tagline() {
        let html = dioxus_ssr::render_element(rsx! { SiteFooter {} });

        assert_eq!(html.matches("<p>").count(), 1);
        assert!(html.contains("<p>Built on Bitcoin, Nostr &amp; Lightning ⚡</p>"));
        assert!(html.contains("id=\"site-footer\""));
    }
}
