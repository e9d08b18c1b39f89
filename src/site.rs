//! Static content of the landing site: page metadata, navigation and copy.

use serde::Serialize;
use serde_json::{json, Value};

/// Language of every rendered document.
pub const DOCUMENT_LANG: &str = "en";

pub const BRAND_MARK: &str = "⚡";
pub const BRAND_NAME: &str = "Proof";

pub const HERO_HEADING_LEAD: &str = "Work for ";
pub const HERO_HEADING_ACCENT: &str = "Bitcoin";
pub const HERO_SUBHEADING: &str =
    "The professional network where reputation is portable and payments are instant.";

pub const FOOTER_TAGLINE: &str = "Built on Bitcoin, Nostr & Lightning ⚡";

/// Title and description applied to the document head of every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SITE_METADATA: PageMetadata = PageMetadata {
    title: "Proof - Bitcoin Professional Network",
    description: "Find work. Get paid in sats.",
};

impl PageMetadata {
    /// schema.org `WebSite` record emitted as JSON-LD in the head.
    pub fn structured_data(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": self.title,
            "description": self.description,
            "inLanguage": DOCUMENT_LANG,
        })
    }
}

/// Visual treatment of a link. Header navigation uses `Plain` and `Button`,
/// the hero's calls to action use `Primary` and `Outlined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    Plain,
    Button,
    Primary,
    Outlined,
}

impl LinkStyle {
    pub fn class(self) -> &'static str {
        match self {
            LinkStyle::Plain => "link-plain",
            LinkStyle::Button => "link-button",
            LinkStyle::Primary => "link-primary",
            LinkStyle::Outlined => "link-outlined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
    pub style: LinkStyle,
}

pub const HEADER_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Jobs",
        target: "/jobs",
        style: LinkStyle::Plain,
    },
    NavLink {
        label: "Dashboard",
        target: "/dashboard",
        style: LinkStyle::Button,
    },
];

pub const CALLS_TO_ACTION: [NavLink; 2] = [
    NavLink {
        label: "Find Work",
        target: "/jobs",
        style: LinkStyle::Primary,
    },
    NavLink {
        label: "Post a Job",
        target: "/jobs/new",
        style: LinkStyle::Outlined,
    },
];

/// Every link on the home page, in render order.
pub fn page_links() -> impl Iterator<Item = &'static NavLink> {
    HEADER_LINKS.iter().chain(CALLS_TO_ACTION.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_is_constant() {
        assert_eq!(SITE_METADATA.title, "Proof - Bitcoin Professional Network");
        assert_eq!(SITE_METADATA.description, "Find work. Get paid in sats.");
        assert_eq!(SITE_METADATA.structured_data(), SITE_METADATA.structured_data());
    }

    #[test]
    fn home_page_has_exactly_four_links() {
        let pairs: Vec<(&str, &str)> = page_links().map(|l| (l.label, l.target)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Jobs", "/jobs"),
                ("Dashboard", "/dashboard"),
                ("Find Work", "/jobs"),
                ("Post a Job", "/jobs/new"),
            ]
        );
    }

    #[test]
    fn emphasized_links_are_styled() {
        assert_eq!(HEADER_LINKS[1].style.class(), "link-button");
        assert_eq!(CALLS_TO_ACTION[0].style.class(), "link-primary");
        assert_eq!(CALLS_TO_ACTION[1].style.class(), "link-outlined");
        assert_eq!(HEADER_LINKS[0].style.class(), "link-plain");
    }

    #[test]
    fn footer_tagline_is_exact() {
        assert_eq!(FOOTER_TAGLINE, "Built on Bitcoin, Nostr & Lightning ⚡");
    }

    #[test]
    fn structured_data_carries_metadata() {
        let data = SITE_METADATA.structured_data();
        assert_eq!(data["@type"], "WebSite");
        assert_eq!(data["name"], SITE_METADATA.title);
        assert_eq!(data["description"], SITE_METADATA.description);
        assert_eq!(data["inLanguage"], "en");
    }

    #[test]
    fn nav_link_serializes_style_lowercase() {
        let value = serde_json::to_value(CALLS_TO_ACTION[1]).unwrap();
        assert_eq!(value["label"], "Post a Job");
        assert_eq!(value["style"], "outlined");
    }
}
