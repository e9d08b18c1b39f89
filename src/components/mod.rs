//! Shared building blocks for the site's pages.

mod footer;
pub use footer::SiteFooter;

mod header;
pub use header::SiteHeader;

mod hero;
pub use hero::Hero;

mod layout;
pub use layout::{PageHead, RootLayout};

mod site_link;
pub use site_link::SiteLink;
