use crate::components::{Hero, SiteFooter, SiteHeader};
use dioxus::prelude::*;

/// The Home page component that will be rendered when the current route is `[Route::Home]`
#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            SiteHeader {}
            Hero {}
            SiteFooter {}
        }
    }
}
