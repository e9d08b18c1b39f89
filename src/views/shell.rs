use crate::components::RootLayout;
use crate::Route;
use dioxus::prelude::*;

/// Route layout placing the active page inside the [`RootLayout`] shell.
#[component]
pub fn Shell() -> Element {
    rsx! {
        RootLayout {
            Outlet::<Route> {}
        }
    }
}
