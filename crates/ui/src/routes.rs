use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{PromptView, SheetView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PromptView)] Prompt {},
        #[route("/sheet/:count", SheetView)] Sheet { count: u16 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
