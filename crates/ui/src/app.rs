use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

/// Initial OS window title. The sheet screen adds the question count.
pub const WINDOW_TITLE: &str = "Interactive OMR Sheet";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
