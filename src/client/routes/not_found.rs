use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Page { class: "items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl", "Page not found" }
                p { class: "opacity-70", "{path}" }
                Link {
                    to: Route::Flights {},
                    class: "btn btn-primary",
                    "Back to flights"
                }
            }
        }
    )
}
