use dioxus::prelude::*;

use crate::client::app::AppConsole;

/// Blocks the page while a labelled action is running.
#[component]
pub fn LoadingOverlay() -> Element {
    let console = use_context::<AppConsole>();
    let label = console.activity.read().label().map(str::to_string);

    rsx!(
        if let Some(label) = label {
            div { class: "fixed inset-0 z-40 flex items-center justify-center bg-base-300/60",
                div { class: "flex flex-col items-center gap-2",
                    span { class: "loading loading-spinner loading-lg" }
                    p { "{label}" }
                }
            }
        }
    )
}
