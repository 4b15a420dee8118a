use dioxus::prelude::*;

/// A delete waiting for the user's confirmation.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingDelete {
    Flight { id: String, prompt: String },
    Booking { id: String, prompt: String },
}

impl PendingDelete {
    pub fn prompt(&self) -> &str {
        match self {
            PendingDelete::Flight { prompt, .. } | PendingDelete::Booking { prompt, .. } => prompt,
        }
    }
}

#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "modal modal-open z-50",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "Confirm deletion" }
                p { class: "py-4 whitespace-pre-line", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    )
}
