use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::client::{app::AppConsole, store::Notice};

/// Shows the current notice. Keyed by notice ID so each new notice restarts the timer.
#[component]
pub fn NoticeToast() -> Element {
    let console = use_context::<AppConsole>();
    let notice = console.notices.read().current().cloned();

    rsx!(
        if let Some(notice) = notice {
            NoticeAlert { key: "{notice.id}", notice: notice }
        }
    )
}

#[component]
fn NoticeAlert(notice: Notice) -> Element {
    let console = use_context::<AppConsole>();
    let mut notices = console.notices;
    let id = notice.id;
    let alert_class = notice.level.alert_class();

    use_hook(|| {
        let timeout_ms = console.config().notice_timeout_ms;
        spawn(async move {
            TimeoutFuture::new(timeout_ms).await;
            notices.write().dismiss(id);
        });
    });

    rsx!(
        div { class: "toast toast-top toast-end z-30 mt-16",
            div {
                role: "alert",
                class: "alert {alert_class}",
                span { "{notice.message}" }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| {
                        notices.write().dismiss(id);
                    },
                    "Close"
                }
            }
        }
    )
}
