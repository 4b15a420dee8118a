use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlane;
use dioxus_free_icons::Icon;

use crate::client::{
    app::AppConsole,
    components::{LoadingOverlay, NoticeToast},
    router::Route,
    store::ApiStatus,
    view::prompt::summary_line,
};

#[component]
fn StatusBadge() -> Element {
    let console = use_context::<AppConsole>();

    let (class, label, title) = match &*console.status.read() {
        ApiStatus::Unknown => ("badge badge-ghost", "Checking API", String::new()),
        ApiStatus::Online(status) => (
            "badge badge-success",
            "API online",
            status.database.clone().unwrap_or_default(),
        ),
        ApiStatus::Offline(reason) => ("badge badge-error", "API offline", reason.clone()),
    };

    rsx!(
        span { class: class, title: title, "{label}" }
    )
}

#[component]
pub fn Navbar() -> Element {
    let console = use_context::<AppConsole>();
    let summary = summary_line(&console.fleet.read().stats());

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start gap-4",
                Link { to: Route::Flights {},
                    div { class: "flex items-center gap-2",
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaPlane
                        }
                        p { class: "text-xl",
                            "Flight Desk"
                        }
                    }
                }
                div { role: "tablist", class: "tabs tabs-box",
                    Link {
                        to: Route::Flights {},
                        class: "tab",
                        active_class: "tab-active",
                        "Flights"
                    }
                    Link {
                        to: Route::Airplanes {},
                        class: "tab",
                        active_class: "tab-active",
                        "Airplanes"
                    }
                }
            }
            div {
                class: "navbar-end gap-4",
                p { class: "text-sm hidden md:block",
                    "{summary}"
                }
                StatusBadge {}
            }
        }

        NoticeToast {}
        LoadingOverlay {}

        Outlet::<Route> {}
    }
}
