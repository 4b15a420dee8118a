use dioxus::prelude::*;

use crate::client::{
    app::AppConsole,
    components::{AirplaneTable, Page},
    view::AirplaneTableView,
};

#[component]
pub fn Airplanes() -> Element {
    let console = use_context::<AppConsole>();
    let view = AirplaneTableView::build(console.fleet.read().airplanes());

    let refresh = move |_: MouseEvent| {
        let console = console.clone();
        spawn(async move {
            console.refresh_airplanes().await;
        });
    };

    rsx!(
        document::Title { "Airplanes | Flight Desk" }
        Page {
            title: "Airplanes",
            actions: rsx!(
                button {
                    class: "btn btn-outline",
                    onclick: refresh,
                    "Refresh"
                }
            ),
            AirplaneTable { view: view }
        }
    )
}
