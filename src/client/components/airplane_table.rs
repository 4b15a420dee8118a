use dioxus::prelude::*;

use crate::client::view::AirplaneTableView;

#[component]
pub fn AirplaneTable(view: AirplaneTableView) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Capacity" }
                    }
                }
                tbody {
                    {match view {
                        AirplaneTableView::Empty { text } => rsx!(
                            tr {
                                td { colspan: 3, class: "text-center opacity-70", "{text}" }
                            }
                        ),
                        AirplaneTableView::Rows(rows) => rsx!(
                            {rows.iter().map(|row| rsx!(
                                tr {
                                    td { class: "font-mono", "{row.short_id}" }
                                    td { "{row.name}" }
                                    td { "{row.capacity_label}" }
                                }
                            ))}
                        ),
                    }}
                }
            }
        }
    )
}
