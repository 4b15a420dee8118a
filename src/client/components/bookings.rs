use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaShuffle, FaTrash};
use dioxus_free_icons::Icon;

use crate::client::{
    app::AppConsole,
    components::PendingDelete,
    service::Outcome,
    view::{BookingTableView, CandidateListView},
    workflow::DestinationChoice,
};

/// Booking list of the open flight, with the add-booking form and the transfer section.
#[component]
pub fn BookingsModal(pending: Signal<Option<PendingDelete>>) -> Element {
    let console = use_context::<AppConsole>();
    let mut pending = pending;
    let mut passenger_name = use_signal(String::new);

    let (destination, table, choice) = {
        let workflow = console.transfer.read();
        let Some(panel) = workflow.panel() else {
            return rsx!();
        };

        (
            panel.flight.destination.clone(),
            BookingTableView::build(&panel.bookings),
            workflow.choice().cloned(),
        )
    };
    let chosen_id = choice.as_ref().map(|c| c.booking.id.clone());

    let close = {
        let console = console.clone();
        move |_: MouseEvent| console.close_flight()
    };

    let add_booking = {
        let console = console.clone();
        move |_: MouseEvent| {
            let console = console.clone();
            spawn(async move {
                let name = passenger_name.peek().clone();
                if console.create_booking(&name).await == Outcome::Completed {
                    passenger_name.set(String::new());
                }
            });
        }
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-3xl",
                h3 { class: "text-lg font-bold", "Bookings: {destination}" }
                div { class: "overflow-x-auto py-2",
                    table {
                        class: "table table-md",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Passenger" }
                                th { }
                            }
                        }
                        tbody {
                            {match table {
                                BookingTableView::Empty { text } => rsx!(
                                    tr {
                                        td { colspan: 3, class: "text-center opacity-70", "{text}" }
                                    }
                                ),
                                BookingTableView::Rows(rows) => rsx!(
                                    for row in rows {
                                        tr {
                                            key: "{row.id}",
                                            class: if chosen_id.as_deref() == Some(row.id.as_str()) { "bg-base-200" } else { "" },
                                            td { class: "font-mono", "{row.short_id}" }
                                            td { "{row.passenger_name}" }
                                            td { class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm btn-outline flex gap-2",
                                                    onclick: {
                                                        let console = console.clone();
                                                        let booking_id = row.id.clone();
                                                        move |_| {
                                                            let console = console.clone();
                                                            let booking_id = booking_id.clone();
                                                            spawn(async move {
                                                                console.choose_booking(&booking_id).await;
                                                            });
                                                        }
                                                    },
                                                    Icon {
                                                        width: 16,
                                                        height: 16,
                                                        icon: FaShuffle
                                                    }
                                                    "Transfer"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-outline btn-error",
                                                    title: "Delete booking",
                                                    onclick: {
                                                        let console = console.clone();
                                                        let booking_id = row.id.clone();
                                                        move |_| {
                                                            if let Some(prompt) = console.delete_booking_prompt(&booking_id) {
                                                                pending.set(Some(PendingDelete::Booking {
                                                                    id: booking_id.clone(),
                                                                    prompt,
                                                                }));
                                                            }
                                                        }
                                                    },
                                                    Icon {
                                                        width: 16,
                                                        height: 16,
                                                        icon: FaTrash
                                                    }
                                                }
                                            }
                                        }
                                    }
                                ),
                            }}
                        }
                    }
                }

                if let Some(choice) = choice {
                    TransferSection { choice: choice }
                }

                div { class: "flex gap-2 pt-4",
                    input {
                        class: "input flex-1",
                        placeholder: "Passenger full name",
                        value: "{passenger_name}",
                        oninput: move |e| passenger_name.set(e.value()),
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        onclick: add_booking,
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaPlus
                        }
                        "Add booking"
                    }
                }

                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: close,
                        "Close"
                    }
                }
            }
        }
    )
}

#[component]
fn TransferSection(choice: DestinationChoice) -> Element {
    let console = use_context::<AppConsole>();
    let submitting = console.transfer.read().is_submitting();
    let options = CandidateListView::build(&choice.candidates);
    let selection = choice.selection.clone().unwrap_or_default();
    let can_submit = choice.can_submit() && !submitting;
    let passenger = choice.booking.passenger_name.clone();

    let select = {
        let console = console.clone();
        move |e: FormEvent| {
            console.select_destination(&e.value());
        }
    };

    let submit = {
        let console = console.clone();
        move |_: MouseEvent| {
            let console = console.clone();
            spawn(async move {
                console.submit_transfer().await;
            });
        }
    };

    let cancel = move |_: MouseEvent| {
        console.cancel_transfer();
    };

    rsx!(
        div { class: "card bg-base-200 mt-2",
            div { class: "card-body gap-2",
                h4 { class: "font-semibold",
                    "Transfer {passenger} to another flight"
                }
                {match options {
                    CandidateListView::Empty { text } => rsx!(
                        p { class: "opacity-70", "{text}" }
                    ),
                    CandidateListView::Options(options) => rsx!(
                        select {
                            class: "select w-full",
                            disabled: submitting,
                            onchange: select,
                            option { value: "", selected: selection.is_empty(), "Select a new flight" }
                            for candidate in options {
                                option {
                                    value: "{candidate.id}",
                                    selected: selection == candidate.id,
                                    "{candidate.label}"
                                }
                            }
                        }
                    ),
                }}
                div { class: "flex gap-2 justify-end",
                    button {
                        class: "btn btn-sm",
                        disabled: submitting,
                        onclick: cancel,
                        "Cancel"
                    }
                    button {
                        class: "btn btn-sm btn-primary",
                        disabled: !can_submit,
                        onclick: submit,
                        "Transfer"
                    }
                }
            }
        }
    )
}
