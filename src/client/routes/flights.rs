use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::client::{
    app::AppConsole,
    components::{
        BookingsModal, ConfirmDialog, FilterBar, FlightCard, FlightFormModal, Page, PendingDelete,
    },
    filter::{filter_flights, FlightFilter},
    service::FlightForm,
    view::{airplane_filter_options, FlightListView},
};

#[component]
pub fn Flights() -> Element {
    let console = use_context::<AppConsole>();
    let filter = use_signal(FlightFilter::default);
    let mut form = use_signal(|| None::<FlightForm>);
    let mut pending = use_signal(|| None::<PendingDelete>);

    let (view, airplanes) = {
        let fleet = console.fleet.read();
        let filter = filter.read();

        (
            FlightListView::build(filter_flights(fleet.flights(), &filter)),
            airplane_filter_options(fleet.flights()),
        )
    };

    let add_flight = {
        let console = console.clone();
        move |_: MouseEvent| {
            form.set(Some(FlightForm::default()));

            let console = console.clone();
            spawn(async move {
                console.ensure_airplanes().await;
            });
        }
    };

    let refresh = {
        let console = console.clone();
        move |_: MouseEvent| {
            let console = console.clone();
            spawn(async move {
                console.refresh_flights().await;
            });
        }
    };

    let confirm_delete = {
        let console = console.clone();
        move |_: ()| {
            let Some(target) = pending.take() else {
                return;
            };

            let console = console.clone();
            spawn(async move {
                match target {
                    PendingDelete::Flight { id, .. } => console.delete_flight(&id).await,
                    PendingDelete::Booking { id, .. } => console.delete_booking(&id).await,
                };
            });
        }
    };

    let prompt = pending.read().as_ref().map(|p| p.prompt().to_string());

    rsx!(
        document::Title { "Flights | Flight Desk" }
        Page {
            title: "Flights",
            actions: rsx!(
                button {
                    class: "btn btn-outline",
                    onclick: refresh,
                    "Refresh"
                }
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: add_flight,
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaPlus
                    }
                    "Add flight"
                }
            ),
            FilterBar { filter: filter, airplanes: airplanes }

            {match view {
                FlightListView::Empty { title, hint } => rsx!(
                    div { class: "flex flex-col items-center gap-2 py-16 opacity-70",
                        p { class: "text-xl", "{title}" }
                        p { "{hint}" }
                    }
                ),
                FlightListView::Cards(cards) => rsx!(
                    div { class: "grid gap-4 sm:grid-cols-2 xl:grid-cols-3",
                        for card in cards {
                            FlightCard {
                                key: "{card.id}",
                                card: card.clone(),
                                on_bookings: {
                                    let console = console.clone();
                                    let flight_id = card.id.clone();
                                    let destination = card.destination.clone();
                                    move |_| {
                                        let console = console.clone();
                                        let flight_id = flight_id.clone();
                                        let destination = destination.clone();
                                        spawn(async move {
                                            console.open_flight(&flight_id, &destination).await;
                                        });
                                    }
                                },
                                on_edit: {
                                    let console = console.clone();
                                    let flight_id = card.id.clone();
                                    move |_| {
                                        let draft = console
                                            .fleet
                                            .peek()
                                            .find_flight(&flight_id)
                                            .map(FlightForm::edit);
                                        if draft.is_some() {
                                            form.set(draft);

                                            let console = console.clone();
                                            spawn(async move {
                                                console.ensure_airplanes().await;
                                            });
                                        }
                                    }
                                },
                                on_delete: {
                                    let console = console.clone();
                                    let flight_id = card.id.clone();
                                    move |_| {
                                        if let Some(prompt) = console.delete_flight_prompt(&flight_id) {
                                            pending.set(Some(PendingDelete::Flight {
                                                id: flight_id.clone(),
                                                prompt,
                                            }));
                                        }
                                    }
                                },
                            }
                        }
                    }
                ),
            }}

            BookingsModal { pending: pending }
            FlightFormModal { form: form }

            if let Some(prompt) = prompt {
                ConfirmDialog {
                    message: prompt,
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    )
}
