use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash, FaUsers};
use dioxus_free_icons::Icon;

use crate::client::view::FlightCardView;

#[component]
pub fn FlightCard(
    card: FlightCardView,
    on_bookings: EventHandler<()>,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let badge_class = card.badge.class();
    let badge_label = card.badge.label();

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                div { class: "flex items-start justify-between gap-2",
                    h2 { class: "card-title", "{card.destination}" }
                    span { class: "badge {badge_class}", "{badge_label}" }
                }
                p { "Departure: {card.departure}" }
                p { "Airplane: {card.airplane_name}" }
                p { class: "text-sm opacity-70", "{card.capacity_label}" }
                div { class: "flex gap-4 text-sm",
                    span { "Free seats: {card.available_seats}" }
                    span { "Bookings: {card.bookings_count}" }
                }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-sm btn-primary flex gap-2",
                        onclick: move |_| on_bookings.call(()),
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaUsers
                        }
                        "Bookings"
                    }
                    button {
                        class: "btn btn-sm btn-outline",
                        title: "Edit flight",
                        onclick: move |_| on_edit.call(()),
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaPen
                        }
                    }
                    button {
                        class: "btn btn-sm btn-outline btn-error",
                        title: "Delete flight",
                        onclick: move |_| on_delete.call(()),
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaTrash
                        }
                    }
                }
            }
        }
    )
}
