use dioxus::prelude::*;

use crate::client::filter::{Availability, FlightFilter};

/// Search, airplane and availability controls over the flight grid.
///
/// Every change rewrites `filter`; the grid re-filters the cached flights without a request.
#[component]
pub fn FilterBar(filter: Signal<FlightFilter>, airplanes: Vec<String>) -> Element {
    let mut filter = filter;
    let current = filter.read().clone();

    rsx!(
        div { class: "flex flex-wrap items-center gap-2",
            input {
                class: "input",
                r#type: "search",
                placeholder: "Search by destination",
                value: "{current.search}",
                oninput: move |e| filter.write().search = e.value(),
            }
            select {
                class: "select",
                onchange: move |e| {
                    let value = e.value();
                    filter.write().airplane = if value.is_empty() { None } else { Some(value) };
                },
                option { value: "", selected: current.airplane.is_none(), "All airplanes" }
                for name in airplanes {
                    option {
                        value: "{name}",
                        selected: current.airplane.as_deref() == Some(name.as_str()),
                        "{name}"
                    }
                }
            }
            select {
                class: "select",
                onchange: move |e| {
                    filter.write().availability = Availability::from_value(&e.value());
                },
                option {
                    value: Availability::Any.as_value(),
                    selected: current.availability == Availability::Any,
                    "Any availability"
                }
                option {
                    value: Availability::AvailableOnly.as_value(),
                    selected: current.availability == Availability::AvailableOnly,
                    "With free seats"
                }
                option {
                    value: Availability::FullOnly.as_value(),
                    selected: current.availability == Availability::FullOnly,
                    "Full"
                }
            }
            if !current.is_empty() {
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| filter.set(FlightFilter::default()),
                    "Clear filters"
                }
            }
        }
    )
}
