use dioxus::prelude::*;

use crate::client::{
    app::AppConsole,
    service::{FlightForm, Outcome},
    view::format::seats_label,
};

/// Add/edit flight dialog, shown while `form` holds a draft.
#[component]
pub fn FlightFormModal(form: Signal<Option<FlightForm>>) -> Element {
    let console = use_context::<AppConsole>();
    let mut form = form;

    let Some(draft) = form.read().clone() else {
        return rsx!();
    };

    let airplanes: Vec<(String, String)> = console
        .fleet
        .read()
        .airplanes()
        .iter()
        .map(|a| (a.id.clone(), format!("{} ({})", a.name, seats_label(a.capacity as i64))))
        .collect();

    let title = if draft.is_edit() {
        "Edit flight"
    } else {
        "New flight"
    };

    let submit = move |_: MouseEvent| {
        let console = console.clone();
        spawn(async move {
            let Some(draft) = form.peek().clone() else {
                return;
            };

            if console.save_flight(&draft).await == Outcome::Completed {
                form.set(None);
            }
        });
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "{title}" }
                fieldset { class: "fieldset",
                    label { class: "label", "Departure" }
                    input {
                        class: "input w-full",
                        r#type: "datetime-local",
                        value: "{draft.departure_datetime}",
                        oninput: move |e| {
                            if let Some(draft) = form.write().as_mut() {
                                draft.departure_datetime = e.value();
                            }
                        },
                    }
                    label { class: "label", "Destination" }
                    input {
                        class: "input w-full",
                        placeholder: "City",
                        value: "{draft.destination}",
                        oninput: move |e| {
                            if let Some(draft) = form.write().as_mut() {
                                draft.destination = e.value();
                            }
                        },
                    }
                    label { class: "label", "Airplane" }
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Some(draft) = form.write().as_mut() {
                                draft.airplane_id = e.value();
                            }
                        },
                        option { value: "", selected: draft.airplane_id.is_empty(), "Select an airplane" }
                        for (id, label) in airplanes {
                            option {
                                value: "{id}",
                                selected: draft.airplane_id == id,
                                "{label}"
                            }
                        }
                    }
                }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| form.set(None),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: submit,
                        "Save"
                    }
                }
            }
        }
    )
}
