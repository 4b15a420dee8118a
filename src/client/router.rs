use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Airplanes, Flights, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Flights {},

    #[route("/airplanes")]
    Airplanes {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
