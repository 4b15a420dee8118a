#![allow(non_snake_case)]

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(flightdesk::client::App);
}
