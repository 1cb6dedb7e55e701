#![allow(non_snake_case)]

use dioxus::prelude::*;

mod components;
mod connectivity;
mod constants;
mod util;

use components::app::App;

fn main() {
    dioxus::logger::initialize_default();

    launch(App);
}
