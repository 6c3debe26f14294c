mod app;
mod components;
mod config;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    utils::log::init();

    mount_to_body(App);
}
