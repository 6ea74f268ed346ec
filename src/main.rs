//! Employee Directory Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod directory;
mod error;
mod filter;
mod form;
mod format;
mod models;
mod repository;
mod routes;
mod sort;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(AppConfig::default().log_level);
    mount_to_body(App);
}
