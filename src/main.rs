//! Client Intake Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Trace);

    let config = AppConfig::load();
    log::set_max_level(config.log_level.to_level_filter());
    log::info!("Using API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
