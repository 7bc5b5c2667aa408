//! prodsearch app — Dioxus-powered product search.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod detail;
mod error_banner;
mod results;
mod search;
mod state;

use app::App;
use prodsearch_core::ClientConfig;

/// Config loaded before Dioxus launches, taken by the client signal.
pub static INITIAL_CONFIG: Mutex<Option<ClientConfig>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("prodsearch=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::load(None);
    tracing::info!(api = %config.search_url(), "search endpoint");
    if let Ok(mut slot) = INITIAL_CONFIG.lock() {
        *slot = Some(config);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((250, 250, 250, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Product Search")
                            .with_inner_size(LogicalSize::new(1280.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
