//! AI Studio
//!
//! A desktop front-end for prompt-driven text, image and code generation.

mod app;
mod components;
mod config;
mod constants;
mod core;
mod error;
mod icons;
mod providers;
mod state;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};
use crate::providers::{BackendHandle, SupabaseFunctions};

fn main() {
    let config = AppConfig::from_env();
    let log_filter = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_filter.clone());
    init_tracing(log_filter.as_deref());

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration, using defaults");
            AppConfig::default()
        }
    };
    for missing in config.missing() {
        tracing::warn!("{}; generation requests will fail", missing);
    }

    let backend = BackendHandle::new(SupabaseFunctions::new(&config.backend));

    let window = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("AI Studio")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None);

    tracing::info!("launching AI Studio");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(backend)
        .launch(app::App);
}

/// `RUST_LOG` wins, then `AI_STUDIO_LOG`, then the built-in default.
fn init_tracing(configured: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| configured.unwrap_or(DEFAULT_LOG_FILTER).into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
