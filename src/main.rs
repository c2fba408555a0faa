//! Smite Dashboard - Main Entry Point
//!
//! Administrative dashboard for Smite VPN tunnel infrastructure

use smite_dashboard::app::application::run_app;
use smite_dashboard::utils::{config_store, logging};

fn main() {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init_logging(config_store::log_dir().ok());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Smite Dashboard...");

    let config = config_store::load_or_default();

    // Run the GPUI application
    run_app(config);
}
