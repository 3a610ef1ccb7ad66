//! MT5 Admin - Administrative dashboard for master accounts
//!
//! A desktop dashboard with a sortable, filterable master accounts table,
//! server settings, and account creation dialogs.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod core;
mod persistence;
mod ui;

use anyhow::Result;
use single_instance::SingleInstance;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::AppState;
use crate::persistence::Database;
use crate::ui::DashboardApp;

/// Application name constant
pub const APP_NAME: &str = "MT5 Admin Dashboard";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Initialize database first so logging can honour the stored settings
    let db = Database::new()?;
    db.initialize()?;
    let debug_logging = db
        .load_settings()
        .ok()
        .flatten()
        .map(|s| s.debug_logging)
        .unwrap_or(false);

    init_logging(debug_logging);

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    // Ensure only one dashboard is running
    let instance = SingleInstance::new("mt5admin")?;
    if !instance.is_single() {
        error!("Another instance of {} is already running!", APP_NAME);
        show_already_running_dialog();
        return Ok(());
    }

    // Create application state
    let app_state = AppState::new(db)?;
    info!("Application state initialized");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0])
            .with_maximized(true),
        ..Default::default()
    };

    info!("Starting GUI...");
    eframe::run_native(
        "MT5 Admin Dashboard",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, app_state)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging(debug: bool) {
    let default = if debug {
        "mt5admin=debug,eframe=warn,egui=warn"
    } else {
        "mt5admin=info,eframe=warn,egui=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Show dialog when another dashboard is already running
fn show_already_running_dialog() {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(APP_NAME)
        .set_description(format!("{} is already running!", APP_NAME))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
