//! User interface module - egui-based dashboard

mod app;
mod components;
mod dialogs;
mod panels;
mod theme;

pub use app::DashboardApp;
