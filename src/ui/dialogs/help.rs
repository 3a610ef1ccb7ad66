//! Help window

use egui::Context;

use crate::ui::dialogs::{closed_or, DialogResponse};
use crate::ui::theme::Theme;

const SUPPORT_URL: &str = "https://help.metaquotes.net";

const SECTIONS: &[(&str, &[&str])] = &[
    (
        "1. Account Management",
        &[
            "Add new master accounts",
            "Monitor account status",
            "Manage permissions",
        ],
    ),
    ("2. Server Settings", &["Configure connection", "Set up security"]),
];

pub fn render(ctx: &Context) -> DialogResponse {
    let mut window_open = true;
    let mut response = DialogResponse::Open;

    egui::Window::new("Help")
        .open(&mut window_open)
        .collapsible(false)
        .resizable(true)
        .default_width(400.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("MT5 Administrator Help").heading().strong());
            ui.add_space(12.0);

            for (title, items) in SECTIONS {
                ui.label(egui::RichText::new(*title).strong());
                for item in *items {
                    ui.label(format!("  - {}", item));
                }
                ui.add_space(8.0);
            }

            ui.label(egui::RichText::new("3. Support").strong());
            ui.horizontal(|ui| {
                ui.label("  Visit:");
                if ui.link(SUPPORT_URL).clicked() {
                    if let Err(e) = open::that(SUPPORT_URL) {
                        tracing::warn!("Failed to open {}: {}", SUPPORT_URL, e);
                    }
                }
            });

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(format!("v{}", crate::APP_VERSION))
                    .small()
                    .color(Theme::TEXT_MUTED),
            );
            if ui.button("Close").clicked() {
                response = DialogResponse::Close;
            }
        });

    closed_or(window_open, response)
}
