//! Language chooser

use anyhow::Result;
use egui::Context;

use crate::core::settings::Language;
use crate::core::AppState;
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::dialogs::{closed_or, DialogResponse};

pub fn render(
    ctx: &Context,
    state: &mut AppState,
    notifications: &mut Vec<Notification>,
) -> DialogResponse {
    let mut open = true;
    let mut response = DialogResponse::Open;
    let current = state.settings.language;

    egui::Window::new("Select Language")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(300.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                for language in Language::all() {
                    let button = egui::Button::new(language.label())
                        .selected(*language == current)
                        .min_size(egui::vec2(160.0, 26.0));
                    if ui.add(button).clicked() {
                        let result = state.set_language(*language);
                        notifications.push(change_notice(*language, &result));
                        response = DialogResponse::Close;
                    }
                }
            });
        });

    closed_or(open, response)
}

/// Toast for a language change, or the save error when it could not be stored
fn change_notice(language: Language, result: &Result<()>) -> Notification {
    match result {
        Ok(()) => Notification::new(
            format!("Language changed to {}", language.label()),
            NotificationLevel::Info,
        ),
        Err(e) => {
            tracing::error!("Failed to save language: {}", e);
            Notification::new(
                format!("Failed to save language: {}", e),
                NotificationLevel::Error,
            )
        }
    }
}
