//! Edit account dialog - Shows the selected row's current values

use egui::Context;

use crate::core::{AccountRow, Column};
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::dialogs::{closed_or, DialogResponse};
use crate::ui::theme::Theme;

pub fn render(
    ctx: &Context,
    row: &AccountRow,
    notifications: &mut Vec<Notification>,
) -> DialogResponse {
    let mut open = true;
    let mut response = DialogResponse::Open;

    egui::Window::new(format!("Edit Account: {}", row.login))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("edit_account_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .striped(true)
                .show(ui, |ui| {
                    for column in Column::all() {
                        ui.label(egui::RichText::new(column.label()).color(Theme::TEXT_SECONDARY));
                        ui.label(row.value(*column));
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("Changes to master accounts cannot be saved from this view.")
                    .small()
                    .color(Theme::TEXT_MUTED),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    tracing::info!("Edit requested for account {}", row.login);
                    notifications.push(Notification::new(
                        format!("Account {} left unchanged", row.login),
                        NotificationLevel::Info,
                    ));
                    response = DialogResponse::Close;
                }
                if ui.button("Close").clicked() {
                    response = DialogResponse::Close;
                }
            });
        });

    closed_or(open, response)
}
