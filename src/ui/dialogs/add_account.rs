//! Add (demo) master account dialog

use egui::Context;

use crate::core::{AppState, NewAccount};
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::dialogs::{closed_or, DialogResponse};
use crate::ui::theme::Theme;

pub fn render(
    ctx: &Context,
    form: &mut NewAccount,
    state: &mut AppState,
    notifications: &mut Vec<Notification>,
) -> DialogResponse {
    let mut open = true;
    let mut response = DialogResponse::Open;

    egui::Window::new(form.title())
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(400.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Account Details").heading().strong());
            });
            ui.add_space(10.0);

            egui::Grid::new("add_account_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for (label, value, secret) in form.fields_mut() {
                        ui.label(label);
                        ui.add(
                            egui::TextEdit::singleline(value)
                                .password(secret)
                                .desired_width(220.0),
                        );
                        ui.end_row();
                    }
                });

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.checkbox(&mut form.is_demo, "Demo Account");
            });
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("New accounts are kept for this session only.")
                    .small()
                    .color(Theme::TEXT_MUTED),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Create").clicked() {
                    match state.create_account(form.clone()) {
                        Ok(_) => {
                            notifications.push(Notification::new(
                                "Account created successfully!",
                                NotificationLevel::Success,
                            ));
                            response = DialogResponse::Close;
                        }
                        Err(e) => {
                            notifications.push(Notification::new(
                                e.to_string(),
                                NotificationLevel::Error,
                            ));
                        }
                    }
                }

                if ui.button("Cancel").clicked() {
                    response = DialogResponse::Close;
                }
            });
        });

    closed_or(open, response)
}
