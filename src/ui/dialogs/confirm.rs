//! Confirmation dialog

use egui::Context;

use crate::core::Action;
use crate::ui::dialogs::{closed_or, DialogResponse};
use crate::ui::theme::Theme;

pub fn render(ctx: &Context, title: &str, message: &str, on_confirm: &Action) -> DialogResponse {
    let mut open = true;
    let mut response = DialogResponse::Open;

    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(350.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("Yes").color(Theme::ERROR))
                    .clicked()
                {
                    response = DialogResponse::Dispatch(on_confirm.clone());
                }

                if ui.button("No").clicked() {
                    response = DialogResponse::Close;
                }
            });
        });

    closed_or(open, response)
}
