//! Filter dialog - Pick a column and the exact value to keep

use egui::Context;

use crate::core::{Action, Column};
use crate::ui::dialogs::{closed_or, DialogResponse};

/// Input of the filter dialog
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    pub columns: Vec<Column>,
    pub column: Option<Column>,
    pub value: String,
}

impl FilterForm {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }
}

pub fn render(ctx: &Context, form: &mut FilterForm) -> DialogResponse {
    let mut open = true;
    let mut response = DialogResponse::Open;

    egui::Window::new("Filter Data")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(300.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Filter By:").strong());
            });
            ui.add_space(4.0);

            egui::ComboBox::from_id_salt("filter_column")
                .width(ui.available_width())
                .selected_text(form.column.map(|c| c.label()).unwrap_or(""))
                .show_ui(ui, |ui| {
                    for column in &form.columns {
                        let selected = form.column == Some(*column);
                        if ui.selectable_label(selected, column.label()).clicked() {
                            form.column = Some(*column);
                        }
                    }
                });

            ui.add_space(8.0);
            ui.label("Value:");
            ui.add(egui::TextEdit::singleline(&mut form.value).desired_width(f32::INFINITY));

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    response = DialogResponse::Dispatch(Action::FilterSubmitted {
                        column: form.column,
                        value: form.value.clone(),
                    });
                }
                if ui.button("Clear").clicked() {
                    response = DialogResponse::Dispatch(Action::FilterCleared);
                }
            });
        });

    closed_or(open, response)
}
