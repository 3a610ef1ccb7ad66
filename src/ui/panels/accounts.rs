//! Accounts panel - Sortable master accounts table with a right-click menu

use egui::{RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::core::{Action, AppState, Column, ContextAction, SortState};
use crate::ui::components::flag_badge::FlagBadge;
use crate::ui::theme::{Icons, Theme};

/// Draw the table and collect what the user did with it this frame
pub fn render(ui: &mut Ui, state: &AppState) -> Vec<Action> {
    let mut actions = Vec::new();
    let rows = state.current_view();

    // Summary line with the active filter
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{} of {} accounts", rows.len(), state.table.len()))
                .color(Theme::TEXT_SECONDARY),
        );

        if let Some(filter) = state.table.filter() {
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!(
                    "{} {} = \"{}\"",
                    Icons::FILTER,
                    filter.column,
                    filter.value
                ))
                .color(Theme::PRIMARY),
            );
            if ui.small_button(Icons::CLOSE).on_hover_text("Clear filter").clicked() {
                actions.push(Action::FilterCleared);
            }
        }

        if state.sort_state().is_some() {
            ui.add_space(12.0);
            if ui
                .small_button("Clear sort")
                .on_hover_text("Show accounts in their original order")
                .clicked()
            {
                actions.push(Action::SortCleared);
            }
        }

        if !state.selection.is_empty() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{} selected", state.selection.len()))
                        .small()
                        .color(Theme::TEXT_MUTED),
                );
            });
        }
    });

    ui.add_space(4.0);

    let row_height = state.settings.row_height;
    let multi_select = ui.input(|i| i.modifiers.command || i.modifiers.shift);

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .min_scrolled_height(0.0)
        .auto_shrink([false, false]);
    for _ in Column::all() {
        builder = builder.column(TableColumn::initial(100.0).at_least(60.0).clip(true));
    }

    builder
        .header(row_height, |mut header| {
            for column in Column::all() {
                header.col(|ui| {
                    let label = SortState::header_label(state.sort_state(), *column);
                    let response = ui
                        .add(
                            egui::Label::new(RichText::new(label).strong())
                                .sense(egui::Sense::click()),
                        )
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if response.clicked() {
                        actions.push(Action::HeaderClicked(*column));
                    }
                });
            }
        })
        .body(|mut body| {
            for account in &rows {
                let id = account.id;
                let selected = state.selection.contains(id);

                body.row(row_height, |mut row| {
                    row.set_selected(selected);

                    for column in Column::all() {
                        row.col(|ui| match column {
                            Column::Locked => {
                                FlagBadge::show(ui, account.locked, Theme::WARNING);
                            }
                            Column::IsDemo => {
                                FlagBadge::show(ui, account.is_demo, Theme::INFO);
                            }
                            other => {
                                ui.label(account.value(*other));
                            }
                        });
                    }

                    let response = row.response();
                    if response.clicked() {
                        actions.push(Action::RowClicked {
                            id,
                            extend: multi_select,
                        });
                    }
                    if response.secondary_clicked() && !selected {
                        actions.push(Action::RowClicked { id, extend: false });
                    }
                    response.context_menu(|ui| {
                        if let Some(action) = context_menu(ui) {
                            actions.push(Action::Context(action));
                        }
                    });
                });
            }
        });

    if rows.is_empty() {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No accounts match the current filter").color(Theme::TEXT_MUTED));
        });
    }

    actions
}

fn context_menu(ui: &mut Ui) -> Option<ContextAction> {
    let mut chosen = None;

    for action in [ContextAction::Edit, ContextAction::Delete, ContextAction::Filter] {
        if action == ContextAction::Filter {
            ui.separator();
        }
        let icon = match action {
            ContextAction::Edit => Icons::EDIT,
            ContextAction::Delete => Icons::TRASH,
            ContextAction::Filter => Icons::FILTER,
        };
        if ui.button(format!("{} {}", icon, action.label())).clicked() {
            chosen = Some(action);
        }
    }

    if chosen.is_some() {
        ui.close_menu();
    }
    chosen
}
