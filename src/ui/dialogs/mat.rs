//! MAT settings dialog - Master account tools menu

use egui::Context;

use crate::core::NewAccount;
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::dialogs::{closed_or, DialogResponse, DialogState};

/// Entries of the MAT menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatOption {
    ViewMasterAccounts,
    CreateMasterAccount,
    ManageTemplates,
    AccountSettings,
    SecuritySettings,
    TradeSettings,
    Reports,
}

impl MatOption {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewMasterAccounts => "View Master Accounts",
            Self::CreateMasterAccount => "Create New Master Account",
            Self::ManageTemplates => "Manage Account Templates",
            Self::AccountSettings => "Account Settings",
            Self::SecuritySettings => "Security Settings",
            Self::TradeSettings => "Trade Settings",
            Self::Reports => "Reports",
        }
    }

    /// Notice shown for options that only announce themselves
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::ViewMasterAccounts => Some("Opening Master Accounts view..."),
            Self::CreateMasterAccount => None,
            Self::ManageTemplates => Some("Opening Template Management..."),
            Self::AccountSettings => Some("Opening Account Settings..."),
            Self::SecuritySettings => Some("Opening Security Settings..."),
            Self::TradeSettings => Some("Opening Trade Settings..."),
            Self::Reports => Some("Opening Reports..."),
        }
    }

    pub fn all() -> &'static [MatOption] {
        &[
            MatOption::ViewMasterAccounts,
            MatOption::CreateMasterAccount,
            MatOption::ManageTemplates,
            MatOption::AccountSettings,
            MatOption::SecuritySettings,
            MatOption::TradeSettings,
            MatOption::Reports,
        ]
    }
}

pub fn render(ctx: &Context, notifications: &mut Vec<Notification>) -> DialogResponse {
    let mut open = true;
    let mut response = DialogResponse::Open;

    egui::Window::new("MAT Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(400.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("MAT Settings").heading().strong());
                ui.add_space(16.0);

                for option in MatOption::all() {
                    let button = egui::Button::new(option.label()).min_size(egui::vec2(240.0, 28.0));
                    if ui.add(button).clicked() {
                        response = match option.notice() {
                            Some(notice) => {
                                notifications.push(Notification::new(notice, NotificationLevel::Info));
                                DialogResponse::Close
                            }
                            None => DialogResponse::Replace(DialogState::AddAccount(
                                NewAccount::new(false),
                            )),
                        };
                    }
                }

                ui.add_space(16.0);
                if ui
                    .add(egui::Button::new("Close").min_size(egui::vec2(160.0, 28.0)))
                    .clicked()
                {
                    response = DialogResponse::Close;
                }
            });
        });

    closed_or(open, response)
}
