//! Main application UI

use std::time::{Duration, Instant};

use egui::{CentralPanel, Context, TopBottomPanel};
use tracing::{error, info};

use super::dialogs::{self, filter::FilterForm, server::ServerForm, DialogResponse, DialogState};
use super::panels;
use super::theme::{Chrome, Icons, Theme};
use crate::core::settings::Theme as SettingsTheme;
use crate::core::{Action, ActionOutcome, AppState, NewAccount};

/// Entries of the top menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Server,
    BinaryOptions,
    Mat,
    Language,
    Help,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Server => "Server",
            Self::BinaryOptions => "Binary Options",
            Self::Mat => "MAT",
            Self::Language => "Language",
            Self::Help => "Help",
        }
    }

    pub fn all() -> &'static [MenuItem] {
        &[
            MenuItem::Server,
            MenuItem::BinaryOptions,
            MenuItem::Mat,
            MenuItem::Language,
            MenuItem::Help,
        ]
    }
}

/// Main application struct
pub struct DashboardApp {
    /// Application state
    state: AppState,
    /// Dialog state
    dialog: DialogState,
    /// Notifications queue
    notifications: Vec<Notification>,
    /// How long a notification stays visible
    notification_timeout: Duration,
    /// First frame flag
    first_frame: bool,
}

/// Notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        Theme::apply(&cc.egui_ctx, state.settings.theme);
        let notification_timeout = Duration::from_secs(state.settings.notification_secs as u64);

        Self {
            state,
            dialog: DialogState::None,
            notifications: Vec::new(),
            notification_timeout,
            first_frame: true,
        }
    }

    /// Add a notification
    pub fn notify(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.notifications.push(Notification::new(message, level));
    }

    /// Clean up old notifications
    fn cleanup_notifications(&mut self) {
        let timeout = self.notification_timeout;
        self.notifications
            .retain(|n| n.created_at.elapsed() < timeout);
    }

    /// Run an action through the state and open whatever dialog it asks for
    fn dispatch(&mut self, action: Action) {
        match self.state.on_action(action) {
            ActionOutcome::Updated | ActionOutcome::NoOp => {}
            ActionOutcome::ConfirmDelete(ids) => {
                self.dialog = DialogState::Confirm {
                    title: "Confirm Delete".to_string(),
                    message: "Are you sure you want to delete this item?".to_string(),
                    on_confirm: Action::DeleteConfirmed(ids),
                };
            }
            ActionOutcome::EditRow(row) => {
                self.dialog = DialogState::EditAccount(row);
            }
            ActionOutcome::ShowFilterDialog(columns) => {
                let mut form = FilterForm::new(columns);
                if let Some(active) = self.state.table.filter() {
                    form.column = Some(active.column);
                    form.value = active.value.clone();
                }
                self.dialog = DialogState::Filter(form);
            }
        }
    }

    fn open_menu(&mut self, item: MenuItem) {
        info!("Menu: {}", item.label());
        match item {
            MenuItem::Server => {
                self.dialog = DialogState::Server(ServerForm::from_settings(
                    &self.state.settings.server,
                ));
            }
            MenuItem::BinaryOptions => self.notify(
                "Binary Options settings dialog (to be implemented)",
                NotificationLevel::Info,
            ),
            MenuItem::Mat => self.dialog = DialogState::Mat,
            MenuItem::Language => self.dialog = DialogState::Language,
            MenuItem::Help => self.dialog = DialogState::Help,
        }
    }

    /// Render the menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        let mut clicked = None;
        let mut theme_choice = None;

        let chrome = Chrome::from_visuals(&ctx.style().visuals);
        let interactive = !self.dialog.is_open();

        TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::none()
                    .fill(chrome.menu_fill)
                    .stroke(egui::Stroke::new(1.0, chrome.border)),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(interactive, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().button_padding = egui::vec2(10.0, 5.0);
                        for item in MenuItem::all() {
                            let response = ui
                                .selectable_label(
                                    false,
                                    egui::RichText::new(item.label()).color(chrome.text),
                                )
                                .on_hover_cursor(egui::CursorIcon::PointingHand);
                            if response.clicked() {
                                clicked = Some(*item);
                            }
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.menu_button(self.state.settings.theme.label(), |ui| {
                                for theme in SettingsTheme::all() {
                                    let selected = self.state.settings.theme == *theme;
                                    if ui.selectable_label(selected, theme.label()).clicked() {
                                        theme_choice = Some(*theme);
                                        ui.close_menu();
                                    }
                                }
                            });
                        });
                    });
                });
            });

        if let Some(item) = clicked {
            self.open_menu(item);
        }

        if let Some(theme) = theme_choice {
            Theme::apply(ctx, theme);
            if let Err(e) = self.state.set_theme(theme) {
                error!("Failed to save theme: {}", e);
            }
        }
    }

    /// Render the tab strip and toolbar
    fn render_toolbar(&mut self, ctx: &Context) {
        let chrome = Chrome::from_visuals(&ctx.style().visuals);
        let interactive = !self.dialog.is_open();

        TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::none()
                    .fill(chrome.panel_fill)
                    .inner_margin(egui::Margin::symmetric(5.0, 4.0)),
            )
            .show(ctx, |ui| {
                // Tab strip
                egui::Frame::none()
                    .fill(chrome.tab_fill)
                    .inner_margin(egui::Margin::symmetric(5.0, 3.0))
                    .show(ui, |ui| {
                        ui.label(format!("MAT - Master accounts {}", Icons::CLOSE));
                    });

                ui.add_space(4.0);

                ui.add_enabled_ui(interactive, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button(format!("{} Add master account", Icons::ADD)).clicked() {
                            self.dialog = DialogState::AddAccount(NewAccount::new(false));
                        }
                        if ui
                            .button(format!("{} Add demo master account", Icons::ADD))
                            .clicked()
                        {
                            self.dialog = DialogState::AddAccount(NewAccount::new(true));
                        }
                        if ui.button("Template demo master account").clicked() {
                            self.notify(
                                "Template creation dialog (to be implemented)",
                                NotificationLevel::Info,
                            );
                        }
                    });
                });
            });
    }

    /// Render the main content area. The table is inert while a dialog is open.
    fn render_main_content(&mut self, ctx: &Context) {
        let interactive = !self.dialog.is_open();
        let actions = CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_enabled_ui(interactive, |ui| panels::accounts::render(ui, &self.state))
                    .inner
            })
            .inner;

        for action in actions {
            self.dispatch(action);
        }
    }

    /// Render notifications
    fn render_notifications(&mut self, ctx: &Context) {
        if self.notifications.is_empty() {
            return;
        }

        let chrome = Chrome::from_visuals(&ctx.style().visuals);

        egui::Area::new(egui::Id::new("notifications"))
            .fixed_pos(egui::pos2(ctx.screen_rect().width() - 340.0, 80.0))
            .show(ctx, |ui| {
                for notification in &self.notifications {
                    let (icon, color) = match notification.level {
                        NotificationLevel::Info => (Icons::INFO, Theme::INFO),
                        NotificationLevel::Success => (Icons::SUCCESS, Theme::SUCCESS),
                        NotificationLevel::Warning => (Icons::WARNING, Theme::WARNING),
                        NotificationLevel::Error => (Icons::ERROR, Theme::ERROR),
                    };

                    egui::Frame::none()
                        .fill(chrome.surface_fill)
                        .rounding(egui::Rounding::same(6.0))
                        .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.6)))
                        .shadow(egui::Shadow {
                            offset: egui::vec2(0.0, 4.0),
                            blur: 12.0,
                            spread: 2.0,
                            color: egui::Color32::from_black_alpha(40),
                        })
                        .inner_margin(egui::Margin::same(12.0))
                        .show(ui, |ui| {
                            ui.set_width(300.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(icon).size(14.0).color(color));
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(&notification.message)
                                        .color(chrome.text),
                                );
                            });
                        });

                    ui.add_space(8.0);
                }
            });
    }

    /// Render dialogs
    fn render_dialogs(&mut self, ctx: &Context) {
        let mut dialog = std::mem::take(&mut self.dialog);

        let response = match &mut dialog {
            DialogState::None => return,
            DialogState::Confirm {
                title,
                message,
                on_confirm,
            } => dialogs::confirm::render(ctx, title, message, on_confirm),
            DialogState::EditAccount(row) => {
                dialogs::edit_account::render(ctx, row, &mut self.notifications)
            }
            DialogState::Filter(form) => dialogs::filter::render(ctx, form),
            DialogState::AddAccount(form) => dialogs::add_account::render(
                ctx,
                form,
                &mut self.state,
                &mut self.notifications,
            ),
            DialogState::Server(form) => {
                dialogs::server::render(ctx, form, &mut self.state, &mut self.notifications)
            }
            DialogState::Mat => dialogs::mat::render(ctx, &mut self.notifications),
            DialogState::Language => {
                dialogs::language::render(ctx, &mut self.state, &mut self.notifications)
            }
            DialogState::Help => dialogs::help::render(ctx),
        };

        match response {
            DialogResponse::Open => self.dialog = dialog,
            DialogResponse::Close => {}
            DialogResponse::Replace(next) => self.dialog = next,
            DialogResponse::Dispatch(action) => self.dispatch(action),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // First frame setup
        if self.first_frame {
            self.first_frame = false;
            info!("First frame rendered");
        }

        // Clean up old notifications
        self.cleanup_notifications();
        if !self.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        // Render UI components
        self.render_menu_bar(ctx);
        self.render_toolbar(ctx);
        self.render_main_content(ctx);
        self.render_notifications(ctx);
        self.render_dialogs(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Save settings
        if let Err(e) = self.state.save_settings() {
            error!("Failed to save settings: {}", e);
        }

        info!("Application exiting");
    }
}
