//! Server settings dialog

use egui::Context;

use crate::core::settings::ServerSettings;
use crate::core::AppState;
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::dialogs::{closed_or, DialogResponse};

/// Text fields of the server dialog, parsed on Apply
#[derive(Debug, Clone, Default)]
pub struct ServerForm {
    pub address: String,
    pub port: String,
    pub timeout_ms: String,
    pub max_connections: String,
}

impl ServerForm {
    pub fn from_settings(server: &ServerSettings) -> Self {
        Self {
            address: server.address.clone(),
            port: server.port.to_string(),
            timeout_ms: server.timeout_ms.to_string(),
            max_connections: server.max_connections.to_string(),
        }
    }

    /// Parse the form, naming the first invalid field on failure
    pub fn parse(&self) -> Result<ServerSettings, String> {
        let address = self.address.trim();
        if address.is_empty() {
            return Err("Server Address is required".to_string());
        }
        let port = self
            .port
            .trim()
            .parse::<u16>()
            .map_err(|_| "Port must be a number between 0 and 65535".to_string())?;
        let timeout_ms = self
            .timeout_ms
            .trim()
            .parse::<u32>()
            .map_err(|_| "Timeout (ms) must be a whole number".to_string())?;
        let max_connections = self
            .max_connections
            .trim()
            .parse::<u32>()
            .map_err(|_| "Max Connections must be a whole number".to_string())?;

        Ok(ServerSettings {
            address: address.to_string(),
            port,
            timeout_ms,
            max_connections,
        })
    }
}

pub fn render(
    ctx: &Context,
    form: &mut ServerForm,
    state: &mut AppState,
    notifications: &mut Vec<Notification>,
) -> DialogResponse {
    let mut open = true;
    let mut response = DialogResponse::Open;

    egui::Window::new("Server Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(500.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Connection Settings").heading().strong());
            });
            ui.add_space(10.0);

            egui::Grid::new("server_settings_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for (label, value) in [
                        ("Server Address:", &mut form.address),
                        ("Port:", &mut form.port),
                        ("Timeout (ms):", &mut form.timeout_ms),
                        ("Max Connections:", &mut form.max_connections),
                    ] {
                        ui.label(label);
                        ui.add(egui::TextEdit::singleline(value).desired_width(240.0));
                        ui.end_row();
                    }
                });

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    match form.parse() {
                        Ok(server) => match state.update_server_settings(server) {
                            Ok(()) => {
                                notifications.push(Notification::new(
                                    "Server settings updated successfully!",
                                    NotificationLevel::Success,
                                ));
                                response = DialogResponse::Close;
                            }
                            Err(e) => {
                                tracing::error!("Failed to save server settings: {}", e);
                                notifications.push(Notification::new(
                                    format!("Failed to save settings: {}", e),
                                    NotificationLevel::Error,
                                ));
                            }
                        },
                        Err(message) => {
                            notifications.push(Notification::new(message, NotificationLevel::Warning));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_round_trips_defaults() {
        let defaults = ServerSettings::default();
        let form = ServerForm::from_settings(&defaults);
        assert_eq!(form.port, "443");
        assert_eq!(form.parse(), Ok(defaults));
    }

    #[test]
    fn test_form_rejects_bad_numbers() {
        let mut form = ServerForm::from_settings(&ServerSettings::default());
        form.port = "70000".to_string();
        assert!(form.parse().unwrap_err().starts_with("Port"));

        let mut form = ServerForm::from_settings(&ServerSettings::default());
        form.address = " ".to_string();
        assert!(form.parse().is_err());
    }
}
