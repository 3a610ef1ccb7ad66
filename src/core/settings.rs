//! Application settings management

use serde::{Deserialize, Serialize};

/// Application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }
}

/// Interface language. Only recorded, strings are not translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Russian,
    Chinese,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Russian => "Russian",
            Self::Chinese => "Chinese",
        }
    }

    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Spanish,
            Language::French,
            Language::German,
            Language::Russian,
            Language::Chinese,
        ]
    }
}

/// Connection settings edited in the Server dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
    pub timeout_ms: u32,
    pub max_connections: u32,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: "localhost".to_string(),
            port: 443,
            timeout_ms: 5000,
            max_connections: 100,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Application theme
    pub theme: Theme,
    /// Selected interface language
    pub language: Language,
    /// Server connection defaults
    #[serde(default)]
    pub server: ServerSettings,
    /// Table row height in points
    pub row_height: f32,
    /// Seconds a notification stays on screen
    pub notification_secs: u32,
    /// Enable debug logging
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::English,
            server: ServerSettings::default(),
            row_height: 25.0,
            notification_secs: 5,
            debug_logging: false,
        }
    }
}

impl Settings {
    /// Validate settings and fix any invalid values
    pub fn validate(&mut self) {
        self.row_height = self.row_height.clamp(18.0, 60.0);
        self.notification_secs = self.notification_secs.clamp(1, 60);
        self.server.timeout_ms = self.server.timeout_ms.max(100);
        self.server.max_connections = self.server.max_connections.max(1);
        if self.server.address.trim().is_empty() {
            self.server.address = ServerSettings::default().address;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let server = ServerSettings::default();
        assert_eq!(server.address, "localhost");
        assert_eq!(server.port, 443);
        assert_eq!(server.timeout_ms, 5000);
        assert_eq!(server.max_connections, 100);
    }

    #[test]
    fn test_validate_clamps_values() {
        let mut settings = Settings {
            row_height: 4.0,
            notification_secs: 0,
            ..Default::default()
        };
        settings.server.address = "  ".to_string();
        settings.server.max_connections = 0;
        settings.validate();

        assert_eq!(settings.row_height, 18.0);
        assert_eq!(settings.notification_secs, 1);
        assert_eq!(settings.server.address, "localhost");
        assert_eq!(settings.server.max_connections, 1);
    }

    #[test]
    fn test_missing_server_section_uses_defaults() {
        let json = r#"{"theme":"Dark","language":"German","row_height":30.0,
            "notification_secs":5,"debug_logging":false}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.language, Language::German);
        assert_eq!(settings.server, ServerSettings::default());
    }
}
