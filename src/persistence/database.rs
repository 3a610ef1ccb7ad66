//! SQLite storage for dashboard settings.
//!
//! Account rows live only in memory and are never written here.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::core::Settings;

const SETTINGS_KEY: &str = "app_settings";

/// Database wrapper for SQLite operations
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open the database at the default location
    pub fn new() -> Result<Self> {
        let db_path = Self::get_database_path()?;
        Self::open(&db_path)
    }

    /// Open (or create) a database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn =
            Connection::open(path).context(format!("Failed to open database at {:?}", path))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        info!("Database opened at {:?}", path);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a throwaway database that lives in memory
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Get the database file path
    fn get_database_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .context("Failed to get data directory")?
            .join("MT5Admin");
        Ok(data_dir.join("mt5admin.db"))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| anyhow::anyhow!("Database lock poisoned: {}", e))
    }

    /// Initialize database schema
    pub fn initialize(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )?;

        info!("Database schema initialized");
        Ok(())
    }

    /// Load settings from database
    pub fn load_settings(&self) -> Result<Option<Settings>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
        let result: Option<String> = stmt
            .query_row(params![SETTINGS_KEY], |row| row.get(0))
            .optional()?;

        match result {
            Some(json) => {
                let mut settings: Settings =
                    serde_json::from_str(&json).context("Failed to deserialize settings")?;
                // Validate and fix any invalid values after deserialization
                settings.validate();
                Ok(Some(settings))
            }
            None => Ok(None),
        }
    }

    /// Save settings to database
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let conn = self.lock()?;
        let json = serde_json::to_string(settings)?;
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![SETTINGS_KEY, json, Utc::now().to_rfc3339()],
        )?;
        debug!("Settings saved");
        Ok(())
    }

    /// When the settings were last written, if ever
    pub fn settings_updated_at(&self) -> Result<Option<DateTime<Utc>>> {
        let conn = self.lock()?;
        let stamp: Option<String> = conn
            .query_row(
                "SELECT updated_at FROM settings WHERE key = ?1",
                params![SETTINGS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        stamp
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|t| t.with_timezone(&Utc))
                    .context("Invalid settings timestamp")
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Language;

    fn create_test_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        db
    }

    #[test]
    fn test_empty_database_has_no_settings() {
        let db = create_test_db();
        assert!(db.load_settings().unwrap().is_none());
        assert!(db.settings_updated_at().unwrap().is_none());
    }

    #[test]
    fn test_settings_round_trip() {
        let db = create_test_db();
        let mut settings = Settings::default();
        settings.language = Language::Russian;
        settings.server.port = 8443;

        db.save_settings(&settings).unwrap();
        let loaded = db.load_settings().unwrap().unwrap();

        assert_eq!(loaded.language, Language::Russian);
        assert_eq!(loaded.server.port, 8443);
        assert!(db.settings_updated_at().unwrap().is_some());
    }

    #[test]
    fn test_loaded_settings_are_validated() {
        let db = create_test_db();
        let settings = Settings {
            notification_secs: 0,
            ..Default::default()
        };
        db.save_settings(&settings).unwrap();

        let loaded = db.load_settings().unwrap().unwrap();
        assert_eq!(loaded.notification_secs, 1);
    }

    #[test]
    fn test_initialize_is_repeatable() {
        let db = create_test_db();
        db.initialize().unwrap();
        db.save_settings(&Settings::default()).unwrap();
        db.initialize().unwrap();
        assert!(db.load_settings().unwrap().is_some());
    }
}
