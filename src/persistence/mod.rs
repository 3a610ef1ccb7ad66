//! Persistence module - SQLite settings storage

mod database;

pub use database::Database;
