//! Core module - Account table, sorting, filtering, selection and settings

pub mod account;
pub mod action;
mod app_state;
mod error;
pub mod filter;
pub mod new_account;
pub mod selection;
pub mod settings;
pub mod sort;
mod table;

pub use account::{AccountRow, Column};
pub use action::{Action, ActionOutcome, ContextAction};
pub use app_state::AppState;
pub use new_account::NewAccount;
pub use settings::Settings;
pub use sort::SortState;
