//! Errors raised by the account table

use thiserror::Error;

use super::account::{Column, RowId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Row does not have one value per declared column
    #[error("row has {found} values, expected {expected}")]
    Validation { expected: usize, found: usize },

    #[error("invalid value {value:?} for column {column}")]
    InvalidValue { column: Column, value: String },

    #[error("row {0} not found")]
    NotFound(RowId),

    #[error("no row selected")]
    EmptySelection,
}
