//! User actions on the accounts table and their outcomes

use super::account::{AccountRow, Column, RowId};

/// Entries of the table's right-click menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Edit,
    Delete,
    Filter,
}

impl ContextAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Filter => "Filter",
        }
    }
}

/// Everything the table view can ask the application to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A column header was clicked
    HeaderClicked(Column),
    /// A row was clicked; `extend` adds to the selection instead of replacing it
    RowClicked { id: RowId, extend: bool },
    /// Right-click menu entry chosen for the current selection
    Context(ContextAction),
    /// The user accepted the delete prompt for these rows
    DeleteConfirmed(Vec<RowId>),
    /// Filter dialog submitted
    FilterSubmitted { column: Option<Column>, value: String },
    /// Filter dialog "Clear" pressed
    FilterCleared,
    /// Return to base order
    SortCleared,
    ClearSelection,
}

/// What the UI has to do after an action was handled
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// State changed, re-render the table
    Updated,
    /// Nothing to do
    NoOp,
    /// Ask the user to confirm deleting these rows
    ConfirmDelete(Vec<RowId>),
    /// Open the edit form with this row's current values
    EditRow(AccountRow),
    /// Open the filter dialog offering these columns
    ShowFilterDialog(Vec<Column>),
}
