//! Dialog windows

pub mod add_account;
pub mod confirm;
pub mod edit_account;
pub mod filter;
pub mod help;
pub mod language;
pub mod mat;
pub mod server;

use crate::core::{AccountRow, Action, NewAccount};

/// State for dialog windows
#[derive(Default)]
pub enum DialogState {
    #[default]
    None,
    Confirm {
        title: String,
        message: String,
        on_confirm: Action,
    },
    EditAccount(AccountRow),
    Filter(filter::FilterForm),
    AddAccount(NewAccount),
    Server(server::ServerForm),
    Mat,
    Language,
    Help,
}

impl DialogState {
    /// Whether a dialog is showing; the main window stays inert while one is
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::None)
    }
}

/// What a dialog asks the main window to do after this frame
pub enum DialogResponse {
    /// Keep the dialog open
    Open,
    /// Close the dialog
    Close,
    /// Close the dialog and open another one
    Replace(DialogState),
    /// Close the dialog and dispatch an action on the table
    Dispatch(Action),
}

/// Map the window's close button onto a response
pub(crate) fn closed_or(open: bool, response: DialogResponse) -> DialogResponse {
    if open {
        response
    } else {
        DialogResponse::Close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account::RowId;

    #[test]
    fn test_pending_confirm_blocks_the_table() {
        assert!(!DialogState::default().is_open());

        let prompt = DialogState::Confirm {
            title: "Confirm Delete".to_string(),
            message: "Are you sure you want to delete this item?".to_string(),
            on_confirm: Action::DeleteConfirmed(vec![RowId::new()]),
        };
        assert!(prompt.is_open());
        assert!(DialogState::Help.is_open());
    }

    #[test]
    fn test_closing_the_window_wins() {
        assert!(matches!(
            closed_or(false, DialogResponse::Dispatch(Action::FilterCleared)),
            DialogResponse::Close
        ));
        assert!(matches!(
            closed_or(true, DialogResponse::Open),
            DialogResponse::Open
        ));
    }
}
