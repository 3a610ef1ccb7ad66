//! Application state - Central state for the dashboard

use anyhow::Result;
use tracing::{debug, info};

use super::account::{AccountRow, Column, RowId, SAMPLE_ROWS};
use super::action::{Action, ActionOutcome, ContextAction};
use super::error::TableError;
use super::new_account::{AccountFormError, NewAccount};
use super::selection::Selection;
use super::settings::{Language, ServerSettings, Settings, Theme};
use super::sort::SortState;
use super::table::TableStore;
use crate::persistence::Database;

/// Central application state, built once in `main` and owned by the UI
pub struct AppState {
    /// Master accounts shown in the table
    pub table: TableStore,
    /// Highlighted rows
    pub selection: Selection,
    /// Application settings
    pub settings: Settings,
    /// Database connection
    database: Database,
}

impl AppState {
    /// Create the application state and load the sample accounts
    pub fn new(database: Database) -> Result<Self> {
        let settings = database.load_settings()?.unwrap_or_default();
        if let Some(saved_at) = database.settings_updated_at()? {
            debug!("Settings last saved at {}", saved_at);
        }

        let mut table = TableStore::new();
        for values in SAMPLE_ROWS {
            table.insert_values(&values)?;
        }
        info!("Loaded {} sample accounts", table.len());

        Ok(Self {
            table,
            selection: Selection::new(),
            settings,
            database,
        })
    }

    /// Rows to display, filtered and sorted
    pub fn current_view(&self) -> Vec<&AccountRow> {
        self.table.current_view()
    }

    /// Sort indicator for the header row
    pub fn sort_state(&self) -> Option<&SortState> {
        self.table.sort_state()
    }

    /// Single entry point for table interactions
    pub fn on_action(&mut self, action: Action) -> ActionOutcome {
        debug!("Handling {:?}", action);
        match action {
            Action::HeaderClicked(column) => {
                let state = self.table.toggle_sort(column);
                debug!("Sorting by {} (ascending: {})", column, state.ascending());
                ActionOutcome::Updated
            }
            Action::RowClicked { id, extend } => {
                if !self.table.contains(id) {
                    return recovered(TableError::NotFound(id));
                }
                if extend {
                    self.selection.toggle(id);
                } else {
                    self.selection.select(id);
                }
                ActionOutcome::Updated
            }
            Action::Context(ContextAction::Edit) => self.edit_selected(),
            Action::Context(ContextAction::Delete) => self.request_delete(),
            Action::Context(ContextAction::Filter) => self.open_filter_dialog(),
            Action::DeleteConfirmed(ids) => self.delete_rows(&ids),
            Action::FilterSubmitted { column, value } => self.apply_filter(column, value),
            Action::FilterCleared => {
                self.table.clear_filter();
                ActionOutcome::Updated
            }
            Action::SortCleared => {
                self.table.clear_sort();
                ActionOutcome::Updated
            }
            Action::ClearSelection => {
                self.selection.clear();
                ActionOutcome::Updated
            }
        }
    }

    /// Replace the selection with one row. Unknown ids are ignored.
    pub fn select(&mut self, id: RowId) {
        if self.table.contains(id) {
            self.selection.select(id);
        } else {
            debug!("{}", TableError::NotFound(id));
        }
    }

    /// Replace the selection with the known ids among `ids`
    pub fn select_many(&mut self, ids: impl IntoIterator<Item = RowId>) {
        let table = &self.table;
        let known: Vec<RowId> = ids
            .into_iter()
            .filter(|id| {
                let found = table.contains(*id);
                if !found {
                    debug!("{}", TableError::NotFound(*id));
                }
                found
            })
            .collect();
        self.selection.select_many(known);
    }

    /// Start deleting the selection; the UI must confirm first
    pub fn request_delete(&self) -> ActionOutcome {
        match self.selection.require_any() {
            Ok(ids) => ActionOutcome::ConfirmDelete(ids.to_vec()),
            Err(e) => recovered(e),
        }
    }

    fn delete_rows(&mut self, ids: &[RowId]) -> ActionOutcome {
        if ids.is_empty() {
            return recovered(TableError::EmptySelection);
        }

        let mut removed = 0;
        for id in ids {
            match self.table.remove(*id) {
                Ok(_) => removed += 1,
                Err(e) => debug!("Skipping delete: {}", e),
            }
            self.selection.deselect(*id);
        }

        info!("Deleted {} account row(s)", removed);
        if removed > 0 {
            ActionOutcome::Updated
        } else {
            ActionOutcome::NoOp
        }
    }

    /// Hand the single selected row to the edit form
    pub fn edit_selected(&self) -> ActionOutcome {
        let Some(id) = self.selection.single() else {
            debug!("Edit needs exactly one selected row, have {}", self.selection.len());
            return ActionOutcome::NoOp;
        };

        match self.table.get(id) {
            Some(row) => ActionOutcome::EditRow(row.clone()),
            None => recovered(TableError::NotFound(id)),
        }
    }

    pub fn open_filter_dialog(&self) -> ActionOutcome {
        ActionOutcome::ShowFilterDialog(self.table.columns().to_vec())
    }

    /// Apply a filter request; an empty value or missing column clears it.
    /// Selected rows hidden by the new filter are deselected.
    pub fn apply_filter(&mut self, column: Option<Column>, value: String) -> ActionOutcome {
        match column {
            Some(column) if !value.is_empty() => {
                info!("Filtering {} = {:?}", column, value);
                self.table.set_filter(column, value);
            }
            _ => self.table.clear_filter(),
        }

        let visible: Vec<RowId> = self.table.current_view().iter().map(|r| r.id).collect();
        let before = self.selection.len();
        self.selection.retain(|id| visible.contains(&id));
        if self.selection.len() != before {
            debug!(
                "Deselected {} row(s) hidden by the filter",
                before - self.selection.len()
            );
        }
        ActionOutcome::Updated
    }

    /// Add an account from the "Add master account" form. Kept in memory only.
    pub fn create_account(&mut self, form: NewAccount) -> Result<RowId, AccountFormError> {
        let row = form.into_row()?;
        info!("Created account {} (demo: {})", row.login, row.is_demo);
        Ok(self.table.insert(row))
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.settings.language = language;
        info!("Language changed to {}", language.label());
        self.save_settings()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.settings.theme = theme;
        self.save_settings()
    }

    pub fn update_server_settings(&mut self, server: ServerSettings) -> Result<()> {
        self.settings.server = server;
        self.settings.validate();
        info!(
            "Server settings updated: {}:{}",
            self.settings.server.address, self.settings.server.port
        );
        self.save_settings()
    }

    /// Save settings
    pub fn save_settings(&self) -> Result<()> {
        self.database.save_settings(&self.settings)
    }
}

/// Log a recoverable table error and turn it into a no-op
fn recovered(error: TableError) -> ActionOutcome {
    debug!("Ignoring action: {}", error);
    ActionOutcome::NoOp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state() -> AppState {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        AppState::new(db).unwrap()
    }

    fn logins(state: &AppState) -> Vec<String> {
        state
            .current_view()
            .iter()
            .map(|r| r.login.clone())
            .collect()
    }

    fn id_of(state: &AppState, login: &str) -> RowId {
        state
            .current_view()
            .iter()
            .find(|r| r.login == login)
            .map(|r| r.id)
            .unwrap()
    }

    #[test]
    fn test_dashboard_scenario() {
        let mut state = create_test_state();

        state.on_action(Action::HeaderClicked(Column::Login));
        assert_eq!(logins(&state), vec!["12345", "12346", "12347"]);

        state.on_action(Action::HeaderClicked(Column::Login));
        assert_eq!(logins(&state), vec!["12347", "12346", "12345"]);
        assert!(!state.sort_state().unwrap().ascending());

        state.on_action(Action::FilterSubmitted {
            column: Some(Column::Group),
            value: "Pro".to_string(),
        });
        assert_eq!(logins(&state), vec!["12346"]);

        state.on_action(Action::FilterCleared);
        assert_eq!(logins(&state), vec!["12347", "12346", "12345"]);

        let target = id_of(&state, "12346");
        state.on_action(Action::RowClicked {
            id: target,
            extend: false,
        });
        let outcome = state.on_action(Action::Context(ContextAction::Delete));
        assert_eq!(outcome, ActionOutcome::ConfirmDelete(vec![target]));
        // Nothing is removed until the prompt is confirmed
        assert_eq!(state.current_view().len(), 3);

        let outcome = state.on_action(Action::DeleteConfirmed(vec![target]));
        assert_eq!(outcome, ActionOutcome::Updated);
        assert_eq!(logins(&state), vec!["12347", "12345"]);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_delete_with_empty_selection_is_noop() {
        let mut state = create_test_state();
        assert_eq!(
            state.on_action(Action::Context(ContextAction::Delete)),
            ActionOutcome::NoOp
        );
        assert_eq!(
            state.on_action(Action::DeleteConfirmed(Vec::new())),
            ActionOutcome::NoOp
        );
        assert_eq!(state.current_view().len(), 3);
    }

    #[test]
    fn test_repeated_delete_is_noop() {
        let mut state = create_test_state();
        let target = id_of(&state, "12345");

        state.on_action(Action::DeleteConfirmed(vec![target]));
        assert_eq!(
            state.on_action(Action::DeleteConfirmed(vec![target])),
            ActionOutcome::NoOp
        );
        assert_eq!(logins(&state), vec!["12346", "12347"]);
    }

    #[test]
    fn test_delete_many() {
        let mut state = create_test_state();
        let a = id_of(&state, "12345");
        let c = id_of(&state, "12347");
        state.select_many([a, c]);

        let ids = state.selection.ids().to_vec();
        assert_eq!(
            state.on_action(Action::DeleteConfirmed(ids)),
            ActionOutcome::Updated
        );
        assert_eq!(logins(&state), vec!["12346"]);
    }

    #[test]
    fn test_filter_deselects_hidden_rows() {
        let mut state = create_test_state();
        let standard = id_of(&state, "12345");
        let pro = id_of(&state, "12346");
        state.select_many([standard, pro]);

        state.on_action(Action::FilterSubmitted {
            column: Some(Column::Group),
            value: "Pro".to_string(),
        });
        assert_eq!(logins(&state), vec!["12346"]);
        assert_eq!(state.selection.ids(), &[pro]);

        let outcome = state.on_action(Action::Context(ContextAction::Delete));
        assert_eq!(outcome, ActionOutcome::ConfirmDelete(vec![pro]));
        state.on_action(Action::DeleteConfirmed(vec![pro]));

        state.on_action(Action::FilterCleared);
        assert_eq!(logins(&state), vec!["12345", "12347"]);
    }

    #[test]
    fn test_extend_click_toggles_rows() {
        let mut state = create_test_state();
        let a = id_of(&state, "12345");
        let b = id_of(&state, "12346");

        state.on_action(Action::RowClicked { id: a, extend: false });
        assert_eq!(
            state.on_action(Action::RowClicked { id: b, extend: true }),
            ActionOutcome::Updated
        );
        assert_eq!(state.selection.ids(), &[a, b]);

        state.on_action(Action::RowClicked { id: a, extend: true });
        assert_eq!(state.selection.ids(), &[b]);

        // A plain click replaces the selection again
        state.on_action(Action::RowClicked { id: a, extend: false });
        assert_eq!(state.selection.ids(), &[a]);

        assert_eq!(
            state.on_action(Action::ClearSelection),
            ActionOutcome::Updated
        );
        assert!(state.selection.is_empty());
        assert_eq!(
            state.on_action(Action::Context(ContextAction::Delete)),
            ActionOutcome::NoOp
        );
    }

    #[test]
    fn test_confirmed_delete_of_many_rows() {
        let mut state = create_test_state();
        let a = id_of(&state, "12345");
        let c = id_of(&state, "12347");
        state.on_action(Action::RowClicked { id: a, extend: false });
        state.on_action(Action::RowClicked { id: c, extend: true });

        let ids = match state.on_action(Action::Context(ContextAction::Delete)) {
            ActionOutcome::ConfirmDelete(ids) => ids,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(ids, vec![a, c]);
        assert_eq!(state.table.len(), 3);

        assert_eq!(
            state.on_action(Action::DeleteConfirmed(ids)),
            ActionOutcome::Updated
        );
        assert_eq!(logins(&state), vec!["12346"]);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_sort_cleared_restores_base_order() {
        let mut state = create_test_state();
        state.on_action(Action::HeaderClicked(Column::Balance));
        state.on_action(Action::HeaderClicked(Column::Balance));
        assert_eq!(logins(&state), vec!["12347", "12346", "12345"]);

        state.on_action(Action::SortCleared);
        assert!(state.sort_state().is_none());
        assert_eq!(logins(&state), vec!["12345", "12346", "12347"]);
    }

    #[test]
    fn test_edit_requires_single_selection() {
        let mut state = create_test_state();
        assert_eq!(state.edit_selected(), ActionOutcome::NoOp);

        let a = id_of(&state, "12345");
        let b = id_of(&state, "12346");
        state.select_many([a, b]);
        assert_eq!(state.edit_selected(), ActionOutcome::NoOp);

        state.select(b);
        match state.on_action(Action::Context(ContextAction::Edit)) {
            ActionOutcome::EditRow(row) => {
                assert_eq!(row.login, "12346");
                assert_eq!(row.group, "Pro");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_ids_are_not_selected() {
        let mut state = create_test_state();
        let stranger = RowId::new();

        state.select(stranger);
        assert!(state.selection.is_empty());

        let known = id_of(&state, "12347");
        state.select_many([stranger, known]);
        assert_eq!(state.selection.ids(), &[known]);

        assert_eq!(
            state.on_action(Action::RowClicked {
                id: stranger,
                extend: true
            }),
            ActionOutcome::NoOp
        );
    }

    #[test]
    fn test_filter_dialog_offers_all_columns() {
        let mut state = create_test_state();
        match state.on_action(Action::Context(ContextAction::Filter)) {
            ActionOutcome::ShowFilterDialog(columns) => assert_eq!(columns, Column::all()),
            other => panic!("unexpected outcome: {:?}", other),
        }

        state.on_action(Action::FilterSubmitted {
            column: Some(Column::Group),
            value: String::new(),
        });
        assert!(state.table.filter().is_none());
    }

    #[test]
    fn test_create_account_appends_row() {
        let mut state = create_test_state();
        state.on_action(Action::HeaderClicked(Column::Login));
        state.on_action(Action::HeaderClicked(Column::Login));

        let form = NewAccount {
            login: "12350".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            group: "Standard".to_string(),
            leverage: "1:100".to_string(),
            initial_balance: "200".to_string(),
            is_demo: false,
        };
        let id = state.create_account(form).unwrap();
        assert!(state.table.contains(id));
        // Active sort still applies to the new row
        assert_eq!(logins(&state)[0], "12350");

        assert_eq!(
            state.create_account(NewAccount::new(true)),
            Err(AccountFormError::MissingFields)
        );
        assert_eq!(state.table.len(), 4);
    }

    #[test]
    fn test_settings_are_saved() {
        let mut state = create_test_state();
        state.set_language(Language::French).unwrap();
        state.set_theme(Theme::Dark).unwrap();
        state
            .update_server_settings(ServerSettings {
                address: "mt5.example.com".to_string(),
                port: 8443,
                ..Default::default()
            })
            .unwrap();

        let saved = state.database.load_settings().unwrap().unwrap();
        assert_eq!(saved.language, Language::French);
        assert_eq!(saved.theme, Theme::Dark);
        assert_eq!(saved.server.address, "mt5.example.com");
        assert_eq!(saved.server.timeout_ms, 5000);
    }
}
