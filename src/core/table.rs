//! Account table - Base rows plus the sort and filter policy applied to them

use tracing::debug;

use super::account::{AccountRow, Column, RowId};
use super::error::TableError;
use super::filter::RowFilter;
use super::sort::{SortDirection, SortState};

/// In-memory table of account rows.
///
/// The base sequence keeps insertion order. Sort and filter are policy only;
/// they are evaluated each time [`TableStore::current_view`] is called.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    rows: Vec<AccountRow>,
    sort: Option<SortState>,
    filter: Option<RowFilter>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the base sequence. Does not re-sort.
    pub fn insert(&mut self, row: AccountRow) -> RowId {
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Append a row built from raw cell text
    pub fn insert_values<S: AsRef<str>>(&mut self, values: &[S]) -> Result<RowId, TableError> {
        let row = AccountRow::from_values(values)?;
        Ok(self.insert(row))
    }

    /// Remove the row with `id` from the base sequence
    pub fn remove(&mut self, id: RowId) -> Result<AccountRow, TableError> {
        let index = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(TableError::NotFound(id))?;
        let row = self.rows.remove(index);
        debug!("Removed row {} (login {})", id, row.login);
        Ok(row)
    }

    pub fn get(&self, id: RowId) -> Option<&AccountRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &'static [Column] {
        Column::all()
    }

    /// Rows passing the active filter, ordered by the active sort.
    /// Without a sort the base insertion order is kept.
    pub fn current_view(&self) -> Vec<&AccountRow> {
        let mut view: Vec<&AccountRow> = match &self.filter {
            Some(filter) => self.rows.iter().filter(|r| filter.matches(r)).collect(),
            None => self.rows.iter().collect(),
        };

        if let Some(sort) = &self.sort {
            sort.apply(&mut view);
        }

        view
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn set_sort(&mut self, column: Column, direction: SortDirection) {
        self.sort = Some(SortState::new(column, direction));
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Apply a header click to the sort state and return the new state
    pub fn toggle_sort(&mut self, column: Column) -> SortState {
        let next = SortState::toggled(self.sort, column);
        self.set_sort(next.column, next.direction);
        next
    }

    pub fn filter(&self) -> Option<&RowFilter> {
        self.filter.as_ref()
    }

    /// Replace the active filter. An empty value clears it.
    pub fn set_filter(&mut self, column: Column, value: impl Into<String>) {
        self.filter = RowFilter::new(Some(column), value);
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }
}
