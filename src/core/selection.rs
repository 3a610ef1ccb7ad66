//! Row selection

use super::account::RowId;
use super::error::TableError;

/// Currently highlighted rows, in the order they were selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<RowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single row
    pub fn select(&mut self, id: RowId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Replace the selection with `ids`, dropping duplicates
    pub fn select_many(&mut self, ids: impl IntoIterator<Item = RowId>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Add `id` to the selection, or remove it if already selected
    pub fn toggle(&mut self, id: RowId) {
        if let Some(pos) = self.ids.iter().position(|s| *s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn deselect(&mut self, id: RowId) {
        self.ids.retain(|s| *s != id);
    }

    /// Keep only the ids for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(RowId) -> bool) {
        self.ids.retain(|id| keep(*id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The selected row when exactly one is selected
    pub fn single(&self) -> Option<RowId> {
        match self.ids.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }

    /// Selected ids, failing when nothing is selected
    pub fn require_any(&self) -> Result<&[RowId], TableError> {
        if self.ids.is_empty() {
            Err(TableError::EmptySelection)
        } else {
            Ok(&self.ids)
        }
    }
}
