//! Column sorting - Header toggle logic and row ordering

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::account::{AccountRow, Column};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow drawn next to the active header
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: Column, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub fn ascending(&self) -> bool {
        self.direction == SortDirection::Ascending
    }

    /// Next sort state after the header of `column` is clicked.
    ///
    /// Clicking the active column flips the direction; any other column
    /// starts over in ascending order.
    pub fn toggled(current: Option<SortState>, column: Column) -> SortState {
        match current {
            Some(state) if state.column == column => {
                SortState::new(column, state.direction.reversed())
            }
            _ => SortState::new(column, SortDirection::Ascending),
        }
    }

    /// Compare two rows by the raw text of the active column
    pub fn compare(&self, a: &AccountRow, b: &AccountRow) -> Ordering {
        let ordering = a.value(self.column).cmp(b.value(self.column));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Order rows in place. Ties keep their incoming order.
    pub fn apply(&self, rows: &mut [&AccountRow]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }

    /// Header label for `column`, with an arrow only on the active column
    pub fn header_label(state: Option<&SortState>, column: Column) -> String {
        match state {
            Some(state) if state.column == column => {
                format!("{} {}", column.label(), state.direction.arrow())
            }
            _ => column.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account::sample_rows;

    #[test]
    fn test_toggle_sequence() {
        let first = SortState::toggled(None, Column::Login);
        assert_eq!(first, SortState::new(Column::Login, SortDirection::Ascending));

        let second = SortState::toggled(Some(first), Column::Login);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortState::toggled(Some(second), Column::Login);
        assert!(third.ascending());

        // Switching columns forgets the previous direction
        let other = SortState::toggled(Some(second), Column::Group);
        assert_eq!(other, SortState::new(Column::Group, SortDirection::Ascending));
    }

    #[test]
    fn test_comparison_is_lexicographic() {
        let mut rows = sample_rows();
        rows[0].balance = "9.00".to_string();
        rows[1].balance = "100.00".to_string();
        rows[2].balance = "25.00".to_string();

        let state = SortState::new(Column::Balance, SortDirection::Ascending);
        let mut view: Vec<_> = rows.iter().collect();
        state.apply(&mut view);

        let balances: Vec<_> = view.iter().map(|r| r.balance.as_str()).collect();
        assert_eq!(balances, vec!["100.00", "25.00", "9.00"]);
    }

    #[test]
    fn test_descending_is_stable() {
        let rows = sample_rows();
        // Allocation is "100%" on every row
        let state = SortState::new(Column::Allocation, SortDirection::Descending);
        let mut view: Vec<_> = rows.iter().collect();
        state.apply(&mut view);

        let logins: Vec<_> = view.iter().map(|r| r.login.as_str()).collect();
        assert_eq!(logins, vec!["12345", "12346", "12347"]);
    }

    #[test]
    fn test_header_label_marks_active_column_only() {
        let state = SortState::new(Column::Login, SortDirection::Descending);
        assert_eq!(SortState::header_label(Some(&state), Column::Login), "Login ↓");
        assert_eq!(SortState::header_label(Some(&state), Column::Group), "Group");
        assert_eq!(SortState::header_label(None, Column::Login), "Login");
    }
}
