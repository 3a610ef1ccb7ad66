//! Row filtering - Single exact-match predicate on one column

use serde::{Deserialize, Serialize};

use super::account::{AccountRow, Column};

/// Active filter: keep rows whose `column` text equals `value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    pub column: Column,
    pub value: String,
}

impl RowFilter {
    /// Build a filter, or `None` when the request means "no filter"
    pub fn new(column: Option<Column>, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        match column {
            Some(column) if !value.is_empty() => Some(Self { column, value }),
            _ => None,
        }
    }

    /// Case-sensitive exact comparison, no substring or wildcard matching
    pub fn matches(&self, row: &AccountRow) -> bool {
        row.value(self.column) == self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account::sample_rows;

    #[test]
    fn test_empty_request_means_no_filter() {
        assert!(RowFilter::new(Some(Column::Group), "").is_none());
        assert!(RowFilter::new(None, "Pro").is_none());
        assert!(RowFilter::new(Some(Column::Group), "Pro").is_some());
    }

    #[test]
    fn test_exact_match_only() {
        let rows = sample_rows();
        let pro = RowFilter::new(Some(Column::Group), "Pro").unwrap();
        let lower = RowFilter::new(Some(Column::Group), "pro").unwrap();
        let partial = RowFilter::new(Some(Column::Group), "Stand").unwrap();

        let count = |f: &RowFilter| rows.iter().filter(|r| f.matches(r)).count();
        assert_eq!(count(&pro), 1);
        assert_eq!(count(&lower), 0);
        assert_eq!(count(&partial), 0);
    }

    #[test]
    fn test_boolean_columns_match_cell_text() {
        let rows = sample_rows();
        let locked = RowFilter::new(Some(Column::Locked), "True").unwrap();
        let matching: Vec<_> = rows.iter().filter(|r| locked.matches(r)).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].login, "12347");
    }
}
