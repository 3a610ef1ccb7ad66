//! Account rows - The record shown on each line of the master accounts table

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::TableError;

/// Unique identifier for a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(pub Uuid);

impl RowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Table columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Locked,
    Login,
    Group,
    Allocation,
    Leverage,
    Balance,
    Credit,
    Margin,
    FreeMargin,
    IsDemo,
}

impl Column {
    /// Number of declared columns
    pub const COUNT: usize = 10;

    pub fn label(&self) -> &'static str {
        match self {
            Self::Locked => "Locked",
            Self::Login => "Login",
            Self::Group => "Group",
            Self::Allocation => "Allocation",
            Self::Leverage => "Leverage",
            Self::Balance => "Balance",
            Self::Credit => "Credit",
            Self::Margin => "Margin",
            Self::FreeMargin => "Free margin",
            Self::IsDemo => "Is demo",
        }
    }

    pub fn all() -> &'static [Column] {
        &[
            Column::Locked,
            Column::Login,
            Column::Group,
            Column::Allocation,
            Column::Leverage,
            Column::Balance,
            Column::Credit,
            Column::Margin,
            Column::FreeMargin,
            Column::IsDemo,
        ]
    }

    /// Position of the column in the declared order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Cell text used for boolean columns
pub fn bool_text(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn parse_bool(column: Column, value: &str) -> Result<bool, TableError> {
    match value {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(TableError::InvalidValue {
            column,
            value: other.to_string(),
        }),
    }
}

/// One master account as displayed in the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRow {
    /// Row identity, not a column
    pub id: RowId,
    pub locked: bool,
    /// Numeric login, kept as text
    pub login: String,
    pub group: String,
    /// Percentage, e.g. "100%"
    pub allocation: String,
    /// Ratio, e.g. "1:100"
    pub leverage: String,
    pub balance: String,
    pub credit: String,
    pub margin: String,
    pub free_margin: String,
    pub is_demo: bool,
}

impl AccountRow {
    /// Build a row from raw cell text in declared column order
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Result<Self, TableError> {
        if values.len() != Column::COUNT {
            return Err(TableError::Validation {
                expected: Column::COUNT,
                found: values.len(),
            });
        }

        let text = |column: Column| values[column.index()].as_ref().to_string();

        Ok(Self {
            id: RowId::new(),
            locked: parse_bool(Column::Locked, values[Column::Locked.index()].as_ref())?,
            login: text(Column::Login),
            group: text(Column::Group),
            allocation: text(Column::Allocation),
            leverage: text(Column::Leverage),
            balance: text(Column::Balance),
            credit: text(Column::Credit),
            margin: text(Column::Margin),
            free_margin: text(Column::FreeMargin),
            is_demo: parse_bool(Column::IsDemo, values[Column::IsDemo.index()].as_ref())?,
        })
    }

    /// Raw text of a single cell
    pub fn value(&self, column: Column) -> &str {
        match column {
            Column::Locked => bool_text(self.locked),
            Column::Login => &self.login,
            Column::Group => &self.group,
            Column::Allocation => &self.allocation,
            Column::Leverage => &self.leverage,
            Column::Balance => &self.balance,
            Column::Credit => &self.credit,
            Column::Margin => &self.margin,
            Column::FreeMargin => &self.free_margin,
            Column::IsDemo => bool_text(self.is_demo),
        }
    }
}

/// Sample accounts loaded into the table at startup, as raw cell text
pub const SAMPLE_ROWS: [[&str; Column::COUNT]; 3] = [
    [
        "False", "12345", "Standard", "100%", "1:100", "10000.00", "0.00", "1000.00", "9000.00",
        "True",
    ],
    [
        "False", "12346", "Pro", "100%", "1:200", "25000.00", "0.00", "2000.00", "23000.00",
        "False",
    ],
    [
        "True", "12347", "VIP", "100%", "1:500", "50000.00", "1000.00", "5000.00", "46000.00",
        "False",
    ],
];

#[cfg(test)]
pub(crate) fn sample_rows() -> Vec<AccountRow> {
    SAMPLE_ROWS
        .iter()
        .map(|values| AccountRow::from_values(values).unwrap())
        .collect()
}
