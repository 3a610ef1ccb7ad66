//! New master account form - Input collected by the "Add master account" dialog

use thiserror::Error;

use super::account::{AccountRow, RowId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountFormError {
    #[error("All fields are required!")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Login ID must be numeric")]
    InvalidLogin,
    #[error("Leverage must look like 1:100")]
    InvalidLeverage,
    #[error("Initial balance must be a number")]
    InvalidBalance,
}

/// Form fields for a new (demo) master account
#[derive(Debug, Clone, Default)]
pub struct NewAccount {
    pub login: String,
    pub password: String,
    pub confirm_password: String,
    pub group: String,
    pub leverage: String,
    pub initial_balance: String,
    pub is_demo: bool,
}

impl NewAccount {
    pub fn new(is_demo: bool) -> Self {
        Self {
            is_demo,
            ..Default::default()
        }
    }

    /// Dialog title for this form
    pub fn title(&self) -> &'static str {
        if self.is_demo {
            "Add Demo Master Account"
        } else {
            "Add Master Account"
        }
    }

    /// Mutable access to the text fields, with their labels, in form order
    pub fn fields_mut(&mut self) -> [(&'static str, &mut String, bool); 6] {
        [
            ("Login ID:", &mut self.login, false),
            ("Password:", &mut self.password, true),
            ("Confirm Password:", &mut self.confirm_password, true),
            ("Group:", &mut self.group, false),
            ("Leverage:", &mut self.leverage, false),
            ("Initial Balance:", &mut self.initial_balance, false),
        ]
    }

    pub fn validate(&self) -> Result<(), AccountFormError> {
        let fields = [
            &self.login,
            &self.password,
            &self.confirm_password,
            &self.group,
            &self.leverage,
            &self.initial_balance,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(AccountFormError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(AccountFormError::PasswordMismatch);
        }

        if !self.login.trim().chars().all(|c| c.is_ascii_digit()) {
            return Err(AccountFormError::InvalidLogin);
        }

        let leverage_ok = self
            .leverage
            .trim()
            .split_once(':')
            .map(|(lhs, rhs)| lhs == "1" && rhs.parse::<u32>().map(|n| n > 0).unwrap_or(false))
            .unwrap_or(false);
        if !leverage_ok {
            return Err(AccountFormError::InvalidLeverage);
        }

        self.balance()?;
        Ok(())
    }

    fn balance(&self) -> Result<f64, AccountFormError> {
        self.initial_balance
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|b| b.is_finite() && *b >= 0.0)
            .ok_or(AccountFormError::InvalidBalance)
    }

    /// Validate and turn the form into a table row
    pub fn into_row(self) -> Result<AccountRow, AccountFormError> {
        self.validate()?;
        let balance = format!("{:.2}", self.balance()?);

        Ok(AccountRow {
            id: RowId::new(),
            locked: false,
            login: self.login.trim().to_string(),
            group: self.group.trim().to_string(),
            allocation: "100%".to_string(),
            leverage: self.leverage.trim().to_string(),
            free_margin: balance.clone(),
            balance,
            credit: "0.00".to_string(),
            margin: "0.00".to_string(),
            is_demo: self.is_demo,
        })
    }
}
