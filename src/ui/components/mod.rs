//! Reusable UI components

pub mod flag_badge;
