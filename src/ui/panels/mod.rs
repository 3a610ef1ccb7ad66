//! Main window panels

pub mod accounts;
