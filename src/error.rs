//! Errors raised while turning tabular input into typed records.
//!
//! Skipped station pairs and empty intervals are not errors; they are
//! reported through shorter output and zero placeholders respectively.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("{table} row {row} has non-finite value in column '{column}'")]
    NonFinite {
        table: &'static str,
        row: usize,
        column: &'static str,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, InputError>;
