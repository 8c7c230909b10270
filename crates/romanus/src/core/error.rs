//! Core error types for numeral conversion
//!
//! The legacy conversion never fails; these errors come from the strict
//! validation layer and from reading input.

use thiserror::Error;

/// Core error types for numeral conversion
#[derive(Error, Debug)]
pub enum NumeralError {
    #[error("Empty numeral")]
    Empty,

    #[error("Unknown symbol '{symbol}' at column {column}")]
    UnknownSymbol { symbol: char, column: usize },

    #[error("Malformed numeral: {message} at column {column}")]
    Malformed { message: String, column: usize },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl NumeralError {
    /// Create a new unknown symbol error
    pub fn unknown_symbol(symbol: char, column: usize) -> Self {
        Self::UnknownSymbol { symbol, column }
    }

    /// Create a new malformed numeral error
    pub fn malformed(message: String, column: usize) -> Self {
        Self::Malformed { message, column }
    }

    /// 1-based column the error points at, if any
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::UnknownSymbol { column, .. } | Self::Malformed { column, .. } => Some(*column),
            Self::Empty | Self::IoError { .. } => None,
        }
    }
}
