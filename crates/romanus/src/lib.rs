//! Romanus - Convert Roman numerals to integers
//!
//! The conversion scans right to left, adding a symbol's value when it is
//! at least the previous one and subtracting it otherwise. It accepts any
//! string: unknown characters count as zero and malformed numerals still
//! yield a number. An optional strict layer validates input first.
//!
//! # Quick Start
//!
//! ```rust
//! use romanus::convert;
//!
//! assert_eq!(convert("MCMXCIV"), 1994);
//! assert_eq!(convert("IIII"), 4);
//! ```
//!
//! # Strict Conversion
//!
//! ```rust
//! use romanus::prelude::*;
//!
//! let converter = Converter::with_table(SymbolTable::Standard);
//! assert_eq!(converter.convert_strict("LVIII").unwrap(), 58);
//! assert!(converter.convert_strict("VV").is_err());
//! ```

pub mod core;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        ConvertOptions, Converter, NumeralError, Symbol, SymbolTable, Validator,
    };
}

/// Convert a numeral using the legacy symbol table
///
/// Never fails. The empty string converts to 0.
///
/// # Example
/// ```rust
/// use romanus::convert;
///
/// assert_eq!(convert("LVIII"), 58);
/// assert_eq!(convert("l"), 50);
/// ```
pub fn convert(input: &str) -> i64 {
    Converter::new().convert(input)
}

/// Convert a numeral using a specific symbol table
///
/// # Example
/// ```rust
/// use romanus::{convert_with_table, SymbolTable};
///
/// assert_eq!(convert_with_table("l", SymbolTable::Legacy), 50);
/// assert_eq!(convert_with_table("l", SymbolTable::Standard), 0);
/// ```
pub fn convert_with_table(input: &str, table: SymbolTable) -> i64 {
    Converter::with_table(table).convert(input)
}

/// Validate and convert a numeral using the legacy symbol table
///
/// # Example
/// ```rust
/// use romanus::convert_strict;
///
/// assert_eq!(convert_strict("IX").unwrap(), 9);
/// assert!(convert_strict("IIII").is_err());
/// ```
pub fn convert_strict(input: &str) -> anyhow::Result<i64> {
    Ok(Converter::new().convert_strict(input)?)
}

/// Convert according to per-run options
pub fn convert_with_options(input: &str, options: ConvertOptions) -> anyhow::Result<i64> {
    let converter = Converter::with_table(options.table);
    if options.strict {
        Ok(converter.convert_strict(input)?)
    } else {
        Ok(converter.convert(input))
    }
}

/// Check that a numeral is well formed under the legacy symbol table
pub fn validate(input: &str) -> Result<(), NumeralError> {
    Validator::new().validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        assert_eq!(convert("III"), 3);
        assert_eq!(convert("MCMXCIV"), 1994);
    }

    #[test]
    fn test_convert_with_table() {
        assert_eq!(convert_with_table("lX", SymbolTable::Legacy), 60);
        assert_eq!(convert_with_table("lX", SymbolTable::Standard), 10);
    }

    #[test]
    fn test_convert_strict() {
        assert_eq!(convert_strict("XLII").unwrap(), 42);
        let err = convert_strict("ABC").unwrap_err();
        assert!(err.to_string().contains("Unknown symbol"));
    }

    #[test]
    fn test_convert_with_options() {
        let lenient = ConvertOptions::default();
        assert_eq!(convert_with_options("VV", lenient).unwrap(), 10);

        let strict = ConvertOptions::new(SymbolTable::Standard, true);
        assert!(convert_with_options("VV", strict).is_err());
        assert_eq!(convert_with_options("XV", strict).unwrap(), 15);
    }

    #[test]
    fn test_validate() {
        assert!(validate("MMXXVI").is_ok());
        assert!(validate("").is_err());
    }
}
