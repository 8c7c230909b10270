//! Roman numeral to integer conversion
//!
//! The scan runs right to left. Each character's value is added when it is
//! at least the value processed just before it, and subtracted otherwise.
//! Characters missing from the symbol table are worth zero, so the scan
//! never fails and never rejects input.

use super::{NumeralError, SymbolTable, Validator};
use tracing::{debug, trace};

/// Converts numeral strings using a fixed symbol table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    table: SymbolTable,
}

impl Converter {
    /// Create a converter over the legacy symbol table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: SymbolTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> SymbolTable {
        self.table
    }

    /// Convert `input` to an integer
    ///
    /// Malformed numerals still produce a value (`IIII` is 4, `VV` is 10)
    /// and the empty string is 0.
    ///
    /// # Example
    /// ```
    /// use romanus::core::Converter;
    ///
    /// let converter = Converter::new();
    /// assert_eq!(converter.convert("MCMXCIV"), 1994);
    /// assert_eq!(converter.convert(""), 0);
    /// ```
    pub fn convert(&self, input: &str) -> i64 {
        trace!(input_len = input.len(), table = %self.table, "Converter::convert called");

        let (result, _) = input
            .chars()
            .rev()
            .fold((0i64, 0i64), |(result, previous), c| {
                let value = self.table.value(c);
                if value == 0 {
                    debug!(symbol = %c.escape_debug(), "Skipping unmapped character");
                }
                if value >= previous {
                    (result + value, value)
                } else {
                    (result - value, value)
                }
            });

        debug!(result, "Conversion completed");
        result
    }

    /// Validate `input` and then convert it
    pub fn convert_strict(&self, input: &str) -> Result<i64, NumeralError> {
        Validator::with_table(self.table).validate(input)?;
        Ok(self.convert(input))
    }
}
