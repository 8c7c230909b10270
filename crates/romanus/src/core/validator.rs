//! Strict numeral validation using chumsky
//!
//! Validation is an optional layer in front of the converter. It rejects
//! empty input, characters outside the symbol table, and sequences that are
//! not canonical Roman numerals. The converter itself stays permissive.

use super::{NumeralError, SymbolTable};
use chumsky::prelude::*;
use tracing::{debug, trace};

/// Checks that input is a well-formed numeral under a symbol table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    table: SymbolTable,
}

impl Validator {
    /// Create a validator over the legacy symbol table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: SymbolTable) -> Self {
        Self { table }
    }

    /// Validate `input`
    ///
    /// Accepted numerals lie in `1..=3999`:
    /// `M{0,3} (CM|CD|D?C{0,3}) (XC|XL|L?X{0,3}) (IX|IV|V?I{0,3})`.
    pub fn validate(&self, input: &str) -> Result<(), NumeralError> {
        trace!(input_len = input.len(), table = %self.table, "Validator::validate called");

        if input.is_empty() {
            debug!("Empty input, validation failed");
            return Err(NumeralError::Empty);
        }

        let canonical = self.canonicalize(input)?;
        let parser = Self::numeral_parser();

        let result = parser
            .parse(canonical.as_str())
            .into_result()
            .map_err(|errors| {
                let (message, column) = errors
                    .first()
                    .map(|e| (e.reason().to_string(), e.span().start + 1))
                    .unwrap_or_else(|| ("invalid sequence".to_string(), 1));
                debug!(%message, column, "Malformed numeral");
                NumeralError::malformed(message, column)
            });
        result
    }

    /// Map every character to its canonical glyph, failing on the first
    /// character the table does not know
    fn canonicalize(&self, input: &str) -> Result<String, NumeralError> {
        input
            .chars()
            .enumerate()
            .map(|(i, c)| {
                self.table
                    .symbol(c)
                    .map(|symbol| symbol.glyph())
                    .ok_or_else(|| NumeralError::unknown_symbol(c, i + 1))
            })
            .collect()
    }

    fn numeral_parser<'src>(
    ) -> impl Parser<'src, &'src str, (), extra::Err<Rich<'src, char>>> + Clone {
        let thousands = just('M').repeated().at_most(3);

        thousands
            .then(Self::digit_parser('C', 'D', 'M'))
            .then(Self::digit_parser('X', 'L', 'C'))
            .then(Self::digit_parser('I', 'V', 'X'))
            .then_ignore(end())
            .ignored()
    }

    /// One decimal digit built from its unit, five and ten glyphs
    fn digit_parser<'src>(
        one: char,
        five: char,
        ten: char,
    ) -> impl Parser<'src, &'src str, (), extra::Err<Rich<'src, char>>> + Clone {
        choice((
            just(one).then(just(ten)).ignored(),
            just(one).then(just(five)).ignored(),
            just(five)
                .or_not()
                .then(just(one).repeated().at_most(3))
                .ignored(),
        ))
    }
}
