//! Tests for the public API in lib.rs

use romanus::prelude::*;
use romanus::{convert, convert_strict, convert_with_table, validate};

#[test]
fn test_documented_examples() {
    assert_eq!(convert("III"), 3);
    assert_eq!(convert("LVIII"), 58);
    assert_eq!(convert("MCMXCIV"), 1994);
    assert_eq!(convert("IX"), 9);
}

#[test]
fn test_empty_string_is_zero() {
    assert_eq!(convert(""), 0);
}

#[test]
fn test_lowercase_l_reads_as_fifty() {
    assert_eq!(convert("l"), 50);
    assert_eq!(convert_with_table("l", SymbolTable::Standard), 0);
}

#[test]
fn test_unrecognized_characters_are_silent() {
    assert_eq!(convert("hello"), 100);
    assert_eq!(convert("12"), 0);
    assert_eq!(convert("M M"), 2000);
}

#[test]
fn test_tables_agree_on_uppercase_input() {
    for numeral in ["MMXXVI", "CDXLIV", "DCCCLXXXVIII", "XLIX"] {
        assert_eq!(
            convert_with_table(numeral, SymbolTable::Legacy),
            convert_with_table(numeral, SymbolTable::Standard)
        );
    }
}

#[test]
fn test_strict_conversion() {
    assert_eq!(convert_strict("CDXLIV").unwrap(), 444);
    assert!(convert_strict("").is_err());
    assert!(convert_strict("IIII").is_err());
}

#[test]
fn test_validate_reports_error_kind() {
    assert!(matches!(validate(""), Err(NumeralError::Empty)));
    assert!(matches!(
        validate("MCM9"),
        Err(NumeralError::UnknownSymbol {
            symbol: '9',
            column: 4
        })
    ));
    assert!(matches!(validate("VX"), Err(NumeralError::Malformed { .. })));
}

#[test]
fn test_converter_reports_its_table() {
    assert_eq!(Converter::new().table(), SymbolTable::Legacy);
    assert_eq!(
        Converter::with_table(SymbolTable::Standard).table(),
        SymbolTable::Standard
    );
}
