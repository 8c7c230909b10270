//! Edge case tests for conversion and validation
//!
//! Tests for boundary conditions, unusual inputs, and the permissive
//! behaviour of the legacy scan.

// =============================================================================
// Empty Input Tests
// =============================================================================

mod empty_inputs {
    use romanus::prelude::*;

    #[test]
    fn test_empty_converts_to_zero_in_both_tables() {
        assert_eq!(Converter::new().convert(""), 0);
        assert_eq!(Converter::with_table(SymbolTable::Standard).convert(""), 0);
    }

    #[test]
    fn test_whitespace_only_converts_to_zero() {
        assert_eq!(Converter::new().convert("   \t "), 0);
    }

    #[test]
    fn test_empty_is_rejected_by_validator() {
        assert!(matches!(
            Validator::new().validate(""),
            Err(NumeralError::Empty)
        ));
    }
}

// =============================================================================
// Unmapped Character Tests
// =============================================================================

mod unmapped_characters {
    use romanus::prelude::*;

    #[test]
    fn test_first_scanned_unmapped_character_is_harmless() {
        // Trailing junk is scanned first and leaves the previous value at zero
        assert_eq!(Converter::new().convert("XIV!"), 14);
    }

    #[test]
    fn test_unmapped_character_breaks_subtractive_pair() {
        assert_eq!(Converter::new().convert("IV"), 4);
        assert_eq!(Converter::new().convert("I V"), 6);
    }

    #[test]
    fn test_lowercase_glyphs_other_than_l_are_unmapped() {
        assert_eq!(Converter::new().convert("xvi"), 0);
        assert_eq!(Converter::new().convert("xlvi"), 50);
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(Converter::new().convert("Ⅻ"), 0);
        assert!(matches!(
            Validator::new().validate("XⅫ"),
            Err(NumeralError::UnknownSymbol { column: 2, .. })
        ));
    }
}

// =============================================================================
// Malformed Numeral Tests
// =============================================================================

mod malformed_numerals {
    use romanus::prelude::*;

    #[test]
    fn test_repetition_beyond_three() {
        let converter = Converter::new();
        assert_eq!(converter.convert("XXXX"), 40);
        assert_eq!(converter.convert("MMMM"), 4000);
        assert!(converter.convert_strict("XXXX").is_err());
    }

    #[test]
    fn test_invalid_subtractive_pairs() {
        let converter = Converter::new();
        assert_eq!(converter.convert("IL"), 49);
        assert_eq!(converter.convert("VX"), 5);
        assert_eq!(converter.convert("IM"), 999);
        assert!(converter.convert_strict("IL").is_err());
        assert!(converter.convert_strict("IM").is_err());
    }

    #[test]
    fn test_descending_subtractions() {
        assert_eq!(Converter::new().convert("IVXLCDM"), 334);
    }
}
