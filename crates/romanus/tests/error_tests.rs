//! Tests for core error types

use romanus::core::NumeralError;

#[test]
fn test_unknown_symbol() {
    let error = NumeralError::unknown_symbol('?', 2);
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Unknown symbol"));
    assert!(error_msg.contains("'?'"));
    assert!(error_msg.contains("column 2"));
}

#[test]
fn test_malformed() {
    let error = NumeralError::malformed("found end of input".to_string(), 5);
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Malformed numeral"));
    assert!(error_msg.contains("column 5"));
    assert_eq!(error.column(), Some(5));
}

#[test]
fn test_empty() {
    assert_eq!(format!("{}", NumeralError::Empty), "Empty numeral");
}

#[test]
fn test_io_error() {
    use std::io;
    let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
    let error: NumeralError = io_err.into();
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("IO error"));
    assert!(error_msg.contains("stdin closed"));
    assert_eq!(error.column(), None);
}

#[test]
fn test_error_into_anyhow() {
    let error: anyhow::Error = NumeralError::Empty.into();
    assert!(error.downcast_ref::<NumeralError>().is_some());
}
