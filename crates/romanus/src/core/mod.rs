//! Core conversion machinery
//!
//! Symbol tables, the right-to-left converter, the optional strict
//! validator, error types and logging setup.

mod converter;
mod error;
pub mod logging;
mod types;
mod validator;

pub use converter::*;
pub use error::*;
pub use logging::*;
pub use types::*;
pub use validator::*;
