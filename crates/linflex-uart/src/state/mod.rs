//! Register enumeration and register-file storage model.

/// LINFlex register identifiers, bit layouts, and backing storage.
pub mod registers;

pub use registers::{LinflexRegister, RegisterFile, REGISTER_COUNT};
