//! Register window layout and bus-access policy.

/// Access width and window bounds validation.
pub mod access;
/// Register window map and offset decoder.
pub mod map;

pub use access::{validate_access_width, validate_window_offset, MAX_ACCESS_BYTES, MIN_ACCESS_BYTES};
pub use map::{decode_register, REGISTER_STRIDE_BYTES, WINDOW_BYTES};
