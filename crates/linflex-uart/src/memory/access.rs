//! Bus-access policy helpers for the register window.

use crate::{AccessError, WINDOW_BYTES};

/// Smallest accepted access width in bytes.
pub const MIN_ACCESS_BYTES: u8 = 1;
/// Largest accepted access width in bytes.
pub const MAX_ACCESS_BYTES: u8 = 4;

/// Validates the width of a register access.
///
/// All accepted widths act on the whole 32-bit register.
///
/// # Errors
///
/// Returns [`AccessError::InvalidWidth`] when `size` is outside `1..=4`.
pub const fn validate_access_width(size: u8) -> Result<(), AccessError> {
    if size >= MIN_ACCESS_BYTES && size <= MAX_ACCESS_BYTES {
        Ok(())
    } else {
        Err(AccessError::InvalidWidth(size))
    }
}

/// Validates that an offset falls inside the mapped window.
///
/// # Errors
///
/// Returns [`AccessError::OutsideWindow`] when `offset >= WINDOW_BYTES`.
pub const fn validate_window_offset(offset: u64) -> Result<(), AccessError> {
    if offset < WINDOW_BYTES {
        Ok(())
    } else {
        Err(AccessError::OutsideWindow(offset))
    }
}
