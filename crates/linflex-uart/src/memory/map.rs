//! Fixed register-window map and offset decoding.

use crate::{LinflexRegister, REGISTER_COUNT};

/// Size in bytes of the mapped register window.
///
/// Device trees advertise a larger region, but only the first page decodes.
pub const WINDOW_BYTES: u64 = 0x1000;

/// Byte distance between consecutive registers.
pub const REGISTER_STRIDE_BYTES: u64 = 4;

/// Decodes a window byte offset into a register identifier.
///
/// The low two offset bits are ignored, so any byte of a register word
/// selects the whole register.
#[must_use]
pub fn decode_register(offset: u64) -> Option<LinflexRegister> {
    usize::try_from(offset / REGISTER_STRIDE_BYTES)
        .ok()
        .and_then(LinflexRegister::from_index)
}

const _: () = assert!(
    (REGISTER_COUNT as u64) * REGISTER_STRIDE_BYTES <= WINDOW_BYTES,
    "register file must fit inside the window"
);

#[cfg(test)]
mod tests {
    use super::{decode_register, REGISTER_STRIDE_BYTES, WINDOW_BYTES};
    use crate::{LinflexRegister, REGISTER_COUNT};

    #[test]
    fn every_register_decodes_from_its_offset() {
        for reg in LinflexRegister::ALL {
            assert_eq!(decode_register(reg.offset()), Some(reg));
        }
    }

    #[test]
    fn sub_word_offsets_select_the_containing_register() {
        assert_eq!(decode_register(0x15), Some(LinflexRegister::Uartsr));
        assert_eq!(decode_register(0x3B), Some(LinflexRegister::Bdrl));
    }

    #[test]
    fn offsets_past_the_register_file_do_not_decode() {
        let first_invalid = REGISTER_COUNT as u64 * REGISTER_STRIDE_BYTES;
        assert_eq!(first_invalid, 0x54);
        for offset in first_invalid..WINDOW_BYTES {
            assert!(decode_register(offset).is_none());
        }
        assert!(decode_register(u64::MAX).is_none());
    }
}
