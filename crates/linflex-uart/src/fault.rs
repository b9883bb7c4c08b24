use thiserror::Error;

use crate::LinflexRegister;

/// Direction of a guest register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum AccessKind {
    /// Guest load from the register window.
    Read,
    /// Guest store to the register window.
    Write,
}

impl AccessKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// Guest-programming diagnostics raised by register accesses.
///
/// These never fail the access: they are logged and latched in
/// [`crate::LinflexDiag`] while the access completes with its documented
/// inert outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum RegisterFault {
    /// Register exists but its behavior is not modeled.
    #[error("{} of unimplemented register {register}", .kind.as_str())]
    UnimplementedRegister {
        /// Register that was accessed.
        register: LinflexRegister,
        /// Access direction.
        kind: AccessKind,
    },
    /// Offset decodes outside the enumerated register set.
    #[error("{} of invalid register offset {offset:#x}", .kind.as_str())]
    InvalidRegister {
        /// Byte offset inside the MMIO window.
        offset: u64,
        /// Access direction.
        kind: AccessKind,
    },
}

/// Bus-contract violations rejected before the device state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AccessError {
    /// Access width is outside `1..=4` bytes.
    #[error("access width of {0} bytes is not supported")]
    InvalidWidth(u8),
    /// Offset lies beyond the mapped register window.
    #[error("offset {0:#x} lies outside the register window")]
    OutsideWindow(u64),
}

#[cfg(test)]
mod tests {
    use super::{AccessError, AccessKind, RegisterFault};
    use crate::LinflexRegister;

    #[test]
    fn register_fault_messages_name_the_access() {
        let unimp = RegisterFault::UnimplementedRegister {
            register: LinflexRegister::Gcr,
            kind: AccessKind::Write,
        };
        assert_eq!(unimp.to_string(), "write of unimplemented register GCR");

        let invalid = RegisterFault::InvalidRegister {
            offset: 0x80,
            kind: AccessKind::Read,
        };
        assert_eq!(invalid.to_string(), "read of invalid register offset 0x80");
    }

    #[test]
    fn access_error_messages_are_stable() {
        assert_eq!(
            AccessError::InvalidWidth(8).to_string(),
            "access width of 8 bytes is not supported"
        );
        assert_eq!(
            AccessError::OutsideWindow(0x1000).to_string(),
            "offset 0x1000 lies outside the register window"
        );
    }
}
