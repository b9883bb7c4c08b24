//! Public host-facing contracts for embedding the LINFlex model.

use thiserror::Error;

use crate::{AccessError, RegisterFile, REGISTER_COUNT};

/// Top-level immutable configuration for a device instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LinflexConfig {
    /// Sets the transmit-complete flag during the reset hold phase so the
    /// controller is transmit-ready when no firmware initializes it.
    pub transmit_ready_at_reset: bool,
}

impl Default for LinflexConfig {
    fn default() -> Self {
        Self {
            transmit_ready_at_reset: true,
        }
    }
}

/// Byte-oriented duplex transport attached to the UART.
pub trait SerialBackend {
    /// Pushes one outbound byte. Must not block the device.
    fn write_byte(&mut self, byte: u8);

    /// Signals that the device may accept input again.
    ///
    /// The transport should re-poll the acceptance gate and deliver any
    /// buffered byte once the current device call returns.
    fn accept_input(&mut self);
}

/// Consumer of the device's single level-triggered interrupt output.
pub trait InterruptLine {
    /// Drives the line to `asserted`. Called on every recomputation, even
    /// when the level did not change.
    fn set_level(&mut self, asserted: bool);
}

/// Register-window access contract consumed by a memory bus.
pub trait MmioDevice {
    /// Reads the register containing `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when `size` or `offset` violate the bus
    /// contract. Register-level diagnostics are never returned here.
    fn read(&mut self, offset: u64, size: u8) -> Result<u32, AccessError>;

    /// Writes the register containing `offset`, then re-drives the
    /// interrupt line. A write rejected by the bus contract never reaches
    /// the device and leaves the line untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when `size` or `offset` violate the bus
    /// contract. Register-level diagnostics are never returned here.
    fn write(&mut self, offset: u64, value: u64, size: u8) -> Result<(), AccessError>;
}

/// Stable snapshot wire-version identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u16)]
pub enum SnapshotVersion {
    /// One 32-bit word per register, no auxiliary state.
    V1 = 1,
}

impl SnapshotVersion {
    /// Converts wire value to known snapshot version.
    #[must_use]
    pub const fn from_u16(version: u16) -> Option<Self> {
        match version {
            1 => Some(Self::V1),
            _ => None,
        }
    }

    /// Returns the wire value for this version.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Errors reported while importing a raw snapshot image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SnapshotError {
    /// The image carries a version this model does not understand.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u16),
    /// The image does not contain exactly one word per register.
    #[error("snapshot holds {actual} register words, expected {expected}")]
    LengthMismatch {
        /// Register count required by the version.
        expected: usize,
        /// Word count found in the image.
        actual: usize,
    },
}

/// Persisted device state: the register file verbatim, versioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LinflexSnapshot {
    /// Snapshot schema version.
    pub version: SnapshotVersion,
    /// Saved register file.
    pub regs: RegisterFile,
}

impl LinflexSnapshot {
    /// Wraps a register file in a current-version snapshot.
    #[must_use]
    pub const fn new(regs: RegisterFile) -> Self {
        Self {
            version: SnapshotVersion::V1,
            regs,
        }
    }

    /// Parses a raw versioned word image.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::UnsupportedVersion`] for unknown versions and
    /// [`SnapshotError::LengthMismatch`] when `words` is not one word per
    /// register.
    pub fn from_raw(version: u16, words: &[u32]) -> Result<Self, SnapshotError> {
        let version =
            SnapshotVersion::from_u16(version).ok_or(SnapshotError::UnsupportedVersion(version))?;
        let words: [u32; REGISTER_COUNT] =
            words.try_into().map_err(|_| SnapshotError::LengthMismatch {
                expected: REGISTER_COUNT,
                actual: words.len(),
            })?;

        Ok(Self {
            version,
            regs: RegisterFile::from_words(words),
        })
    }

    /// Returns the raw versioned word image.
    #[must_use]
    pub const fn to_raw(&self) -> (u16, [u32; REGISTER_COUNT]) {
        (self.version.as_u16(), *self.regs.words())
    }
}
