//! Behavioral model of a LINFlex serial controller operating in UART mode.
//!
//! The model covers the guest-visible register protocol, the single
//! interrupt line, and receive flow control. LIN framing, DMA, timeouts,
//! and baud-rate generation are inert register stores.

/// Register window layout and bus-access policy.
pub mod memory;
pub use memory::{
    decode_register, validate_access_width, validate_window_offset, MAX_ACCESS_BYTES,
    MIN_ACCESS_BYTES, REGISTER_STRIDE_BYTES, WINDOW_BYTES,
};

/// Register enumeration and register-file storage.
pub mod state;
pub use state::registers::{
    BDRM_DATA_MASK, LINCR1_INIT, LINCR1_READ_FORCED, LINCR1_SLEEP, LINCR1_WRITE_MASK,
    LINIER_DRIE, LINIER_DTIE, LINIER_WRITE_MASK, LINSR_LINS_INIT, UARTCR_RUNTIME_MASK,
    UARTCR_UART, UARTSR_DRFRFE, UARTSR_DTFTFF, UARTSR_RMB, UARTSR_RX_FLAGS, UARTSR_WRITE_MASK,
};
pub use state::{LinflexRegister, RegisterFile, REGISTER_COUNT};

/// Guest-programming fault and bus-contract error types.
pub mod fault;
pub use fault::{AccessError, AccessKind, RegisterFault};

/// Public host-facing API contract and integration types.
pub mod api;
pub use api::{
    InterruptLine, LinflexConfig, LinflexSnapshot, MmioDevice, SerialBackend, SnapshotError,
    SnapshotVersion,
};

/// Host-side diagnostics counters.
pub mod diag;
pub use diag::LinflexDiag;

/// In-memory transport and interrupt adapters.
pub mod host;
pub use host::{BufferedSerial, IrqLevel};

/// Device model: write, read, interrupt, serial, and lifecycle paths.
pub mod device;
pub use device::{interrupt_pending, Linflex};

#[cfg(test)]
use env_logger as _;
#[cfg(test)]
use proptest as _;
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;
