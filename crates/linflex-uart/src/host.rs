//! Ready-made host adapters for the transport and interrupt seams.

use std::collections::VecDeque;

use crate::{InterruptLine, SerialBackend};

/// In-memory serial transport with an inbound queue and an outbound log.
///
/// Inbound bytes wait in the queue until the device is pumped with
/// [`crate::Linflex::pump_input`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedSerial {
    pending: VecDeque<u8>,
    output: Vec<u8>,
    resume_count: u32,
}

impl BufferedSerial {
    /// Creates an empty transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues bytes for delivery to the device.
    pub fn queue_input(&mut self, bytes: &[u8]) {
        self.pending.extend(bytes);
    }

    /// Number of inbound bytes not yet delivered.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Bytes transmitted by the device so far.
    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Drains and returns the transmitted bytes.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    /// Number of resume notifications received.
    #[must_use]
    pub const fn resume_count(&self) -> u32 {
        self.resume_count
    }

    pub(crate) fn pop_input(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }
}

impl SerialBackend for BufferedSerial {
    fn write_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }

    fn accept_input(&mut self) {
        self.resume_count = self.resume_count.saturating_add(1);
    }
}

/// Interrupt consumer that records the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IrqLevel {
    asserted: bool,
    drive_count: u32,
}

impl IrqLevel {
    /// Returns `true` while the line is asserted.
    #[must_use]
    pub const fn is_asserted(&self) -> bool {
        self.asserted
    }

    /// Number of times the device drove the line.
    #[must_use]
    pub const fn drive_count(&self) -> u32 {
        self.drive_count
    }
}

impl InterruptLine for IrqLevel {
    fn set_level(&mut self, asserted: bool) {
        self.asserted = asserted;
        self.drive_count = self.drive_count.saturating_add(1);
    }
}
