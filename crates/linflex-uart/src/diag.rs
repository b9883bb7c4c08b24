//! Host-side diagnostics for guest-programming faults and serial traffic.
//!
//! Diagnostics are not part of persisted device state and are cleared at the
//! reset enter phase.

use crate::RegisterFault;

/// Saturating counters and last-fault latch for one device instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinflexDiag {
    /// The most recent register fault, if any.
    pub last_fault: Option<RegisterFault>,
    /// Accesses that decoded outside the register set.
    pub invalid_access_count: u16,
    /// Accesses to registers whose behavior is not modeled.
    pub unimplemented_access_count: u16,
    /// Bytes pushed to the transport.
    pub tx_byte_count: u32,
    /// Bytes accepted from the transport.
    pub rx_byte_count: u32,
    /// Bytes delivered while the acceptance gate was closed.
    pub rx_overrun_count: u16,
    /// Resume notifications sent to the transport.
    pub resume_count: u16,
}

impl LinflexDiag {
    /// Creates an empty diagnostics block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latches a register fault and bumps its class counter.
    #[allow(clippy::missing_const_for_fn)]
    pub fn record_fault(&mut self, fault: RegisterFault) {
        self.last_fault = Some(fault);
        match fault {
            RegisterFault::InvalidRegister { .. } => {
                self.invalid_access_count = self.invalid_access_count.saturating_add(1);
            }
            RegisterFault::UnimplementedRegister { .. } => {
                self.unimplemented_access_count =
                    self.unimplemented_access_count.saturating_add(1);
            }
        }
    }

    /// Records one transmitted byte.
    #[allow(clippy::missing_const_for_fn)]
    pub fn record_tx(&mut self) {
        self.tx_byte_count = self.tx_byte_count.saturating_add(1);
    }

    /// Records one received byte, flagging an overrun when the gate was closed.
    #[allow(clippy::missing_const_for_fn)]
    pub fn record_rx(&mut self, overrun: bool) {
        self.rx_byte_count = self.rx_byte_count.saturating_add(1);
        if overrun {
            self.rx_overrun_count = self.rx_overrun_count.saturating_add(1);
        }
    }

    /// Records one resume notification.
    #[allow(clippy::missing_const_for_fn)]
    pub fn record_resume(&mut self) {
        self.resume_count = self.resume_count.saturating_add(1);
    }

    /// Resets all diagnostic fields to their default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::LinflexDiag;
    use crate::{AccessKind, LinflexRegister, RegisterFault};

    #[test]
    fn faults_are_counted_by_class() {
        let mut diag = LinflexDiag::new();
        let invalid = RegisterFault::InvalidRegister {
            offset: 0x60,
            kind: AccessKind::Write,
        };
        let unimp = RegisterFault::UnimplementedRegister {
            register: LinflexRegister::Lincr2,
            kind: AccessKind::Read,
        };

        diag.record_fault(invalid);
        diag.record_fault(unimp);
        diag.record_fault(unimp);

        assert_eq!(diag.invalid_access_count, 1);
        assert_eq!(diag.unimplemented_access_count, 2);
        assert_eq!(diag.last_fault, Some(unimp));
    }

    #[test]
    fn counters_saturate() {
        let mut diag = LinflexDiag {
            rx_overrun_count: u16::MAX,
            resume_count: u16::MAX,
            ..LinflexDiag::default()
        };
        diag.record_rx(true);
        diag.record_resume();

        assert_eq!(diag.rx_byte_count, 1);
        assert_eq!(diag.rx_overrun_count, u16::MAX);
        assert_eq!(diag.resume_count, u16::MAX);
    }

    #[test]
    fn reset_clears_everything() {
        let mut diag = LinflexDiag::new();
        diag.record_tx();
        diag.record_rx(false);
        diag.reset();
        assert_eq!(diag, LinflexDiag::default());
    }
}
