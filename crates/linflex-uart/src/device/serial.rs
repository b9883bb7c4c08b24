//! Serial transport binding: acceptance gate, delivery, and resume.

use crate::{
    BufferedSerial, InterruptLine, Linflex, LinflexRegister, SerialBackend, UARTSR_DRFRFE,
    UARTSR_RMB, UARTSR_RX_FLAGS,
};

impl<S: SerialBackend, L: InterruptLine> Linflex<S, L> {
    /// Acceptance gate: `true` while neither receive flag is pending.
    #[must_use]
    pub const fn can_receive(&self) -> bool {
        !self.regs.any_set(LinflexRegister::Uartsr, UARTSR_RX_FLAGS)
    }

    /// Delivers one inbound byte from the transport.
    ///
    /// Transports must consult [`Self::can_receive`] first. A byte delivered
    /// while the gate is closed overwrites the pending one and is counted as
    /// an overrun.
    pub fn receive(&mut self, byte: u8) {
        let overrun = !self.can_receive();
        if overrun {
            log::warn!("linflex: rx {byte:#04x} overran an unread byte");
        } else {
            log::trace!("linflex: rx {byte:#04x}");
        }
        self.diag.record_rx(overrun);

        self.regs.set(LinflexRegister::Bdrm, u32::from(byte));
        self.regs.set_bits(LinflexRegister::Uartsr, UARTSR_DRFRFE | UARTSR_RMB);
        self.update_irq();
    }

    /// Tells the transport it may deliver buffered input.
    pub(super) fn resume_input(&mut self) {
        self.diag.record_resume();
        self.serial.accept_input();
    }
}

impl<L: InterruptLine> Linflex<BufferedSerial, L> {
    /// Delivers queued transport bytes while the acceptance gate is open.
    ///
    /// Returns the number of bytes delivered.
    pub fn pump_input(&mut self) -> usize {
        let mut delivered = 0;
        while self.can_receive() {
            let Some(byte) = self.serial.pop_input() else {
                break;
            };
            self.receive(byte);
            delivered += 1;
        }
        delivered
    }
}
