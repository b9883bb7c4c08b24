//! Interrupt aggregation.

use crate::{
    InterruptLine, Linflex, LinflexRegister, RegisterFile, SerialBackend, LINIER_DRIE,
    LINIER_DTIE, UARTSR_DRFRFE, UARTSR_DTFTFF,
};

/// Computes the interrupt line level from register state.
///
/// Asserted when receive-complete is enabled and pending, or when
/// transmit-complete is enabled and pending.
#[must_use]
pub const fn interrupt_pending(regs: &RegisterFile) -> bool {
    let rx = regs.any_set(LinflexRegister::Linier, LINIER_DRIE)
        && regs.any_set(LinflexRegister::Uartsr, UARTSR_DRFRFE);
    let tx = regs.any_set(LinflexRegister::Linier, LINIER_DTIE)
        && regs.any_set(LinflexRegister::Uartsr, UARTSR_DTFTFF);
    rx || tx
}

impl<S: SerialBackend, L: InterruptLine> Linflex<S, L> {
    /// Recomputes and re-drives the interrupt line.
    pub(super) fn update_irq(&mut self) {
        let level = interrupt_pending(&self.regs);
        if level != self.line_level {
            log::trace!("linflex: irq {}", if level { "raised" } else { "lowered" });
        }
        self.line_level = level;
        self.irq.set_level(level);
    }
}
