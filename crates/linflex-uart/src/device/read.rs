//! Guest read protocol.

use crate::{
    AccessKind, InterruptLine, Linflex, LinflexRegister, RegisterFault, SerialBackend,
    BDRM_DATA_MASK, LINCR1_READ_FORCED,
};

impl<S: SerialBackend, L: InterruptLine> Linflex<S, L> {
    /// Computes the guest-visible value of `reg`. Never touches the
    /// interrupt line. Only LINCR1 and BDRM reads are modeled.
    pub(super) fn read_register(&mut self, reg: LinflexRegister) -> u32 {
        match reg {
            LinflexRegister::Lincr1 => {
                // Bit 7 reads as one and latches into the stored value.
                self.regs.set_bits(reg, LINCR1_READ_FORCED);
                self.regs.get(reg)
            }
            // Draining the buffer does not re-arm input; clearing UARTSR does.
            LinflexRegister::Bdrm => self.regs.get(reg) & BDRM_DATA_MASK,
            _ => {
                self.record_fault(RegisterFault::UnimplementedRegister {
                    register: reg,
                    kind: AccessKind::Read,
                });
                self.regs.get(reg)
            }
        }
    }
}
