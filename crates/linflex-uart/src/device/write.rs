//! Guest write protocol.

use crate::{
    AccessKind, InterruptLine, Linflex, LinflexRegister, RegisterFault, SerialBackend,
    LINCR1_INIT, LINCR1_WRITE_MASK, LINIER_WRITE_MASK, LINSR_LINS_INIT, UARTCR_RUNTIME_MASK,
    UARTCR_UART, UARTSR_DTFTFF, UARTSR_RX_FLAGS, UARTSR_WRITE_MASK,
};

impl<S: SerialBackend, L: InterruptLine> Linflex<S, L> {
    /// Applies a guest store to `reg`. Does not touch the interrupt line.
    pub(super) fn write_register(&mut self, reg: LinflexRegister, value: u32) {
        match reg {
            LinflexRegister::Lincr1 => self.write_lincr1(value),
            LinflexRegister::Linier => self.regs.set(reg, value & LINIER_WRITE_MASK),
            LinflexRegister::Uartcr => self.write_uartcr(value),
            LinflexRegister::Uartsr => self.write_uartsr(value),
            LinflexRegister::Bdrl => self.write_bdrl(value),
            LinflexRegister::Linsr
            | LinflexRegister::Linesr
            | LinflexRegister::Lintcsr
            | LinflexRegister::Linocr
            | LinflexRegister::Lintocr
            | LinflexRegister::Linfbrr
            | LinflexRegister::Linibrr
            | LinflexRegister::Lincfr
            | LinflexRegister::Lincr2
            | LinflexRegister::Bidr
            | LinflexRegister::Bdrm
            | LinflexRegister::Gcr
            | LinflexRegister::Uartpto
            | LinflexRegister::Uartcto
            | LinflexRegister::Dmatxe
            | LinflexRegister::Dmarxe => self.write_unimplemented(reg),
        }
    }

    fn write_lincr1(&mut self, value: u32) {
        let stored = value & LINCR1_WRITE_MASK;
        self.regs.set(LinflexRegister::Lincr1, stored);
        // LINS only moves back out of INIT through reset.
        if stored & LINCR1_INIT != 0 {
            self.regs.set_bits(LinflexRegister::Linsr, LINSR_LINS_INIT);
        }
    }

    // Fields accumulate; only reset clears them.
    fn write_uartcr(&mut self, value: u32) {
        let reg = LinflexRegister::Uartcr;
        if self.regs.any_set(LinflexRegister::Lincr1, LINCR1_INIT) {
            self.regs.set_bits(reg, value & UARTCR_UART);
            if self.regs.any_set(reg, UARTCR_UART) {
                self.regs.set_bits(reg, value);
            }
        } else if self.regs.any_set(reg, UARTCR_UART) {
            self.regs.set_bits(reg, value & UARTCR_RUNTIME_MASK);
        } else {
            log::debug!("linflex: UARTCR write {value:#010x} dropped outside init mode");
        }
    }

    fn write_uartsr(&mut self, value: u32) {
        let reg = LinflexRegister::Uartsr;
        let value = value & UARTSR_WRITE_MASK;
        if self.regs.get(reg) & value & UARTSR_RX_FLAGS != 0 {
            self.resume_input();
        }
        self.regs.clear_bits(reg, value);
    }

    fn write_bdrl(&mut self, value: u32) {
        self.regs.set(LinflexRegister::Bdrl, value);
        let [byte, ..] = value.to_le_bytes();
        log::trace!("linflex: tx {byte:#04x}");
        self.serial.write_byte(byte);
        self.diag.record_tx();
        // Transmission completes synchronously with the store.
        self.regs.set_bits(LinflexRegister::Uartsr, UARTSR_DTFTFF);
    }

    // The stored value is left alone; only the fault is reported.
    fn write_unimplemented(&mut self, reg: LinflexRegister) {
        self.record_fault(RegisterFault::UnimplementedRegister {
            register: reg,
            kind: AccessKind::Write,
        });
    }
}
