//! LINFlex controller model in UART mode.
//!
//! Every entry point runs to completion before the next one starts; the
//! surrounding bus serializes calls, so the model holds no locks.

mod irq;
mod read;
mod serial;
mod write;

pub use irq::interrupt_pending;

use crate::{
    decode_register, validate_access_width, validate_window_offset, AccessError, AccessKind,
    InterruptLine, LinflexConfig, LinflexDiag, LinflexRegister, LinflexSnapshot, MmioDevice,
    RegisterFault, RegisterFile, SerialBackend, UARTSR_DTFTFF,
};

/// LINFlex peripheral bound to a serial transport and an interrupt consumer.
#[derive(Debug)]
pub struct Linflex<S, L> {
    config: LinflexConfig,
    regs: RegisterFile,
    serial: S,
    irq: L,
    line_level: bool,
    diag: LinflexDiag,
}

impl<S: SerialBackend, L: InterruptLine> Linflex<S, L> {
    /// Creates a device with a zeroed register file.
    ///
    /// Run [`Self::reset`] (or the individual phases) before handing the
    /// device to a guest.
    #[must_use]
    pub fn new(config: LinflexConfig, serial: S, irq: L) -> Self {
        Self {
            config,
            regs: RegisterFile::default(),
            serial,
            irq,
            line_level: false,
            diag: LinflexDiag::new(),
        }
    }

    /// Returns the immutable device configuration.
    #[must_use]
    pub const fn config(&self) -> &LinflexConfig {
        &self.config
    }

    /// Returns the register file without triggering read side effects.
    #[must_use]
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Returns one register value without triggering read side effects.
    #[must_use]
    pub const fn peek(&self, reg: LinflexRegister) -> u32 {
        self.regs.get(reg)
    }

    /// Returns the attached serial transport.
    #[must_use]
    pub const fn serial(&self) -> &S {
        &self.serial
    }

    /// Returns the attached serial transport mutably.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    /// Returns the attached interrupt consumer.
    #[must_use]
    pub const fn irq(&self) -> &L {
        &self.irq
    }

    /// Level most recently driven onto the interrupt line.
    #[must_use]
    pub const fn irq_asserted(&self) -> bool {
        self.line_level
    }

    /// Returns host-side diagnostics.
    #[must_use]
    pub const fn diag(&self) -> &LinflexDiag {
        &self.diag
    }

    /// Consumes the device and returns its collaborators.
    #[must_use]
    pub fn into_parts(self) -> (S, L) {
        (self.serial, self.irq)
    }

    /// Runs the enter, hold, and exit reset phases in order.
    pub fn reset(&mut self) {
        self.reset_enter();
        self.reset_hold();
        self.reset_exit();
    }

    /// Reset enter phase: installs documented power-on register values.
    pub fn reset_enter(&mut self) {
        self.install(RegisterFile::power_on());
        self.diag.reset();
    }

    /// Reset hold phase: marks the transmitter ready when configured to.
    pub fn reset_hold(&mut self) {
        if self.config.transmit_ready_at_reset {
            self.regs.set_bits(LinflexRegister::Uartsr, UARTSR_DTFTFF);
        }
    }

    /// Reset exit phase: drives the interrupt line and re-arms input.
    pub fn reset_exit(&mut self) {
        self.update_irq();
        self.resume_input();
    }

    /// Captures the persisted device state.
    #[must_use]
    pub const fn snapshot(&self) -> LinflexSnapshot {
        LinflexSnapshot::new(self.regs)
    }

    /// Replaces the register file from a snapshot and reconciles the
    /// interrupt line. No other field is adjusted.
    pub fn restore(&mut self, snapshot: &LinflexSnapshot) {
        self.install(snapshot.regs);
        self.update_irq();
    }

    const fn install(&mut self, regs: RegisterFile) {
        self.regs = regs;
    }

    fn record_fault(&mut self, fault: RegisterFault) {
        match fault {
            RegisterFault::InvalidRegister { .. } => log::warn!("linflex: {fault}"),
            RegisterFault::UnimplementedRegister { .. } => log::debug!("linflex: {fault}"),
        }
        self.diag.record_fault(fault);
    }

    fn decode(&mut self, offset: u64, kind: AccessKind) -> Option<LinflexRegister> {
        let reg = decode_register(offset);
        if reg.is_none() {
            self.record_fault(RegisterFault::InvalidRegister { offset, kind });
        }
        reg
    }
}

impl<S: SerialBackend, L: InterruptLine> MmioDevice for Linflex<S, L> {
    fn read(&mut self, offset: u64, size: u8) -> Result<u32, AccessError> {
        validate_access_width(size)?;
        validate_window_offset(offset)?;

        Ok(self
            .decode(offset, AccessKind::Read)
            .map_or(0, |reg| self.read_register(reg)))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn write(&mut self, offset: u64, value: u64, size: u8) -> Result<(), AccessError> {
        validate_access_width(size)?;
        validate_window_offset(offset)?;

        if let Some(reg) = self.decode(offset, AccessKind::Write) {
            self.write_register(reg, value as u32);
        }
        self.update_irq();
        Ok(())
    }
}
