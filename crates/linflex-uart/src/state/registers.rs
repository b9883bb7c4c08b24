use std::fmt;

/// Number of enumerated LINFlex registers (`LINCR1..=DMARXE`).
pub const REGISTER_COUNT: usize = 21;

/// `LINCR1` initialization-mode request bit.
pub const LINCR1_INIT: u32 = 1 << 0;
/// `LINCR1` sleep-mode request bit.
pub const LINCR1_SLEEP: u32 = 1 << 1;
/// `LINCR1` bit that always reads back as one.
pub const LINCR1_READ_FORCED: u32 = 1 << 7;
/// Bits of `LINCR1` that retain written values.
pub const LINCR1_WRITE_MASK: u32 = 0x0001_DF27;

/// `LINIER` data-transmitted interrupt enable.
pub const LINIER_DTIE: u32 = 1 << 0;
/// `LINIER` data-reception-complete interrupt enable.
pub const LINIER_DRIE: u32 = 1 << 2;
/// Bits of `LINIER` that retain written values.
pub const LINIER_WRITE_MASK: u32 = 0x0000_FFFF;

/// `LINSR` LIN-state field value reported while in initialization mode.
pub const LINSR_LINS_INIT: u32 = 1 << 12;

/// `UARTCR` UART-mode enable. Gates every other `UARTCR` field.
pub const UARTCR_UART: u32 = 1 << 0;
/// `UARTCR` fields writable once UART mode is latched outside init mode.
pub const UARTCR_RUNTIME_MASK: u32 = 0x0070_FC30;

/// `UARTSR` data-transmission-completed flag.
pub const UARTSR_DTFTFF: u32 = 1 << 1;
/// `UARTSR` data-reception-completed flag.
pub const UARTSR_DRFRFE: u32 = 1 << 2;
/// `UARTSR` receive-message-buffer flag.
pub const UARTSR_RMB: u32 = 1 << 9;
/// Receive flags that gate input acceptance.
pub const UARTSR_RX_FLAGS: u32 = UARTSR_DRFRFE | UARTSR_RMB;
/// `UARTSR` bits addressable by software (upper half is reserved).
pub const UARTSR_WRITE_MASK: u32 = 0x0000_FFFF;

/// `BDRM` bits holding the last received character.
pub const BDRM_DATA_MASK: u32 = 0x0000_00FF;

/// Register identifier decoded from a word offset inside the MMIO window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum LinflexRegister {
    /// LIN control register 1.
    Lincr1 = 0,
    /// LIN interrupt enable register.
    Linier = 1,
    /// LIN status register.
    Linsr = 2,
    /// LIN error status register.
    Linesr = 3,
    /// UART mode control register.
    Uartcr = 4,
    /// UART mode status register.
    Uartsr = 5,
    /// LIN timeout control status register.
    Lintcsr = 6,
    /// LIN output compare register.
    Linocr = 7,
    /// LIN timeout control register.
    Lintocr = 8,
    /// LIN fractional baud rate register.
    Linfbrr = 9,
    /// LIN integer baud rate register.
    Linibrr = 10,
    /// LIN checksum field register.
    Lincfr = 11,
    /// LIN control register 2.
    Lincr2 = 12,
    /// Buffer identifier register.
    Bidr = 13,
    /// Buffer data register, least significant (transmit side).
    Bdrl = 14,
    /// Buffer data register, most significant (receive side).
    Bdrm = 15,
    /// Global control register.
    Gcr = 16,
    /// UART preset timeout register.
    Uartpto = 17,
    /// UART current timeout register.
    Uartcto = 18,
    /// DMA transmit enable register.
    Dmatxe = 19,
    /// DMA receive enable register.
    Dmarxe = 20,
}

impl LinflexRegister {
    /// Ordered list of all registers, indexed by word offset.
    pub const ALL: [Self; REGISTER_COUNT] = [
        Self::Lincr1,
        Self::Linier,
        Self::Linsr,
        Self::Linesr,
        Self::Uartcr,
        Self::Uartsr,
        Self::Lintcsr,
        Self::Linocr,
        Self::Lintocr,
        Self::Linfbrr,
        Self::Linibrr,
        Self::Lincfr,
        Self::Lincr2,
        Self::Bidr,
        Self::Bdrl,
        Self::Bdrm,
        Self::Gcr,
        Self::Uartpto,
        Self::Uartcto,
        Self::Dmatxe,
        Self::Dmarxe,
    ];

    /// Returns the register-file slot for this register.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the byte offset of this register inside the MMIO window.
    #[must_use]
    pub const fn offset(self) -> u64 {
        (self as u64) * 4
    }

    /// Decodes a register-file slot into a register identifier.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < REGISTER_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Power-on value applied during the reset enter phase.
    #[must_use]
    pub const fn reset_value(self) -> u32 {
        match self {
            Self::Lincr1 => 0x0000_0082,
            Self::Linsr => 0x0000_0040,
            Self::Lintcsr => 0x0000_0200,
            Self::Linocr => 0x0000_FFFF,
            Self::Lintocr => 0x0000_0E2C,
            Self::Lincr2 => 0x0000_6000,
            Self::Uartpto => 0x0000_0FFF,
            Self::Linier
            | Self::Linesr
            | Self::Uartcr
            | Self::Uartsr
            | Self::Linfbrr
            | Self::Linibrr
            | Self::Lincfr
            | Self::Bidr
            | Self::Bdrl
            | Self::Bdrm
            | Self::Gcr
            | Self::Uartcto
            | Self::Dmatxe
            | Self::Dmarxe => 0,
        }
    }

    /// Hardware mnemonic used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lincr1 => "LINCR1",
            Self::Linier => "LINIER",
            Self::Linsr => "LINSR",
            Self::Linesr => "LINESR",
            Self::Uartcr => "UARTCR",
            Self::Uartsr => "UARTSR",
            Self::Lintcsr => "LINTCSR",
            Self::Linocr => "LINOCR",
            Self::Lintocr => "LINTOCR",
            Self::Linfbrr => "LINFBRR",
            Self::Linibrr => "LINIBRR",
            Self::Lincfr => "LINCFR",
            Self::Lincr2 => "LINCR2",
            Self::Bidr => "BIDR",
            Self::Bdrl => "BDRL",
            Self::Bdrm => "BDRM",
            Self::Gcr => "GCR",
            Self::Uartpto => "UARTPTO",
            Self::Uartcto => "UARTCTO",
            Self::Dmatxe => "DMATXE",
            Self::Dmarxe => "DMARXE",
        }
    }

    /// Returns `true` when guest reads of this register have modeled semantics.
    ///
    /// Every other register reads back its stored value and reports an
    /// unimplemented access.
    #[must_use]
    pub const fn read_modeled(self) -> bool {
        matches!(self, Self::Lincr1 | Self::Bdrm)
    }

    /// Returns `true` when guest writes of this register have modeled semantics.
    #[must_use]
    pub const fn write_modeled(self) -> bool {
        matches!(
            self,
            Self::Lincr1 | Self::Linier | Self::Uartcr | Self::Uartsr | Self::Bdrl
        )
    }
}

impl fmt::Display for LinflexRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-size 32-bit register file. The sole unit of persisted device state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RegisterFile {
    words: [u32; REGISTER_COUNT],
}

impl RegisterFile {
    /// Returns a register file holding documented power-on values.
    #[must_use]
    pub fn power_on() -> Self {
        let mut regs = Self::default();
        for reg in LinflexRegister::ALL {
            regs.set(reg, reg.reset_value());
        }
        regs
    }

    /// Builds a register file from raw words in register-index order.
    #[must_use]
    pub const fn from_words(words: [u32; REGISTER_COUNT]) -> Self {
        Self { words }
    }

    /// Returns raw words in register-index order.
    #[must_use]
    pub const fn words(&self) -> &[u32; REGISTER_COUNT] {
        &self.words
    }

    /// Reads a register without side effects.
    #[must_use]
    pub const fn get(&self, reg: LinflexRegister) -> u32 {
        self.words[reg.index()]
    }

    /// Stores a register value verbatim.
    pub const fn set(&mut self, reg: LinflexRegister, value: u32) {
        self.words[reg.index()] = value;
    }

    /// ORs `mask` into a register.
    pub const fn set_bits(&mut self, reg: LinflexRegister, mask: u32) {
        self.words[reg.index()] |= mask;
    }

    /// Clears every bit of `mask` from a register.
    pub const fn clear_bits(&mut self, reg: LinflexRegister, mask: u32) {
        self.words[reg.index()] &= !mask;
    }

    /// Returns `true` when any bit of `mask` is set in a register.
    #[must_use]
    pub const fn any_set(&self, reg: LinflexRegister, mask: u32) -> bool {
        (self.words[reg.index()] & mask) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LinflexRegister, RegisterFile, LINCR1_INIT, REGISTER_COUNT, UARTSR_DRFRFE, UARTSR_RMB,
    };
    use rstest::rstest;

    #[test]
    fn register_index_decode_matches_layout() {
        assert_eq!(REGISTER_COUNT, 21);

        for (index, reg) in LinflexRegister::ALL.iter().copied().enumerate() {
            assert_eq!(reg.index(), index);
            assert_eq!(LinflexRegister::from_index(index), Some(reg));
        }

        assert!(LinflexRegister::from_index(REGISTER_COUNT).is_none());
    }

    #[rstest]
    #[case(LinflexRegister::Lincr1, 0x00, 0x0000_0082)]
    #[case(LinflexRegister::Linier, 0x04, 0x0000_0000)]
    #[case(LinflexRegister::Linsr, 0x08, 0x0000_0040)]
    #[case(LinflexRegister::Linesr, 0x0C, 0x0000_0000)]
    #[case(LinflexRegister::Uartcr, 0x10, 0x0000_0000)]
    #[case(LinflexRegister::Uartsr, 0x14, 0x0000_0000)]
    #[case(LinflexRegister::Lintcsr, 0x18, 0x0000_0200)]
    #[case(LinflexRegister::Linocr, 0x1C, 0x0000_FFFF)]
    #[case(LinflexRegister::Lintocr, 0x20, 0x0000_0E2C)]
    #[case(LinflexRegister::Linfbrr, 0x24, 0x0000_0000)]
    #[case(LinflexRegister::Linibrr, 0x28, 0x0000_0000)]
    #[case(LinflexRegister::Lincfr, 0x2C, 0x0000_0000)]
    #[case(LinflexRegister::Lincr2, 0x30, 0x0000_6000)]
    #[case(LinflexRegister::Bidr, 0x34, 0x0000_0000)]
    #[case(LinflexRegister::Bdrl, 0x38, 0x0000_0000)]
    #[case(LinflexRegister::Bdrm, 0x3C, 0x0000_0000)]
    #[case(LinflexRegister::Gcr, 0x40, 0x0000_0000)]
    #[case(LinflexRegister::Uartpto, 0x44, 0x0000_0FFF)]
    #[case(LinflexRegister::Uartcto, 0x48, 0x0000_0000)]
    #[case(LinflexRegister::Dmatxe, 0x4C, 0x0000_0000)]
    #[case(LinflexRegister::Dmarxe, 0x50, 0x0000_0000)]
    fn offsets_and_power_on_values_match_memory_map(
        #[case] reg: LinflexRegister,
        #[case] offset: u64,
        #[case] reset_value: u32,
    ) {
        assert_eq!(reg.offset(), offset);
        assert_eq!(reg.reset_value(), reset_value);
        assert_eq!(RegisterFile::power_on().get(reg), reset_value);
    }

    #[test]
    fn bit_helpers_only_touch_selected_bits() {
        let mut regs = RegisterFile::default();
        regs.set_bits(LinflexRegister::Uartsr, UARTSR_DRFRFE | UARTSR_RMB);
        assert!(regs.any_set(LinflexRegister::Uartsr, UARTSR_RMB));

        regs.clear_bits(LinflexRegister::Uartsr, UARTSR_RMB);
        assert_eq!(regs.get(LinflexRegister::Uartsr), UARTSR_DRFRFE);
        assert!(!regs.any_set(LinflexRegister::Lincr1, LINCR1_INIT));
    }

    #[test]
    fn raw_words_roundtrip_through_register_file() {
        let mut words = [0_u32; REGISTER_COUNT];
        words[LinflexRegister::Bdrm.index()] = 0x41;
        let regs = RegisterFile::from_words(words);

        assert_eq!(regs.get(LinflexRegister::Bdrm), 0x41);
        assert_eq!(regs.words(), &words);
    }

    #[test]
    fn modeled_access_sets_are_narrow() {
        let reads: Vec<_> = LinflexRegister::ALL
            .into_iter()
            .filter(|reg| reg.read_modeled())
            .collect();
        assert_eq!(reads, [LinflexRegister::Lincr1, LinflexRegister::Bdrm]);

        let writes: Vec<_> = LinflexRegister::ALL
            .into_iter()
            .filter(|reg| reg.write_modeled())
            .collect();
        assert_eq!(
            writes,
            [
                LinflexRegister::Lincr1,
                LinflexRegister::Linier,
                LinflexRegister::Uartcr,
                LinflexRegister::Uartsr,
                LinflexRegister::Bdrl,
            ]
        );
    }

    #[test]
    fn display_uses_hardware_mnemonic() {
        assert_eq!(LinflexRegister::Uartsr.to_string(), "UARTSR");
        assert_eq!(LinflexRegister::Dmarxe.to_string(), "DMARXE");
    }
}
