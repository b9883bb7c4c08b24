#![no_main]

use libfuzzer_sys::fuzz_target;
use linflex_uart::{
    interrupt_pending, BufferedSerial, IrqLevel, Linflex, LinflexConfig, MmioDevice,
    UARTSR_RX_FLAGS,
};

fuzz_target!(|data: &[u8]| {
    let mut dev = Linflex::new(
        LinflexConfig::default(),
        BufferedSerial::new(),
        IrqLevel::default(),
    );
    dev.reset();

    for chunk in data.chunks_exact(7) {
        let offset = u64::from(u16::from_be_bytes([chunk[0], chunk[1]]));
        let value = u32::from_be_bytes([chunk[2], chunk[3], chunk[4], chunk[5]]);
        let op = chunk[6];
        let size = op & 0x07;

        match op >> 6 {
            0 => {
                let _ = dev.read(offset, size);
            }
            1 | 2 => {
                let _ = dev.write(offset, u64::from(value), size);
            }
            _ => {
                if dev.can_receive() {
                    dev.receive(chunk[5]);
                }
            }
        }

        assert_eq!(dev.irq().is_asserted(), dev.irq_asserted());
        if dev.irq_asserted() {
            assert!(interrupt_pending(dev.registers()));
        }
        let gate_open = dev.registers().get(linflex_uart::LinflexRegister::Uartsr)
            & UARTSR_RX_FLAGS
            == 0;
        assert_eq!(dev.can_receive(), gate_open);
    }
});
