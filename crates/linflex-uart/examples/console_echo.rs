//! Drives the UART the way a polled console driver would and echoes input.
//!
//! Run with `RUST_LOG=trace` to see every transmitted and received byte.

use linflex_uart::{
    BufferedSerial, IrqLevel, Linflex, LinflexConfig, MmioDevice, LINCR1_INIT, UARTCR_UART,
    UARTSR_DRFRFE, UARTSR_DTFTFF, UARTSR_RMB,
};
use proptest as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use serde_json as _;
use thiserror as _;

const LINCR1: u64 = 0x00;
const UARTCR: u64 = 0x10;
const UARTSR: u64 = 0x14;
const BDRL: u64 = 0x38;
const BDRM: u64 = 0x3C;

fn put(dev: &mut Linflex<BufferedSerial, IrqLevel>, byte: u8) {
    while dev.read(UARTSR, 4).unwrap_or(0) & UARTSR_DTFTFF == 0 {}
    let _ = dev.write(UARTSR, u64::from(UARTSR_DTFTFF), 4);
    let _ = dev.write(BDRL, u64::from(byte), 1);
}

fn get(dev: &mut Linflex<BufferedSerial, IrqLevel>) -> Option<u8> {
    dev.pump_input();
    if dev.read(UARTSR, 4).unwrap_or(0) & UARTSR_RMB == 0 {
        return None;
    }
    let byte = dev.read(BDRM, 1).unwrap_or(0).to_le_bytes()[0];
    let _ = dev.write(UARTSR, u64::from(UARTSR_DRFRFE | UARTSR_RMB), 4);
    Some(byte)
}

fn main() {
    env_logger::init();

    let mut dev = Linflex::new(
        LinflexConfig::default(),
        BufferedSerial::new(),
        IrqLevel::default(),
    );
    dev.reset();

    let _ = dev.write(LINCR1, u64::from(LINCR1_INIT), 4);
    let _ = dev.write(UARTCR, u64::from(UARTCR_UART | 0x30), 4);
    let _ = dev.write(LINCR1, 0, 4);

    dev.serial_mut().queue_input(b"hello, linflex\n");
    while let Some(byte) = get(&mut dev) {
        put(&mut dev, byte);
    }

    let echoed = dev.serial_mut().take_output();
    print!("{}", String::from_utf8_lossy(&echoed));
    log::info!(
        "echoed {} bytes, {} resume notifications",
        echoed.len(),
        dev.diag().resume_count
    );
}
