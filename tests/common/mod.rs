#![allow(dead_code)]

pub mod ring_logger;

use lazy_static::lazy_static;
use std::sync::Arc;

use gbcore::cpu::Cpu;
use gbcore::mmu::{Bus, Memory};
use gbcore::opcodes::OpcodeTable;

pub use ring_logger::{captured_lines, dump_log, init_logger};

/// Work RAM, far from the stack and the boot overlay.
pub const PROGRAM_START: u16 = 0xC000;

lazy_static! {
    pub static ref TABLE: Arc<OpcodeTable> =
        Arc::new(OpcodeTable::builtin().expect("built-in opcode table"));
}

/// A CPU at `PROGRAM_START` with `program` written there.
pub fn bootstrap(program: &[u8]) -> (Cpu, Bus) {
    let mut bus = Bus::without_boot_rom();
    write_bytes(&mut bus, PROGRAM_START, program);
    let mut cpu = Cpu::new(Arc::clone(&TABLE));
    cpu.regs.pc = PROGRAM_START;
    (cpu, bus)
}

pub fn write_bytes(bus: &mut impl Memory, start: u16, bytes: &[u8]) {
    for (i, byte) in bytes.iter().enumerate() {
        bus.write_byte(start.wrapping_add(i as u16), *byte);
    }
}
