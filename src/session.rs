use std::sync::Arc;

use crate::cpu::{Cpu, CpuSnapshot, Registers, StepError};
use crate::mmu::{BootRomError, Bus, Memory};
use crate::opcodes::{OpcodeInfo, OpcodeTable};

/// Binds together a CPU and the memory it runs against.
/// Used for holding the entire 'session' of an emulation.
pub struct Session {
    pub cpu: Cpu,
    pub bus: Bus,
}

impl Session {
    /// Starts at 0x0000 inside the boot overlay.
    pub fn with_boot_rom(
        table: Arc<OpcodeTable>,
        boot_rom: &[u8],
        program: &[u8],
    ) -> Result<Self, BootRomError> {
        let mut bus = Bus::new(boot_rom)?;
        bus.load_program(program);
        Ok(Session {
            cpu: Cpu::new(table),
            bus,
        })
    }

    /// Starts at the cartridge entry point as if the boot program had run.
    pub fn without_boot_rom(table: Arc<OpcodeTable>, program: &[u8]) -> Self {
        let mut bus = Bus::without_boot_rom();
        bus.load_program(program);
        Session {
            cpu: Cpu::with_registers(table, Registers::post_boot()),
            bus,
        }
    }

    pub fn step(&mut self) -> Result<u8, StepError> {
        self.cpu.step(&mut self.bus)
    }

    /// The instruction the next step will execute.
    pub fn current_instruction(&self) -> &OpcodeInfo {
        self.cpu.peek(&self.bus)
    }

    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot::from_cpu(&self.cpu, &self.bus)
    }

    pub fn read_byte(&self, addr: u16) -> u8 {
        self.bus.read_byte(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CARTRIDGE_ENTRY;

    fn table() -> Arc<OpcodeTable> {
        Arc::new(OpcodeTable::builtin().unwrap())
    }

    #[test]
    fn boot_session_starts_in_overlay() {
        // LD A, 0x01 ; LDH (0x50), A
        let boot = [0x3E, 0x01, 0xE0, 0x50];
        let mut program = vec![0u8; 0x200];
        program[0] = 0xAA;
        let mut session = Session::with_boot_rom(table(), &boot, &program).unwrap();

        assert_eq!(session.read_byte(0x0000), 0x3E);
        assert_eq!(session.step(), Ok(8));
        assert_eq!(session.step(), Ok(12));
        assert!(!session.bus.boot_overlay_active());
        assert_eq!(session.read_byte(0x0000), 0xAA);
    }

    #[test]
    fn plain_session_starts_at_entry_point() {
        let mut program = vec![0u8; 0x200];
        program[0x0100] = 0x00; // NOP
        program[0x0101] = 0x76; // HALT
        let mut session = Session::without_boot_rom(table(), &program);

        assert_eq!(session.cpu.regs.pc, CARTRIDGE_ENTRY);
        assert_eq!(session.current_instruction().mnemonic, "NOP");
        assert_eq!(session.step(), Ok(4));
        assert_eq!(session.current_instruction().mnemonic, "HALT");
        assert_eq!(
            session.snapshot().to_string(),
            "A:01 F:B0 B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE PC:0101 PCMEM:76,00,00,00"
        );
    }
}
