pub mod alu;
pub mod error;
pub mod instruction_set;
pub mod registers;
pub mod snapshot;

use std::fmt;
use std::sync::Arc;

use crate::constants::*;
use crate::mmu::Memory;
use crate::opcodes::{OpcodeInfo, OpcodeTable};

pub use error::StepError;
pub use registers::Registers;
pub use snapshot::CpuSnapshot;

#[derive(Debug, Clone)]
pub struct Cpu {
    pub regs: Registers,
    table: Arc<OpcodeTable>,

    // Internal state
    pub halted: bool,
    /// Interrupt Master Enable. Only latched, interrupts are never serviced.
    pub ime: bool,
}

impl Cpu {
    /// A CPU at power-on, about to run the boot overlay.
    pub fn new(table: Arc<OpcodeTable>) -> Self {
        Self::with_registers(table, Registers::new())
    }

    pub fn with_registers(table: Arc<OpcodeTable>, regs: Registers) -> Self {
        Self {
            regs,
            table,
            halted: false,
            ime: false,
        }
    }

    pub fn table(&self) -> &OpcodeTable {
        &self.table
    }

    /// Decodes the instruction at PC without touching any state.
    pub fn peek(&self, bus: &impl Memory) -> &OpcodeInfo {
        let pc = self.regs.pc;
        let opcode = bus.read_byte(pc);
        if opcode == CB_PREFIX_OPCODE_BYTE {
            self.table.prefixed(bus.read_byte(pc.wrapping_add(1)))
        } else {
            self.table.unprefixed(opcode)
        }
    }

    /// Executes one instruction and returns the cycles it took.
    ///
    /// An unimplemented opcode is reported before anything is modified, so
    /// the CPU and memory are left exactly as they were.
    pub fn step(&mut self, bus: &mut impl Memory) -> Result<u8, StepError> {
        if self.halted {
            return Ok(HALT_IDLE_CYCLES);
        }

        let pc = self.regs.pc;
        let info = self.peek(bus);
        let Some(family) = info.family() else {
            return Err(StepError::Unimplemented {
                index: info.index(),
                opcode: info.opcode,
                prefixed: info.prefixed,
                pc,
            });
        };
        let cycles = info.cycles;
        let opcode_len = if info.prefixed { 2 } else { 1 };

        self.regs.pc = pc.wrapping_add(opcode_len);
        Ok(self.execute(family, cycles, bus))
    }

    /// Reads the byte at PC and moves past it.
    pub fn fetch_byte(&mut self, bus: &impl Memory) -> u8 {
        let val = bus.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        val
    }

    /// Reads the little-endian word at PC and moves past it.
    pub fn fetch_word(&mut self, bus: &impl Memory) -> u16 {
        let val = bus.read_u16(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(2);
        val
    }

    /// Pushes a 16-bit value onto the stack
    pub fn push_u16(&mut self, bus: &mut impl Memory, value: u16) {
        let [high, low] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write_byte(self.regs.sp, high);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write_byte(self.regs.sp, low);
    }

    /// Pops a 16-bit value from the stack
    pub fn pop_u16(&mut self, bus: &impl Memory) -> u16 {
        let low = bus.read_byte(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let high = bus.read_byte(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_be_bytes([high, low])
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.regs)?;
        if self.halted {
            write!(f, " (halted)")?;
        }
        Ok(())
    }
}
