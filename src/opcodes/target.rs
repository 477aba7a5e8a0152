use std::fmt;

use super::*;

/// An 8-bit location an instruction can read from and write to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Target {
    Register8(Reg8),
    AddrRegister16(Reg16),          // (BC), (DE), (HL)
    AddrRegister16Increment(Reg16), // (HL+)
    AddrRegister16Decrement(Reg16), // (HL-)
    AddrImmediate8,                 // LDH (a8): 0xFF00 + n8
    AddrRegister8(Reg8),            // LDH (C): 0xFF00 + C
    AddrImmediate16,                // (a16)
}

/// Anything an 8-bit operation can take its input from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Source {
    Target(Target),
    Immediate8,
}

impl Target {
    /// Bytes this operand pulls from the instruction stream.
    pub fn immediate_bytes(&self) -> u8 {
        match self {
            Target::AddrImmediate8 => 1,
            Target::AddrImmediate16 => 2,
            _ => 0,
        }
    }

    /// Whether the location can be read, modified and written back in one
    /// instruction (INC, DEC, CB rotates, SET, RES).
    pub fn is_read_modify_write(&self) -> bool {
        matches!(
            self,
            Target::Register8(_) | Target::AddrRegister16(Reg16::HL)
        )
    }

    pub fn as_string(&self) -> String {
        match self {
            Target::Register8(reg) => format!("{}", reg),
            Target::AddrRegister16(reg) => format!("({})", reg),
            Target::AddrRegister16Increment(reg) => format!("({}+)", reg),
            Target::AddrRegister16Decrement(reg) => format!("({}-)", reg),
            Target::AddrImmediate8 => "(a8)".to_string(),
            Target::AddrRegister8(reg) => format!("({})", reg),
            Target::AddrImmediate16 => "(a16)".to_string(),
        }
    }
}

impl Source {
    pub fn immediate_bytes(&self) -> u8 {
        match self {
            Source::Target(target) => target.immediate_bytes(),
            Source::Immediate8 => 1,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Target(target) => write!(f, "{}", target),
            Source::Immediate8 => write!(f, "n8"),
        }
    }
}
