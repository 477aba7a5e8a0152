use std::fmt;

use super::*;

/// Declared cycle costs. `not_taken` is only present on conditional
/// control transfers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Cycles {
    pub taken: u8,
    pub not_taken: Option<u8>,
}

impl Cycles {
    /// Accepts one or two non-zero costs.
    pub fn from_list(cycles: &[u8]) -> Option<Self> {
        match cycles {
            [taken] if *taken > 0 => Some(Self {
                taken: *taken,
                not_taken: None,
            }),
            [taken, not_taken] if *taken > 0 && *not_taken > 0 => Some(Self {
                taken: *taken,
                not_taken: Some(*not_taken),
            }),
            _ => None,
        }
    }

    /// Picks the cost for a (possibly conditional) instruction.
    pub fn select(&self, condition_met: bool) -> u8 {
        if condition_met {
            self.taken
        } else {
            self.not_taken.unwrap_or(self.taken)
        }
    }

    pub fn contains(&self, cycles: u8) -> bool {
        self.taken == cycles || self.not_taken == Some(cycles)
    }
}

impl fmt::Display for Cycles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.not_taken {
            Some(not_taken) => write!(f, "{}/{}", self.taken, not_taken),
            None => write!(f, "{}", self.taken),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpcodeInfo {
    /// Empty for slots the dataset does not define.
    pub mnemonic: String,
    pub opcode: u8,
    pub prefixed: bool,
    /// Total length including the opcode (and prefix) bytes.
    pub bytes: u8,
    pub cycles: Cycles,
    pub operands: Vec<Operand>,
    pub flags: FlagSpec,
    pub binding: Binding,
}

impl OpcodeInfo {
    /// A slot the dataset left empty.
    pub fn undefined(index: usize) -> Self {
        Self {
            mnemonic: String::new(),
            opcode: (index & 0xFF) as u8,
            prefixed: index >= 256,
            bytes: if index >= 256 { 2 } else { 1 },
            cycles: Cycles::default(),
            operands: Vec::new(),
            flags: FlagSpec::default(),
            binding: Binding::Unimplemented,
        }
    }

    /// Position of this entry in the 512-slot table.
    pub fn index(&self) -> usize {
        if self.prefixed {
            256 + self.opcode as usize
        } else {
            self.opcode as usize
        }
    }

    pub fn family(&self) -> Option<Family> {
        self.binding.family()
    }

    pub fn is_implemented(&self) -> bool {
        self.binding.is_implemented()
    }
}

impl fmt::Display for OpcodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mnemonic.is_empty() {
            let prefix = if self.prefixed { "CB " } else { "" };
            return write!(f, "<undefined {}0x{:02X}>", prefix, self.opcode);
        }

        // Write the mnemonic (e.g., "LD", "JP")
        write!(f, "{:<5}", self.mnemonic)?;

        let operand_strings: Vec<String> = self.operands.iter().map(|o| o.to_string()).collect();
        write!(f, " {: <15} {: >6}", operand_strings.join(", "), self.flags)
    }
}
