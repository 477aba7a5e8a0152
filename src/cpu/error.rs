use std::fmt;

/// A step that could not be executed. Nothing was modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    Unimplemented {
        /// Slot in the opcode table (`256 +` for CB-prefixed opcodes).
        index: usize,
        opcode: u8,
        prefixed: bool,
        /// Address of the first opcode byte.
        pc: u16,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::Unimplemented {
                index,
                opcode,
                prefixed,
                pc,
            } => {
                let prefix = if *prefixed { "CB " } else { "" };
                write!(
                    f,
                    "Unimplemented opcode {}0x{:02X} (slot {}) at {:#06X}",
                    prefix, opcode, index, pc
                )
            }
        }
    }
}

impl std::error::Error for StepError {}
