use super::*;
use std::fmt;

/// Per-flag effect hints for one opcode, in ZNHC order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FlagSpec {
    pub z: FlagAction,
    pub n: FlagAction,
    pub h: FlagAction,
    pub c: FlagAction,
}

impl FlagSpec {
    /// Pairs each action with its bit mask in F.
    pub fn actions(&self) -> [(u8, FlagAction); 4] {
        use crate::constants::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
        [
            (FLAG_Z, self.z),
            (FLAG_N, self.n),
            (FLAG_H, self.h),
            (FLAG_C, self.c),
        ]
    }

    /// Mask of the flags the instruction never touches.
    pub fn preserved_mask(&self) -> u8 {
        self.actions()
            .iter()
            .filter(|(_, action)| *action == FlagAction::None)
            .fold(0, |mask, (bit, _)| mask | bit)
    }
}

impl fmt::Display for FlagSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Calculated flags print their own letter, the rest their action symbol.
        let letters = ['Z', 'N', 'H', 'C'];
        write!(f, "[")?;
        for ((_, action), letter) in self.actions().iter().zip(letters) {
            if *action == FlagAction::Calculate {
                write!(f, "{}", letter)?;
            } else {
                write!(f, "{}", action)?;
            }
        }
        write!(f, "]")
    }
}
