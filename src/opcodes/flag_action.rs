use std::fmt;

/// What an instruction does to one flag, as hinted by the opcode dataset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FlagAction {
    #[default]
    None, // "-" (Not affected)
    Set,       // "1" (Always set)
    Reset,     // "0" (Always reset)
    Calculate, // "Z", "N", "H", or "C" (Computed at runtime)
    Invert,    // CCF complements the carry
}

impl FlagAction {
    /// Parses a dataset hint. `mnemonic` is needed because the dataset
    /// spells CCF's inversion the same way as a computed carry.
    pub fn from_hint(hint: &str, mnemonic: &str) -> Option<Self> {
        match hint {
            "C" if mnemonic == "CCF" => Some(FlagAction::Invert),
            "Z" | "N" | "H" | "C" => Some(FlagAction::Calculate),
            "0" => Some(FlagAction::Reset),
            "1" => Some(FlagAction::Set),
            "-" => Some(FlagAction::None),
            _ => None,
        }
    }
}

impl fmt::Display for FlagAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match self {
            FlagAction::None => '-',      // Not affected
            FlagAction::Calculate => 'v', // Varies/Calculated
            FlagAction::Set => '1',       // Hardcoded Set
            FlagAction::Reset => '0',     // Hardcoded Reset
            FlagAction::Invert => '!',
        };
        write!(f, "{}", c)
    }
}
