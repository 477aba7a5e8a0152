#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reg8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

impl Reg8 {
    /// Maps a dataset operand name to a register, if it is one.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "A" => Some(Reg8::A),
            "B" => Some(Reg8::B),
            "C" => Some(Reg8::C),
            "D" => Some(Reg8::D),
            "E" => Some(Reg8::E),
            "H" => Some(Reg8::H),
            "L" => Some(Reg8::L),
            _ => None,
        }
    }
}

impl std::fmt::Display for Reg8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Since the variants are named A, B, C...
        // the Debug implementation {:?} will output "A", "B", etc.
        write!(f, "{:?}", self)
    }
}
