/// 16-bit register views. SP is a real 16-bit register, the others are
/// pairs of 8-bit registers with the first one in the high byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AF" => Some(Reg16::AF),
            "BC" => Some(Reg16::BC),
            "DE" => Some(Reg16::DE),
            "HL" => Some(Reg16::HL),
            "SP" => Some(Reg16::SP),
            _ => None,
        }
    }
}

impl std::fmt::Display for Reg16 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
