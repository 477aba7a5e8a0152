use std::fmt;

/// Branch predicates evaluated against the flags register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Condition {
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

impl Condition {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NZ" => Some(Condition::NotZero),
            "Z" => Some(Condition::Zero),
            "NC" => Some(Condition::NotCarry),
            "C" => Some(Condition::Carry),
            _ => None,
        }
    }

    /// Evaluates the predicate against a raw F register value.
    pub fn holds(self, f: u8) -> bool {
        use crate::constants::{FLAG_C, FLAG_Z};
        match self {
            Condition::NotZero => f & FLAG_Z == 0,
            Condition::Zero => f & FLAG_Z != 0,
            Condition::NotCarry => f & FLAG_C == 0,
            Condition::Carry => f & FLAG_C != 0,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::NotZero => "NZ",
            Condition::Zero => "Z",
            Condition::NotCarry => "NC",
            Condition::Carry => "C",
        };
        write!(f, "{}", s)
    }
}
