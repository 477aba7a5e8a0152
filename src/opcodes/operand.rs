use std::fmt;

/// An operand as described by the opcode dataset, before binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub name: String,
    /// Immediate bytes the operand occupies in the instruction stream.
    pub bytes: Option<u8>,
    /// `false` means the operand names a memory address, e.g. `(HL)`.
    pub immediate: bool,
    pub increment: bool,
    pub decrement: bool,
}

impl Operand {
    pub fn new(name: &str, immediate: bool) -> Self {
        Self {
            name: name.to_string(),
            bytes: None,
            immediate,
            increment: false,
            decrement: false,
        }
    }

    pub fn is_memory(&self) -> bool {
        !self.immediate
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    /// A plain value operand with the given name and no side effects.
    pub fn is_value(&self, name: &str) -> bool {
        self.immediate && self.name == name && !self.increment && !self.decrement
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = self.name.clone();
        if self.increment {
            text.push('+');
        }
        if self.decrement {
            text.push('-');
        }
        if self.is_memory() {
            write!(f, "({})", text)
        } else {
            write!(f, "{}", text)
        }
    }
}
