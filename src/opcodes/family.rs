use super::*;

/// Accumulator operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// Single-bit rotates and shifts, plus SWAP which shares their operand shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BitOp {
    Test,
    Set,
    Reset,
}

/// Coarse grouping used for logging and for reasoning about flag contracts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    DataMove,
    StackMove,
    IncDec,
    Arithmetic,
    RotateShift,
    BitOps,
    ControlTransfer,
    Misc,
}

/// An instruction family together with the operands a specific opcode
/// feeds it. Every implemented slot in the table is bound to exactly one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Family {
    // Miscellaneous
    Nop,
    Halt,
    /// STOP is encoded with a padding byte that is consumed and ignored.
    Stop,
    Di,
    Ei,
    Daa,
    Cpl,
    Scf,
    Ccf,

    // Data move
    Load8 { dst: Target, src: Source },
    /// LD rr, n16
    Load16(Reg16),
    /// LD SP, HL
    LoadSpHl,
    /// LD (a16), SP
    StoreSp,
    /// LD HL, SP+e8
    LoadHlSpOffset,

    // Stack move
    Push(Reg16),
    Pop(Reg16),

    // Increment / decrement
    Inc8(Target),
    Dec8(Target),
    Inc16(Reg16),
    Dec16(Reg16),

    // Arithmetic / logic
    Alu { op: AluOp, src: Source },
    AddHl(Reg16),
    AddSpOffset,

    // Rotate / shift
    /// RLCA, RRCA, RLA, RRA: like the CB forms on A, but Z is always cleared.
    RotateA(ShiftOp),
    Shift { op: ShiftOp, target: Target },

    // Bit test / set / clear
    Bit { op: BitOp, bit: u8, target: Target },

    // Control transfer
    Jump(Option<Condition>),
    JumpHl,
    JumpRelative(Option<Condition>),
    Call(Option<Condition>),
    Ret(Option<Condition>),
    Reti,
    Rst(u8),
}

impl Family {
    pub fn category(&self) -> Category {
        match self {
            Family::Nop
            | Family::Halt
            | Family::Stop
            | Family::Di
            | Family::Ei
            | Family::Daa
            | Family::Cpl
            | Family::Scf
            | Family::Ccf => Category::Misc,
            Family::Load8 { .. }
            | Family::Load16(_)
            | Family::LoadSpHl
            | Family::StoreSp
            | Family::LoadHlSpOffset => Category::DataMove,
            Family::Push(_) | Family::Pop(_) => Category::StackMove,
            Family::Inc8(_) | Family::Dec8(_) | Family::Inc16(_) | Family::Dec16(_) => {
                Category::IncDec
            }
            Family::Alu { .. } | Family::AddHl(_) | Family::AddSpOffset => Category::Arithmetic,
            Family::RotateA(_) | Family::Shift { .. } => Category::RotateShift,
            Family::Bit { .. } => Category::BitOps,
            Family::Jump(_)
            | Family::JumpHl
            | Family::JumpRelative(_)
            | Family::Call(_)
            | Family::Ret(_)
            | Family::Reti
            | Family::Rst(_) => Category::ControlTransfer,
        }
    }

    /// The branch predicate, for conditional control transfers only.
    pub fn condition(&self) -> Option<Condition> {
        match self {
            Family::Jump(cond)
            | Family::JumpRelative(cond)
            | Family::Call(cond)
            | Family::Ret(cond) => *cond,
            _ => None,
        }
    }

    pub fn transfers_control(&self) -> bool {
        self.category() == Category::ControlTransfer
    }

    /// Bytes consumed from the instruction stream after the opcode (and
    /// prefix) bytes have been fetched.
    pub fn operand_bytes(&self) -> u8 {
        match self {
            Family::Stop => 1,
            Family::Load8 { dst, src } => dst.immediate_bytes() + src.immediate_bytes(),
            Family::Load16(_) | Family::StoreSp => 2,
            Family::LoadHlSpOffset | Family::AddSpOffset => 1,
            Family::Inc8(target) | Family::Dec8(target) => target.immediate_bytes(),
            Family::Alu { src, .. } => src.immediate_bytes(),
            Family::Shift { target, .. } | Family::Bit { target, .. } => target.immediate_bytes(),
            Family::Jump(_) | Family::Call(_) => 2,
            Family::JumpRelative(_) => 1,
            _ => 0,
        }
    }
}

