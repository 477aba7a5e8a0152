//! Maps a dataset entry (mnemonic + operand shape) onto an instruction
//! family. This is a pure function of the metadata: anything it does not
//! recognise is bound to [`Binding::Unimplemented`].

use super::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Binding {
    Bound(Family),
    /// Dispatching this slot is a fatal error.
    Unimplemented,
}

impl Binding {
    pub fn family(&self) -> Option<Family> {
        match self {
            Binding::Bound(family) => Some(*family),
            Binding::Unimplemented => None,
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self, Binding::Bound(_))
    }
}

pub fn bind(mnemonic: &str, operands: &[Operand]) -> Binding {
    match bind_family(mnemonic, operands) {
        Some(family) => Binding::Bound(family),
        None => Binding::Unimplemented,
    }
}

fn bind_family(mnemonic: &str, operands: &[Operand]) -> Option<Family> {
    // --- Simple No-Operand Instructions ---
    if operands.is_empty() {
        let family = match mnemonic {
            "NOP" => Family::Nop,
            "HALT" => Family::Halt,
            "STOP" => Family::Stop,
            "DI" => Family::Di,
            "EI" => Family::Ei,
            "DAA" => Family::Daa,
            "CPL" => Family::Cpl,
            "SCF" => Family::Scf,
            "CCF" => Family::Ccf,
            "RLCA" => Family::RotateA(ShiftOp::Rlc),
            "RRCA" => Family::RotateA(ShiftOp::Rrc),
            "RLA" => Family::RotateA(ShiftOp::Rl),
            "RRA" => Family::RotateA(ShiftOp::Rr),
            "RET" => Family::Ret(None),
            "RETI" => Family::Reti,
            _ => return None,
        };
        return Some(family);
    }

    match mnemonic {
        "STOP" => match operands {
            // The padding byte is listed as an operand by some datasets.
            [pad] if pad.is_value("n8") => Some(Family::Stop),
            _ => None,
        },
        "LD" | "LDH" => bind_load(operands),
        "PUSH" | "POP" => match operands {
            [op] => {
                let reg = stack_pair(op)?;
                Some(if mnemonic == "PUSH" {
                    Family::Push(reg)
                } else {
                    Family::Pop(reg)
                })
            }
            _ => None,
        },
        "INC" | "DEC" => bind_inc_dec(mnemonic == "INC", operands),
        "ADD" | "ADC" | "SUB" | "SBC" | "AND" | "XOR" | "OR" | "CP" => {
            bind_arithmetic(mnemonic, operands)
        }
        "RLC" | "RRC" | "RL" | "RR" | "SLA" | "SRA" | "SWAP" | "SRL" => {
            let op = shift_op(mnemonic)?;
            match operands {
                [target] => {
                    let target = target_of(target).filter(Target::is_read_modify_write)?;
                    Some(Family::Shift { op, target })
                }
                _ => None,
            }
        }
        "BIT" | "RES" | "SET" => {
            let op = match mnemonic {
                "BIT" => BitOp::Test,
                "SET" => BitOp::Set,
                _ => BitOp::Reset,
            };
            match operands {
                [bit, target] => {
                    let bit = bit_index(bit)?;
                    let target = target_of(target).filter(Target::is_read_modify_write)?;
                    Some(Family::Bit { op, bit, target })
                }
                _ => None,
            }
        }
        "JP" => match operands {
            [addr] if addr.is_value("a16") => Some(Family::Jump(None)),
            // JP HL jumps to HL itself, even though it is often written (HL).
            [hl] if hl.is_named("HL") && !hl.increment && !hl.decrement => Some(Family::JumpHl),
            [cond, addr] if addr.is_value("a16") => Some(Family::Jump(Some(condition(cond)?))),
            _ => None,
        },
        "JR" => match operands {
            [offset] if offset.is_value("e8") => Some(Family::JumpRelative(None)),
            [cond, offset] if offset.is_value("e8") => {
                Some(Family::JumpRelative(Some(condition(cond)?)))
            }
            _ => None,
        },
        "CALL" => match operands {
            [addr] if addr.is_value("a16") => Some(Family::Call(None)),
            [cond, addr] if addr.is_value("a16") => Some(Family::Call(Some(condition(cond)?))),
            _ => None,
        },
        "RET" => match operands {
            [cond] => Some(Family::Ret(Some(condition(cond)?))),
            _ => None,
        },
        "RST" => match operands {
            [vector] => Some(Family::Rst(rst_vector(vector)?)),
            _ => None,
        },
        _ => None,
    }
}

fn bind_load(operands: &[Operand]) -> Option<Family> {
    match operands {
        // LD HL, SP+e8
        [hl, sp, offset] => {
            if hl.is_value("HL") && sp.is_named("SP") && sp.immediate && offset.is_value("e8") {
                Some(Family::LoadHlSpOffset)
            } else {
                None
            }
        }
        [dst, src] => {
            // LD rr, n16
            if src.is_value("n16") {
                return match register16(dst)? {
                    Reg16::AF => None,
                    reg => Some(Family::Load16(reg)),
                };
            }
            // LD SP, HL
            if dst.is_value("SP") && src.is_value("HL") {
                return Some(Family::LoadSpHl);
            }
            // LD (a16), SP
            if dst.is_memory() && dst.is_named("a16") && src.is_value("SP") {
                return Some(Family::StoreSp);
            }
            let dst = target_of(dst)?;
            let src = source_of(src)?;
            // Only one operand may pull bytes from the instruction stream.
            if dst.immediate_bytes() > 0 && src.immediate_bytes() > 0 {
                return None;
            }
            Some(Family::Load8 { dst, src })
        }
        _ => None,
    }
}

fn bind_inc_dec(inc: bool, operands: &[Operand]) -> Option<Family> {
    let [op] = operands else {
        return None;
    };
    if let Some(reg) = register16(op) {
        return match reg {
            Reg16::AF => None,
            reg if inc => Some(Family::Inc16(reg)),
            reg => Some(Family::Dec16(reg)),
        };
    }
    let target = target_of(op).filter(Target::is_read_modify_write)?;
    Some(if inc {
        Family::Inc8(target)
    } else {
        Family::Dec8(target)
    })
}

fn bind_arithmetic(mnemonic: &str, operands: &[Operand]) -> Option<Family> {
    match (mnemonic, operands) {
        // ADD HL, rr
        ("ADD", [hl, rr]) if hl.is_value("HL") => match register16(rr)? {
            Reg16::AF => None,
            reg => Some(Family::AddHl(reg)),
        },
        // ADD SP, e8
        ("ADD", [sp, offset]) if sp.is_value("SP") && offset.is_value("e8") => {
            Some(Family::AddSpOffset)
        }
        // Newer datasets spell the accumulator out: SUB A, B
        (_, [a, src]) if a.is_value("A") => Some(Family::Alu {
            op: alu_op(mnemonic)?,
            src: source_of(src)?,
        }),
        // Older ones leave it implicit: SUB B
        (_, [src]) => Some(Family::Alu {
            op: alu_op(mnemonic)?,
            src: source_of(src)?,
        }),
        _ => None,
    }
}

fn alu_op(mnemonic: &str) -> Option<AluOp> {
    Some(match mnemonic {
        "ADD" => AluOp::Add,
        "ADC" => AluOp::Adc,
        "SUB" => AluOp::Sub,
        "SBC" => AluOp::Sbc,
        "AND" => AluOp::And,
        "XOR" => AluOp::Xor,
        "OR" => AluOp::Or,
        "CP" => AluOp::Cp,
        _ => return None,
    })
}

fn shift_op(mnemonic: &str) -> Option<ShiftOp> {
    Some(match mnemonic {
        "RLC" => ShiftOp::Rlc,
        "RRC" => ShiftOp::Rrc,
        "RL" => ShiftOp::Rl,
        "RR" => ShiftOp::Rr,
        "SLA" => ShiftOp::Sla,
        "SRA" => ShiftOp::Sra,
        "SWAP" => ShiftOp::Swap,
        "SRL" => ShiftOp::Srl,
        _ => return None,
    })
}

/// A 16-bit register used as a value (not as an address).
fn register16(op: &Operand) -> Option<Reg16> {
    if !op.immediate || op.increment || op.decrement {
        return None;
    }
    Reg16::from_name(&op.name)
}

/// PUSH and POP take AF but never SP.
fn stack_pair(op: &Operand) -> Option<Reg16> {
    match register16(op)? {
        Reg16::SP => None,
        reg => Some(reg),
    }
}

/// Resolves an 8-bit location operand.
fn target_of(op: &Operand) -> Option<Target> {
    if op.immediate {
        if op.increment || op.decrement {
            return None;
        }
        return Reg8::from_name(&op.name).map(Target::Register8);
    }

    match op.name.as_str() {
        "HL" if op.increment && op.decrement => None,
        "HL" if op.increment => Some(Target::AddrRegister16Increment(Reg16::HL)),
        "HL" if op.decrement => Some(Target::AddrRegister16Decrement(Reg16::HL)),
        _ if op.increment || op.decrement => None,
        "HL" => Some(Target::AddrRegister16(Reg16::HL)),
        "BC" => Some(Target::AddrRegister16(Reg16::BC)),
        "DE" => Some(Target::AddrRegister16(Reg16::DE)),
        "C" => Some(Target::AddrRegister8(Reg8::C)),
        "a8" => Some(Target::AddrImmediate8),
        "a16" => Some(Target::AddrImmediate16),
        _ => None,
    }
}

fn source_of(op: &Operand) -> Option<Source> {
    if op.is_value("n8") {
        return Some(Source::Immediate8);
    }
    target_of(op).map(Source::Target)
}

fn condition(op: &Operand) -> Option<Condition> {
    Condition::from_name(&op.name)
}

fn bit_index(op: &Operand) -> Option<u8> {
    let bit: u8 = op.name.parse().ok()?;
    (bit < 8).then_some(bit)
}

/// RST vectors are spelled `$08` in the dataset.
fn rst_vector(op: &Operand) -> Option<u8> {
    let hex = op.name.strip_prefix('$')?;
    let vector = u8::from_str_radix(hex, 16).ok()?;
    (vector % 8 == 0 && vector <= 0x38).then_some(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(name: &str) -> Operand {
        Operand::new(name, true)
    }

    fn mem(name: &str) -> Operand {
        Operand::new(name, false)
    }

    #[test]
    fn binds_register_loads() {
        assert_eq!(
            bind("LD", &[reg("B"), reg("C")]),
            Binding::Bound(Family::Load8 {
                dst: Target::Register8(Reg8::B),
                src: Source::Target(Target::Register8(Reg8::C)),
            })
        );
        assert_eq!(
            bind("LD", &[reg("DE"), reg("n16")]),
            Binding::Bound(Family::Load16(Reg16::DE))
        );
    }

    #[test]
    fn binds_post_increment_store() {
        let mut hl = mem("HL");
        hl.increment = true;
        assert_eq!(
            bind("LD", &[hl, reg("A")]),
            Binding::Bound(Family::Load8 {
                dst: Target::AddrRegister16Increment(Reg16::HL),
                src: Source::Target(Target::Register8(Reg8::A)),
            })
        );
    }

    #[test]
    fn c_is_a_condition_only_in_branches() {
        assert_eq!(
            bind("JR", &[reg("C"), reg("e8")]),
            Binding::Bound(Family::JumpRelative(Some(Condition::Carry)))
        );
        assert_eq!(
            bind("RET", &[reg("C")]),
            Binding::Bound(Family::Ret(Some(Condition::Carry)))
        );
        assert_eq!(
            bind("LDH", &[reg("A"), mem("C")]),
            Binding::Bound(Family::Load8 {
                dst: Target::Register8(Reg8::A),
                src: Source::Target(Target::AddrRegister8(Reg8::C)),
            })
        );
    }

    #[test]
    fn accepts_both_alu_spellings() {
        let expected = Binding::Bound(Family::Alu {
            op: AluOp::Sub,
            src: Source::Target(Target::Register8(Reg8::B)),
        });
        assert_eq!(bind("SUB", &[reg("A"), reg("B")]), expected);
        assert_eq!(bind("SUB", &[reg("B")]), expected);
    }

    #[test]
    fn binds_cb_families() {
        assert_eq!(
            bind("BIT", &[reg("7"), reg("H")]),
            Binding::Bound(Family::Bit {
                op: BitOp::Test,
                bit: 7,
                target: Target::Register8(Reg8::H),
            })
        );
        assert_eq!(
            bind("SWAP", &[mem("HL")]),
            Binding::Bound(Family::Shift {
                op: ShiftOp::Swap,
                target: Target::AddrRegister16(Reg16::HL),
            })
        );
    }

    #[test]
    fn rst_vectors_are_parsed() {
        assert_eq!(bind("RST", &[reg("$38")]), Binding::Bound(Family::Rst(0x38)));
        assert_eq!(bind("RST", &[reg("$39")]), Binding::Unimplemented);
    }

    #[test]
    fn unknown_patterns_are_unimplemented() {
        assert_eq!(bind("ILLEGAL_D3", &[]), Binding::Unimplemented);
        assert_eq!(bind("PREFIX", &[]), Binding::Unimplemented);
        assert_eq!(bind("BIT", &[reg("8"), reg("A")]), Binding::Unimplemented);
        assert_eq!(bind("PUSH", &[reg("SP")]), Binding::Unimplemented);
        assert_eq!(bind("INC", &[mem("BC")]), Binding::Unimplemented);
        assert_eq!(bind("LD", &[mem("a16"), reg("n8")]), Binding::Unimplemented);
        assert_eq!(bind("", &[]), Binding::Unimplemented);
    }
}
