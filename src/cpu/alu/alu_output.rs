use crate::opcodes::{AluOp, ShiftOp};

/// Represents an arithmetic operation and its result.
/// The purpose is to make the underlying operations pure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AluOutput {
    pub value: u8,
    pub z: bool,
    pub n: bool,
    pub h: bool,
    pub c: bool,
}

/// Result of a 16-bit addition. Only H and C are computed; Z and N are
/// decided by the instruction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WideOutput {
    pub value: u16,
    pub h: bool,
    pub c: bool,
}

impl AluOutput {
    fn logic(value: u8, h: bool) -> Self {
        AluOutput {
            value,
            z: value == 0,
            n: false,
            h,
            c: false,
        }
    }

    /// Dispatches an accumulator operator. `carry` is only consumed by ADC
    /// and SBC. CP yields the SUB result; the caller discards the value.
    pub fn accumulate(op: AluOp, a: u8, b: u8, carry: bool) -> Self {
        match op {
            AluOp::Add => Self::alu_8bit_add(a, b, false),
            AluOp::Adc => Self::alu_8bit_add(a, b, carry),
            AluOp::Sub | AluOp::Cp => Self::alu_8bit_sub(a, b, false),
            AluOp::Sbc => Self::alu_8bit_sub(a, b, carry),
            AluOp::And => Self::logic(a & b, true),
            AluOp::Xor => Self::logic(a ^ b, false),
            AluOp::Or => Self::logic(a | b, false),
        }
    }

    pub fn alu_8bit_add(a: u8, b: u8, carry: bool) -> Self {
        let c_in = if carry { 1 } else { 0 };

        let res = (a as u16) + (b as u16) + (c_in as u16);
        let res_u8 = res as u8;

        // Half-Carry: Carry out of bit 3 into bit 4
        let h_bit = (a & 0x0F) + (b & 0x0F) + c_in > 0x0F;

        AluOutput {
            value: res_u8,
            z: res_u8 == 0,
            n: false,
            h: h_bit,
            c: res > 0xFF,
        }
    }

    pub fn alu_8bit_sub(a: u8, b: u8, carry: bool) -> Self {
        let c_in = if carry { 1 } else { 0 };

        let res_u8 = a.wrapping_sub(b).wrapping_sub(c_in);

        // Half-Carry (Half-Borrow): the low nibble of 'a' cannot cover
        // the low nibble of 'b' plus the carry-in.
        let h_bit = (a & 0x0F) < (b & 0x0F) + c_in;

        // Carry (Borrow): Set if the result is negative (a borrow from bit 8)
        let c_bit = (a as u16) < (b as u16) + (c_in as u16);

        AluOutput {
            value: res_u8,
            z: res_u8 == 0,
            n: true,
            h: h_bit,
            c: c_bit,
        }
    }

    /// C is not part of the result; INC leaves it untouched.
    pub fn alu_8bit_inc(value: u8) -> Self {
        let res = value.wrapping_add(1);
        AluOutput {
            value: res,
            z: res == 0,
            n: false,
            h: (value & 0x0F) == 0x0F,
            c: false,
        }
    }

    /// C is not part of the result; DEC leaves it untouched.
    pub fn alu_8bit_dec(value: u8) -> Self {
        let res = value.wrapping_sub(1);

        // Half-Carry: Set if there was a borrow from bit 4
        // (i.e., the lower nibble was 0x0 before the decrement)
        AluOutput {
            value: res,
            z: res == 0,
            n: true,
            h: (value & 0x0F) == 0,
            c: false,
        }
    }

    /// CB rotates/shifts and SWAP. C receives the bit shifted out.
    pub fn shift(op: ShiftOp, value: u8, carry: bool) -> Self {
        let carry_in = carry as u8;
        let (res, c) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | carry_in, value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            // Arithmetic shift keeps bit 7.
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };
        AluOutput {
            value: res,
            z: res == 0,
            n: false,
            h: false,
            c,
        }
    }

    /// Decimal adjust of A after a BCD addition or subtraction. N is an
    /// input here and is returned unchanged.
    pub fn daa(a: u8, n: bool, h: bool, c: bool) -> Self {
        let mut adjust = 0u8;
        let mut carry = c;

        if n {
            if h {
                adjust |= 0x06;
            }
            if c {
                adjust |= 0x60;
            }
            let value = a.wrapping_sub(adjust);
            return AluOutput {
                value,
                z: value == 0,
                n,
                h: false,
                c: carry,
            };
        }

        if h || (a & 0x0F) > 0x09 {
            adjust |= 0x06;
        }
        if c || a > 0x99 {
            adjust |= 0x60;
            carry = true;
        }
        let value = a.wrapping_add(adjust);
        AluOutput {
            value,
            z: value == 0,
            n,
            h: false,
            c: carry,
        }
    }
}

impl WideOutput {
    /// ADD HL, rr: H from bit 11, C from bit 15.
    pub fn add_16bit(a: u16, b: u16) -> Self {
        WideOutput {
            value: a.wrapping_add(b),
            h: (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF,
            c: (a as u32) + (b as u32) > 0xFFFF,
        }
    }

    /// SP plus a signed displacement. H and C come from the unsigned
    /// addition of the low byte of SP and the raw offset byte.
    pub fn add_sp_offset(sp: u16, offset: i8) -> Self {
        let raw = offset as u8;
        let low = sp as u8;
        WideOutput {
            value: sp.wrapping_add_signed(offset as i16),
            h: (low & 0x0F) + (raw & 0x0F) > 0x0F,
            c: (low as u16) + (raw as u16) > 0xFF,
        }
    }
}
