use std::fmt;

use crate::constants::*;
use crate::opcodes::{Reg8, Reg16};

/// The LR35902 register file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    /// Flags. Only the upper nibble is meaningful.
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    pub pc: u16,
    pub sp: u16,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Power-on state, with execution starting in the boot overlay.
    pub fn new() -> Self {
        Self {
            a: 0,
            f: 0,
            b: 0,
            c: 0,
            d: 0,
            e: 0,
            h: 0,
            l: 0,
            pc: RESET_PC,
            sp: RESET_SP,
        }
    }

    /// The state a DMG is left in once its boot program hands over to the
    /// cartridge.
    pub fn post_boot() -> Self {
        Self {
            a: 0x01,
            f: 0xB0,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            pc: CARTRIDGE_ENTRY,
            sp: RESET_SP,
        }
    }

    pub fn get_reg8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.a,
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
        }
    }

    pub fn set_reg8(&mut self, reg: Reg8, val: u8) {
        match reg {
            Reg8::A => self.a = val,
            Reg8::B => self.b = val,
            Reg8::C => self.c = val,
            Reg8::D => self.d = val,
            Reg8::E => self.e = val,
            Reg8::H => self.h = val,
            Reg8::L => self.l = val,
        }
    }

    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f])
    }

    pub fn set_af(&mut self, val: u16) {
        let [a, f] = val.to_be_bytes();
        self.a = a;
        // The lower 4 bits of F are always 0.
        self.f = f & FLAG_MASK;
    }

    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    pub fn set_bc(&mut self, val: u16) {
        [self.b, self.c] = val.to_be_bytes();
    }

    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    pub fn set_de(&mut self, val: u16) {
        [self.d, self.e] = val.to_be_bytes();
    }

    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    pub fn set_hl(&mut self, val: u16) {
        [self.h, self.l] = val.to_be_bytes();
    }

    pub fn get_reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::AF => self.af(),
            Reg16::BC => self.bc(),
            Reg16::DE => self.de(),
            Reg16::HL => self.hl(),
            Reg16::SP => self.sp,
        }
    }

    pub fn set_reg16(&mut self, reg: Reg16, val: u16) {
        match reg {
            Reg16::AF => self.set_af(val),
            Reg16::BC => self.set_bc(val),
            Reg16::DE => self.set_de(val),
            Reg16::HL => self.set_hl(val),
            Reg16::SP => self.sp = val,
        }
    }

    pub fn get_flag(&self, flag: u8) -> bool {
        (self.f & flag) != 0
    }

    pub fn set_flag(&mut self, flag: u8, value: bool) {
        if value {
            self.f |= flag;
        } else {
            self.f &= !flag;
        }
    }

    pub fn set_z(&mut self, value: bool) {
        self.set_flag(FLAG_Z, value);
    }

    pub fn set_n(&mut self, value: bool) {
        self.set_flag(FLAG_N, value);
    }

    pub fn set_h(&mut self, value: bool) {
        self.set_flag(FLAG_H, value);
    }

    pub fn set_c(&mut self, value: bool) {
        self.set_flag(FLAG_C, value);
    }

    /// Moves PC by a signed displacement, wrapping at 16 bits.
    pub fn add_pc_signed(&mut self, offset: i8) {
        self.pc = self.pc.wrapping_add_signed(offset as i16);
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format Flags: [ZNHC] (letter if set, dash if clear)
        let z = if self.get_flag(FLAG_Z) { 'Z' } else { '-' };
        let n = if self.get_flag(FLAG_N) { 'N' } else { '-' };
        let h = if self.get_flag(FLAG_H) { 'H' } else { '-' };
        let c = if self.get_flag(FLAG_C) { 'C' } else { '-' };

        write!(
            f,
            "A:{:02X} F:{}{}{}{} B:{:02X} C:{:02X} D:{:02X} E:{:02X} H:{:02X} L:{:02X} SP:{:04X} PC:{:04X}",
            self.a, z, n, h, c, self.b, self.c, self.d, self.e, self.h, self.l, self.sp, self.pc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_round_trip() {
        let mut regs = Registers::new();
        for (reg, val) in [
            (Reg16::BC, 0x1234),
            (Reg16::DE, 0xBEEF),
            (Reg16::HL, 0x00FF),
            (Reg16::SP, 0xC001),
        ] {
            regs.set_reg16(reg, val);
            assert_eq!(regs.get_reg16(reg), val, "{}", reg);
        }
        assert_eq!(regs.b, 0x12);
        assert_eq!(regs.c, 0x34);
    }

    #[test]
    fn af_masks_low_nibble() {
        let mut regs = Registers::new();
        regs.set_af(0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f, 0xF0);
        assert_eq!(regs.af(), 0x12F0);
    }

    #[test]
    fn flag_helpers_touch_single_bits() {
        let mut regs = Registers::new();
        regs.set_z(true);
        regs.set_c(true);
        assert_eq!(regs.f, FLAG_Z | FLAG_C);
        regs.set_z(false);
        assert!(!regs.get_flag(FLAG_Z));
        assert!(regs.get_flag(FLAG_C));
    }

    #[test]
    fn pc_displacement_wraps() {
        let mut regs = Registers::new();
        regs.add_pc_signed(-2);
        assert_eq!(regs.pc, 0xFFFE);
        regs.add_pc_signed(4);
        assert_eq!(regs.pc, 0x0002);
    }

    #[test]
    fn display_line() {
        let regs = Registers::post_boot();
        assert_eq!(
            regs.to_string(),
            "A:01 F:Z-HC B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE PC:0100"
        );
    }
}
