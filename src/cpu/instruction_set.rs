use crate::constants::*;
use crate::cpu::Cpu;
use crate::cpu::alu::{AluOutput, WideOutput};
use crate::mmu::Memory;
use crate::opcodes::*;

/// Where an 8-bit operand lives once any address arithmetic has been done.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Location {
    Register(Reg8),
    Address(u16),
}

impl Cpu {
    /// Runs a decoded family. PC already points past the opcode bytes.
    pub(crate) fn execute(&mut self, family: Family, cycles: Cycles, bus: &mut impl Memory) -> u8 {
        let taken = match family {
            Family::Nop => true,
            Family::Halt => {
                self.halted = true;
                true
            }
            Family::Stop => {
                // The padding byte is consumed and ignored.
                self.fetch_byte(bus);
                self.halted = true;
                true
            }
            Family::Di => {
                self.ime = false;
                true
            }
            Family::Ei => {
                self.ime = true;
                true
            }
            Family::Daa => {
                let res = AluOutput::daa(
                    self.regs.a,
                    self.regs.get_flag(FLAG_N),
                    self.regs.get_flag(FLAG_H),
                    self.regs.get_flag(FLAG_C),
                );
                self.regs.a = res.value;
                self.regs.set_z(res.z);
                self.regs.set_h(res.h);
                self.regs.set_c(res.c);
                true
            }
            Family::Cpl => {
                // Complement Accumulator (A = NOT A)
                self.regs.a = !self.regs.a;
                self.regs.set_n(true);
                self.regs.set_h(true);
                true
            }
            Family::Scf => {
                self.regs.set_n(false);
                self.regs.set_h(false);
                self.regs.set_c(true);
                true
            }
            Family::Ccf => {
                let c = self.regs.get_flag(FLAG_C);
                self.regs.set_n(false);
                self.regs.set_h(false);
                self.regs.set_c(!c);
                true
            }

            Family::Load8 { dst, src } => {
                let val = self.read_source(src, bus);
                let loc = self.locate(dst, bus);
                self.store(loc, val, bus);
                true
            }
            Family::Load16(reg) => {
                let val = self.fetch_word(bus);
                self.regs.set_reg16(reg, val);
                true
            }
            Family::LoadSpHl => {
                self.regs.sp = self.regs.hl();
                true
            }
            Family::StoreSp => {
                let addr = self.fetch_word(bus);
                bus.write_u16(addr, self.regs.sp);
                true
            }
            Family::LoadHlSpOffset => {
                let offset = self.fetch_byte(bus) as i8;
                let res = WideOutput::add_sp_offset(self.regs.sp, offset);
                self.regs.set_hl(res.value);
                self.apply_wide_flags(res, Some(false));
                true
            }

            Family::Push(reg) => {
                let val = self.regs.get_reg16(reg);
                self.push_u16(bus, val);
                true
            }
            Family::Pop(reg) => {
                let val = self.pop_u16(bus);
                self.regs.set_reg16(reg, val);
                true
            }

            Family::Inc8(target) | Family::Dec8(target) => {
                let loc = self.locate(target, bus);
                let val = self.load(loc, bus);
                let res = if matches!(family, Family::Inc8(_)) {
                    AluOutput::alu_8bit_inc(val)
                } else {
                    AluOutput::alu_8bit_dec(val)
                };
                self.store(loc, res.value, bus);
                // C is not affected.
                self.regs.set_z(res.z);
                self.regs.set_n(res.n);
                self.regs.set_h(res.h);
                true
            }
            Family::Inc16(reg) => {
                let val = self.regs.get_reg16(reg).wrapping_add(1);
                self.regs.set_reg16(reg, val);
                true
            }
            Family::Dec16(reg) => {
                let val = self.regs.get_reg16(reg).wrapping_sub(1);
                self.regs.set_reg16(reg, val);
                true
            }

            Family::Alu { op, src } => {
                let val = self.read_source(src, bus);
                let res = AluOutput::accumulate(op, self.regs.a, val, self.regs.get_flag(FLAG_C));
                // CP only updates flags.
                if op != AluOp::Cp {
                    self.regs.a = res.value;
                }
                self.apply_alu_flags(res);
                true
            }
            Family::AddHl(reg) => {
                let res = WideOutput::add_16bit(self.regs.hl(), self.regs.get_reg16(reg));
                self.regs.set_hl(res.value);
                // Z is not affected.
                self.apply_wide_flags(res, None);
                true
            }
            Family::AddSpOffset => {
                let offset = self.fetch_byte(bus) as i8;
                let res = WideOutput::add_sp_offset(self.regs.sp, offset);
                self.regs.sp = res.value;
                self.apply_wide_flags(res, Some(false));
                true
            }

            Family::RotateA(op) => {
                let mut res = AluOutput::shift(op, self.regs.a, self.regs.get_flag(FLAG_C));
                self.regs.a = res.value;
                // Unlike the CB forms, the accumulator rotates always clear Z.
                res.z = false;
                self.apply_alu_flags(res);
                true
            }
            Family::Shift { op, target } => {
                let loc = self.locate(target, bus);
                let val = self.load(loc, bus);
                let res = AluOutput::shift(op, val, self.regs.get_flag(FLAG_C));
                self.store(loc, res.value, bus);
                self.apply_alu_flags(res);
                true
            }

            Family::Bit { op, bit, target } => {
                let loc = self.locate(target, bus);
                let val = self.load(loc, bus);
                let mask = 1u8 << bit;
                match op {
                    BitOp::Test => {
                        self.regs.set_z(val & mask == 0);
                        self.regs.set_n(false);
                        self.regs.set_h(true);
                    }
                    BitOp::Set => self.store(loc, val | mask, bus),
                    BitOp::Reset => self.store(loc, val & !mask, bus),
                }
                true
            }

            Family::Jump(cond) => {
                // The address is consumed whether or not the jump is taken.
                let addr = self.fetch_word(bus);
                let taken = self.condition_met(cond);
                if taken {
                    self.regs.pc = addr;
                }
                taken
            }
            Family::JumpHl => {
                self.regs.pc = self.regs.hl();
                true
            }
            Family::JumpRelative(cond) => {
                let offset = self.fetch_byte(bus) as i8;
                let taken = self.condition_met(cond);
                if taken {
                    self.regs.add_pc_signed(offset);
                }
                taken
            }
            Family::Call(cond) => {
                let addr = self.fetch_word(bus);
                let taken = self.condition_met(cond);
                if taken {
                    self.push_u16(bus, self.regs.pc);
                    self.regs.pc = addr;
                }
                taken
            }
            Family::Ret(cond) => {
                let taken = self.condition_met(cond);
                if taken {
                    self.regs.pc = self.pop_u16(bus);
                }
                taken
            }
            Family::Reti => {
                self.regs.pc = self.pop_u16(bus);
                self.ime = true;
                true
            }
            Family::Rst(vector) => {
                self.push_u16(bus, self.regs.pc);
                self.regs.pc = vector as u16;
                true
            }
        };

        cycles.select(taken)
    }

    fn condition_met(&self, cond: Option<Condition>) -> bool {
        cond.is_none_or(|cond| cond.holds(self.regs.f))
    }

    fn apply_alu_flags(&mut self, res: AluOutput) {
        self.regs.set_z(res.z);
        self.regs.set_n(res.n);
        self.regs.set_h(res.h);
        self.regs.set_c(res.c);
    }

    /// N is always cleared. Z is written only when `z` is given.
    fn apply_wide_flags(&mut self, res: WideOutput, z: Option<bool>) {
        if let Some(z) = z {
            self.regs.set_z(z);
        }
        self.regs.set_n(false);
        self.regs.set_h(res.h);
        self.regs.set_c(res.c);
    }

    /// Resolves a target to a register or an address. Consumes immediate
    /// bytes and applies the (HL+)/(HL-) adjustment exactly once.
    fn locate(&mut self, target: Target, bus: &impl Memory) -> Location {
        match target {
            Target::Register8(reg) => Location::Register(reg),
            Target::AddrRegister16(reg) => Location::Address(self.regs.get_reg16(reg)),
            Target::AddrRegister16Increment(reg) => {
                let addr = self.regs.get_reg16(reg);
                self.regs.set_reg16(reg, addr.wrapping_add(1));
                Location::Address(addr)
            }
            Target::AddrRegister16Decrement(reg) => {
                let addr = self.regs.get_reg16(reg);
                self.regs.set_reg16(reg, addr.wrapping_sub(1));
                Location::Address(addr)
            }
            Target::AddrImmediate8 => {
                let offset = self.fetch_byte(bus) as u16;
                Location::Address(HIGH_PAGE | offset)
            }
            Target::AddrRegister8(reg) => {
                Location::Address(HIGH_PAGE | self.regs.get_reg8(reg) as u16)
            }
            Target::AddrImmediate16 => Location::Address(self.fetch_word(bus)),
        }
    }

    fn load(&self, loc: Location, bus: &impl Memory) -> u8 {
        match loc {
            Location::Register(reg) => self.regs.get_reg8(reg),
            Location::Address(addr) => bus.read_byte(addr),
        }
    }

    fn store(&mut self, loc: Location, val: u8, bus: &mut impl Memory) {
        match loc {
            Location::Register(reg) => self.regs.set_reg8(reg, val),
            Location::Address(addr) => bus.write_byte(addr, val),
        }
    }

    fn read_source(&mut self, src: Source, bus: &impl Memory) -> u8 {
        match src {
            Source::Immediate8 => self.fetch_byte(bus),
            Source::Target(target) => {
                let loc = self.locate(target, bus);
                self.load(loc, bus)
            }
        }
    }
}
