use std::fmt;

use crate::{cpu::Cpu, mmu::Memory};

/// Register state plus the bytes at PC, in the line format used by
/// Gameboy Doctor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CpuSnapshot {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
    pub pcmem: [u8; 4], // The 4 bytes at PC
}

#[derive(Debug, PartialEq, Eq)]
pub struct StateMismatch {
    pub field: &'static str,
    pub expected: u16, // Use u16 to cover both u8 and u16 registers
    pub actual: u16,
}

impl CpuSnapshot {
    pub fn from_cpu(cpu: &Cpu, bus: &impl Memory) -> Self {
        let regs = &cpu.regs;
        CpuSnapshot {
            a: regs.a,
            f: regs.f,
            b: regs.b,
            c: regs.c,
            d: regs.d,
            e: regs.e,
            h: regs.h,
            l: regs.l,
            sp: regs.sp,
            pc: regs.pc,
            pcmem: [
                bus.read_byte(regs.pc),
                bus.read_byte(regs.pc.wrapping_add(1)),
                bus.read_byte(regs.pc.wrapping_add(2)),
                bus.read_byte(regs.pc.wrapping_add(3)),
            ],
        }
    }

    /// Lists every field that differs, treating `self` as the expected state.
    pub fn compare(&self, other: &CpuSnapshot) -> Vec<StateMismatch> {
        let fields: [(&'static str, u16, u16); 10] = [
            ("A", self.a as u16, other.a as u16),
            ("F", self.f as u16, other.f as u16),
            ("B", self.b as u16, other.b as u16),
            ("C", self.c as u16, other.c as u16),
            ("D", self.d as u16, other.d as u16),
            ("E", self.e as u16, other.e as u16),
            ("H", self.h as u16, other.h as u16),
            ("L", self.l as u16, other.l as u16),
            ("SP", self.sp, other.sp),
            ("PC", self.pc, other.pc),
        ];

        fields
            .into_iter()
            .filter(|(_, expected, actual)| expected != actual)
            .map(|(field, expected, actual)| StateMismatch {
                field,
                expected,
                actual,
            })
            .collect()
    }

    /// Parses a (possibly partial) doctor line. Unknown keys are skipped.
    pub fn from_string(s: &str) -> Result<Self, String> {
        let mut snapshot = CpuSnapshot::default();

        // Helper to keep the match arms clean
        fn parse_hex8(v: &str) -> Result<u8, String> {
            u8::from_str_radix(v, 16).map_err(|e| format!("{}: {}", v, e))
        }
        fn parse_hex16(v: &str) -> Result<u16, String> {
            u16::from_str_radix(v, 16).map_err(|e| format!("{}: {}", v, e))
        }

        for part in s.split_whitespace() {
            let Some((key, val)) = part.split_once(':') else {
                continue;
            };

            match key {
                "A" => snapshot.a = parse_hex8(val)?,
                "F" => snapshot.f = parse_hex8(val)?,
                "B" => snapshot.b = parse_hex8(val)?,
                "C" => snapshot.c = parse_hex8(val)?,
                "D" => snapshot.d = parse_hex8(val)?,
                "E" => snapshot.e = parse_hex8(val)?,
                "H" => snapshot.h = parse_hex8(val)?,
                "L" => snapshot.l = parse_hex8(val)?,
                "SP" => snapshot.sp = parse_hex16(val)?,
                "PC" => snapshot.pc = parse_hex16(val)?,
                "PCMEM" => {
                    for (i, b_str) in val.split(',').take(4).enumerate() {
                        snapshot.pcmem[i] = parse_hex8(b_str)?;
                    }
                }
                _ => {}
            }
        }
        Ok(snapshot)
    }
}

impl fmt::Display for CpuSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{:02X} F:{:02X} B:{:02X} C:{:02X} D:{:02X} E:{:02X} H:{:02X} L:{:02X} SP:{:04X} PC:{:04X} PCMEM:{:02X},{:02X},{:02X},{:02X}",
            self.a,
            self.f,
            self.b,
            self.c,
            self.d,
            self.e,
            self.h,
            self.l,
            self.sp,
            self.pc,
            self.pcmem[0],
            self.pcmem[1],
            self.pcmem[2],
            self.pcmem[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_state() {
        let line = "A:02 F:50 B:DE C:F4 D:DE E:F5 H:DE L:F6 SP:DFEF PC:C6C6 PCMEM:EA,F6,DE,F1";
        let snap = CpuSnapshot::from_string(line).unwrap();

        assert_eq!(snap.a, 0x02);
        assert_eq!(snap.f, 0x50);
        assert_eq!(snap.sp, 0xDFEF);
        assert_eq!(snap.pc, 0xC6C6);
        assert_eq!(snap.pcmem, [0xEA, 0xF6, 0xDE, 0xF1]);
        assert_eq!(snap.to_string(), line);
    }

    #[test]
    fn test_parse_partial_diff() {
        // Simulating a "Was (diff)" line which might only have a few values
        let line = "A:05 PC:0051";
        let snap = CpuSnapshot::from_string(line).unwrap();

        assert_eq!(snap.a, 0x05);
        assert_eq!(snap.pc, 0x0051);
        // Others should be default (0)
        assert_eq!(snap.b, 0x00);
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        assert!(CpuSnapshot::from_string("A:ZZ").is_err());
    }

    #[test]
    fn test_compare_lists_differences() {
        let expected = CpuSnapshot::from_string("A:01 SP:FFFE PC:0100").unwrap();
        let actual = CpuSnapshot::from_string("A:01 SP:FFFC PC:0101").unwrap();
        let diffs = expected.compare(&actual);
        assert_eq!(
            diffs,
            vec![
                StateMismatch {
                    field: "SP",
                    expected: 0xFFFE,
                    actual: 0xFFFC
                },
                StateMismatch {
                    field: "PC",
                    expected: 0x0100,
                    actual: 0x0101
                },
            ]
        );
    }
}
