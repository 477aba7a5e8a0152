use std::time::Duration;

// Constants for flags
pub const FLAG_Z: u8 = 0b1000_0000;
pub const FLAG_N: u8 = 0b0100_0000;
pub const FLAG_H: u8 = 0b0010_0000;
pub const FLAG_C: u8 = 0b0001_0000;
/// The lower nibble of F does not exist in hardware and always reads zero.
pub const FLAG_MASK: u8 = 0xF0;

/// https://8bitnotes.com/2017/05/z80-timing/
pub const T_CYCLE: Duration = Duration::from_nanos(238);

pub const CB_PREFIX_OPCODE_BYTE: u8 = 0xCB;

/// 64 Kb - The standard Game Boy address space
pub const MEMORY_SIZE: usize = 1024 * 64;

/// Size of the boot overlay mapped over 0x0000..=0x00FF at reset.
pub const BOOT_ROM_SIZE: usize = 0x100;

/// Writing a value with bit 0 set here unmaps the boot overlay for good.
pub const BOOT_DISABLE_ADDR: u16 = 0xFF50;

/// 256 unprefixed slots followed by 256 CB-prefixed slots.
pub const TABLE_SIZE: usize = 512;

/// Base of the high page used by LDH (a8) and LDH (C).
pub const HIGH_PAGE: u16 = 0xFF00;

// Reset values when starting from the boot overlay.
pub const RESET_PC: u16 = 0x0000;
pub const RESET_SP: u16 = 0xFFFE;

/// Where cartridges start executing once the boot program hands over.
pub const CARTRIDGE_ENTRY: u16 = 0x0100;

/// Cycles reported for a step taken while the CPU is halted.
pub const HALT_IDLE_CYCLES: u8 = 4;

pub const GAME_BOY_FILE_EXTS: [&str; 2] = ["gb", "gbc"];
