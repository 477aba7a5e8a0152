/*
Source: https://gbdev.io/pandocs/Memory_Map.html

The CPU sees a flat 16-bit address space. At power-on the first 256 bytes
are shadowed by the boot ROM:

Start	End	Description
0000	00FF	Boot ROM overlay (until FF50 bit 0 is written)
0000	FFFF	Main memory

Peripherals are not modelled; every address is plain RAM.
*/

use log::{debug, info, trace, warn};

use crate::constants::{BOOT_DISABLE_ADDR, BOOT_ROM_SIZE, MEMORY_SIZE};
use crate::mmu::{BootRomError, memory_trait::Memory};

pub struct Bus {
    // This puts exactly 64KB on the HEAP, not the STACK
    data: Box<[u8; MEMORY_SIZE]>,
    boot_rom: [u8; BOOT_ROM_SIZE],
    /// One-way latch: once cleared the overlay never comes back.
    boot_rom_active: bool,
}

impl Bus {
    /// Creates memory with `boot_rom` mapped over 0x0000..=0x00FF. Shorter
    /// images are zero-padded.
    pub fn new(boot_rom: &[u8]) -> Result<Self, BootRomError> {
        if boot_rom.len() > BOOT_ROM_SIZE {
            return Err(BootRomError::TooLarge {
                size: boot_rom.len(),
                max: BOOT_ROM_SIZE,
            });
        }

        let mut overlay = [0u8; BOOT_ROM_SIZE];
        overlay[..boot_rom.len()].copy_from_slice(boot_rom);

        debug!(
            "Creating Bus, memory_size: {}, boot_rom_size: {}",
            MEMORY_SIZE,
            boot_rom.len()
        );

        Ok(Bus {
            data: Box::new([0u8; MEMORY_SIZE]),
            boot_rom: overlay,
            boot_rom_active: true,
        })
    }

    /// Creates memory with the overlay already unmapped, for starting
    /// directly at the cartridge entry point.
    pub fn without_boot_rom() -> Self {
        debug!("Creating Bus, memory_size: {}, no boot rom", MEMORY_SIZE);
        Bus {
            data: Box::new([0u8; MEMORY_SIZE]),
            boot_rom: [0u8; BOOT_ROM_SIZE],
            boot_rom_active: false,
        }
    }

    /// Copies a program image into main memory from 0x0000. Anything past
    /// the end of the address space is dropped.
    pub fn load_program(&mut self, program: &[u8]) {
        let copy_len = std::cmp::min(program.len(), MEMORY_SIZE);
        self.data[..copy_len].copy_from_slice(&program[..copy_len]);
        debug!(
            "Loaded program, rom_size: {}, copy_len: {}",
            program.len(),
            copy_len
        );
    }

    pub fn boot_overlay_active(&self) -> bool {
        self.boot_rom_active
    }
}

impl Memory for Bus {
    fn read_byte(&self, addr: u16) -> u8 {
        if self.boot_rom_active && (addr as usize) < BOOT_ROM_SIZE {
            return self.boot_rom[addr as usize];
        }

        match self.data.get(addr as usize) {
            Some(value) => *value,
            None => {
                warn!("Read memory out of bounds at {:#06X}", addr);
                0xFF
            }
        }
    }

    fn write_byte(&mut self, addr: u16, val: u8) {
        if addr == BOOT_DISABLE_ADDR {
            trace!("Write {:#04X} to boot disable register", val);
            if val & 0x01 != 0 && self.boot_rom_active {
                info!("Boot ROM unmapped");
                self.boot_rom_active = false;
            }
        }

        match self.data.get_mut(addr as usize) {
            Some(slot) => *slot = val,
            None => warn!("Write memory out of bounds at {:#06X}", addr),
        }
    }
}
