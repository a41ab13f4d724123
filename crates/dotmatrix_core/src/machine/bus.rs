use crate::cpu::Bus;
use crate::UNMAPPED_READ;

use super::cartridge::Cartridge;

const VRAM_START: u16 = 0x8000;
const VRAM_SIZE: usize = 0x2000;
const WRAM_START: u16 = 0xC000;
const WRAM_SIZE: usize = 0x2000;
const HRAM_START: u16 = 0xFF80;
const HRAM_SIZE: usize = 0x7F;

/// Address decoder for the CPU's 16-bit address space.
///
/// | Range           | Backing                        |
/// |-----------------|--------------------------------|
/// | 0x0000..=0x7FFF | cartridge ROM (forwarded)      |
/// | 0x8000..=0x9FFF | video RAM                      |
/// | 0xA000..=0xBFFF | cartridge RAM (forwarded)      |
/// | 0xC000..=0xDFFF | work RAM                       |
/// | 0xFF80..=0xFFFE | high RAM                       |
///
/// Everything else (echo RAM, OAM, IO registers, IE) has no backing yet:
/// reads return [`UNMAPPED_READ`] and writes are dropped, both with a
/// warning.
pub struct MemoryBus<C> {
    cartridge: C,
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    hram: [u8; HRAM_SIZE],
}

impl<C: Cartridge> MemoryBus<C> {
    pub fn new(cartridge: C) -> Self {
        Self {
            cartridge,
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            hram: [0; HRAM_SIZE],
        }
    }

    pub fn cartridge(&self) -> &C {
        &self.cartridge
    }

    pub fn cartridge_mut(&mut self) -> &mut C {
        &mut self.cartridge
    }

    /// Clear all internal RAM, keeping the cartridge.
    pub fn reset(&mut self) {
        self.vram = [0; VRAM_SIZE];
        self.wram = [0; WRAM_SIZE];
        self.hram = [0; HRAM_SIZE];
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self.cartridge.read_byte(addr),
            0x8000..=0x9FFF => self.vram[(addr - VRAM_START) as usize],
            0xC000..=0xDFFF => self.wram[(addr - WRAM_START) as usize],
            0xFF80..=0xFFFE => self.hram[(addr - HRAM_START) as usize],
            _ => {
                log::warn!("unsupported bus read at 0x{addr:04X}");
                UNMAPPED_READ
            }
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self.cartridge.write_byte(addr, value),
            0x8000..=0x9FFF => self.vram[(addr - VRAM_START) as usize] = value,
            0xC000..=0xDFFF => self.wram[(addr - WRAM_START) as usize] = value,
            0xFF80..=0xFFFE => self.hram[(addr - HRAM_START) as usize] = value,
            _ => {
                log::warn!("unsupported bus write at 0x{addr:04X} (value 0x{value:02X})");
            }
        }
    }
}

impl<C: Cartridge> Bus for MemoryBus<C> {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }
}
