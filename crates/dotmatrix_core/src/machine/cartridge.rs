mod header;

use std::path::Path;

use anyhow::{bail, Context, Result};

pub use header::CartridgeHeader;

use crate::UNMAPPED_READ;

const CART_RAM_START: u16 = 0xA000;
const CART_RAM_SIZE: usize = 0x2000;

/// Cartridge side of the bus: everything in 0x0000..=0x7FFF and
/// 0xA000..=0xBFFF is forwarded here untouched.
pub trait Cartridge {
    fn read_byte(&self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);
}

/// Flat cartridge with no mapper.
///
/// The ROM window reads straight from the image (bytes past its end read
/// as 0xFF) and ignores writes, which on real hardware would be mapper
/// register writes. The external RAM window is backed by a single 8 KiB
/// buffer. Battery persistence is not modelled.
pub struct RomCartridge {
    rom: Vec<u8>,
    ram: [u8; CART_RAM_SIZE],
    header: Option<CartridgeHeader>,
}

impl RomCartridge {
    pub fn new(rom: Vec<u8>) -> Result<Self> {
        if rom.is_empty() {
            bail!("cartridge image is empty");
        }

        let header = CartridgeHeader::parse(&rom);
        match &header {
            Some(header) => {
                log::info!("{header}");
                if !header.logo_ok() {
                    log::warn!("cartridge logo does not match the boot ROM's copy");
                }
                if !header.checksum_ok() {
                    log::warn!(
                        "header checksum mismatch: stored 0x{:02X}, computed 0x{:02X}",
                        header.header_checksum,
                        header.computed_checksum()
                    );
                }
            }
            None => log::info!(
                "cartridge image is {} bytes, too short for a header",
                rom.len()
            ),
        }

        Ok(Self {
            rom,
            ram: [0; CART_RAM_SIZE],
            header,
        })
    }

    /// Read a cartridge image from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rom = std::fs::read(path)
            .with_context(|| format!("failed to read ROM file '{}'", path.display()))?;
        Self::new(rom).with_context(|| format!("failed to load ROM file '{}'", path.display()))
    }

    pub fn header(&self) -> Option<&CartridgeHeader> {
        self.header.as_ref()
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }
}

impl Cartridge for RomCartridge {
    fn read_byte(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.rom.get(addr as usize).copied().unwrap_or(UNMAPPED_READ),
            0xA000..=0xBFFF => self.ram[(addr - CART_RAM_START) as usize],
            _ => UNMAPPED_READ,
        }
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => {
                log::debug!("ignored cartridge ROM write 0x{value:02X} at 0x{addr:04X}");
            }
            0xA000..=0xBFFF => self.ram[(addr - CART_RAM_START) as usize] = value,
            _ => {}
        }
    }
}
