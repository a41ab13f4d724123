mod bus;
mod cartridge;
mod gameboy;

pub use bus::MemoryBus;
pub use cartridge::{Cartridge, CartridgeHeader, RomCartridge};
pub use gameboy::{GameBoy, RunLimits, RunOutcome, StopHandle};
