pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Cpu, Flag, Instruction, Interrupt, Registers};
pub use machine::{
    Cartridge, CartridgeHeader, GameBoy, MemoryBus, RomCartridge, RunLimits, RunOutcome,
    StopHandle,
};

/// Value returned by the bus for addresses that have no backing store yet.
pub const UNMAPPED_READ: u8 = 0xFF;
