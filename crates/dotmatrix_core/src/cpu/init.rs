use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::power_on(),
            halted: false,
            ime: false,
            opcode: 0,
            cycles: 0,
            ime_enable_pending: false,
            ime_enable_delay: false,
        }
    }

    /// Reset the CPU to its power-on state.
    ///
    /// IME is clear when control reaches the cartridge at 0x0100; software
    /// enables interrupts itself via EI/RETI.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
