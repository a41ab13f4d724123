use super::{Bus, Cpu};

/// Interrupt sources, in priority order.
///
/// The core has no IE/IF register file; whoever owns the peripherals
/// decides when a line fires and calls [`Cpu::request_interrupt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    /// Handler address: 0x40, 0x48, 0x50, 0x58, 0x60.
    pub const fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }
}

impl Cpu {
    /// Deliver an interrupt request.
    ///
    /// Any request wakes the CPU from HALT/STOP. If IME is set the
    /// interrupt is serviced: IME is cleared, PC is pushed and execution
    /// continues at the vector. Returns the cycles charged (5 when
    /// serviced, 0 otherwise).
    pub fn request_interrupt<B: Bus>(&mut self, bus: &mut B, interrupt: Interrupt) -> u32 {
        self.halted = false;

        if !self.ime {
            return 0;
        }

        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();
        log::debug!(
            "interrupt {interrupt:?}: vector=0x{vector:04X} return=0x{pc:04X} sp=0x{sp:04X}",
            vector = self.regs.pc,
            sp = self.regs.sp,
        );

        self.cycles += 5;
        bus.tick(5);
        5
    }

    /// Apply delayed IME change requested by EI.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            // Second step after EI: actually enable IME.
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            // First step after EI: arm the delayed enable.
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
