use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_halt(&mut self) -> u32 {
        self.halted = true;
        1
    }

    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        // STOP is a 2-byte instruction; the second byte is padding.
        let _padding = self.fetch8(bus);

        // There is no joypad line to wake STOP separately, so it shares
        // the HALT idle state and is left by `request_interrupt`.
        self.halted = true;
        1
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        1
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        // IME becomes 1 after the *next* instruction completes.
        if !self.ime {
            self.ime_enable_pending = true;
        }
        1
    }
}
