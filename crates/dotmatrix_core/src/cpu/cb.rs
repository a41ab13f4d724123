use super::{Bus, Cpu, Flag, Reg8};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// The prefix byte itself has been consumed; this fetches the second
    /// byte and returns the cycles for the whole two-byte instruction.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let reg = Reg8::from_index(cb & 0x07);
        let value = self.read_reg8(bus, reg);

        match x {
            0 => {
                let result = self.cb_shift(y, value);
                self.write_reg8(bus, reg, result);
                if reg.is_memory() { 4 } else { 2 }
            }
            1 => {
                // BIT b, r: Z = !bit, N=0, H=1, C preserved.
                self.set_flag(Flag::Z, value & (1 << y) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
                if reg.is_memory() { 3 } else { 2 }
            }
            2 => {
                // RES b, r
                self.write_reg8(bus, reg, value & !(1 << y));
                if reg.is_memory() { 4 } else { 2 }
            }
            _ => {
                // SET b, r
                self.write_reg8(bus, reg, value | (1 << y));
                if reg.is_memory() { 4 } else { 2 }
            }
        }
    }

    /// Rotates, shifts and SWAP selected by bits 3–5 of the CB opcode.
    /// All of them set Z from the result and clear N and H.
    fn cb_shift(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.flag(Flag::C) as u8;
        let (result, carry) = match op {
            // RLC
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL
            2 => ((value << 1) | carry_in, value & 0x80 != 0),
            // RR
            3 => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA: bit 7 is kept.
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP
            6 => (value.rotate_left(4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.regs.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry);
        result
    }
}
