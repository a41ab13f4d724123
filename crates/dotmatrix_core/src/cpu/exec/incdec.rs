use crate::cpu::{Bus, Cpu, Reg16, Reg8};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) -> u32 {
        let value = self.read_reg8(bus, reg);
        let result = self.inc8(value);
        self.write_reg8(bus, reg, result);

        // (HL) is a read-modify-write round trip.
        if reg.is_memory() { 3 } else { 1 }
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) -> u32 {
        let value = self.read_reg8(bus, reg);
        let result = self.dec8(value);
        self.write_reg8(bus, reg, result);

        if reg.is_memory() { 3 } else { 1 }
    }

    pub(super) fn exec_inc16(&mut self, rr: Reg16) -> u32 {
        let value = self.read_reg16(rr).wrapping_add(1);
        self.write_reg16(rr, value);
        2
    }

    pub(super) fn exec_dec16(&mut self, rr: Reg16) -> u32 {
        let value = self.read_reg16(rr).wrapping_sub(1);
        self.write_reg16(rr, value);
        2
    }
}
