use crate::cpu::{AluOp, Bus, Cpu, Flag, Reg16, Reg8, Rotate};

impl Cpu {
    pub(super) fn exec_alu_reg<B: Bus>(&mut self, bus: &mut B, op: AluOp, src: Reg8) -> u32 {
        let value = self.read_reg8(bus, src);
        self.alu_a(op, value);

        if src.is_memory() { 2 } else { 1 }
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, op: AluOp) -> u32 {
        let value = self.fetch8(bus);
        self.alu_a(op, value);
        2
    }

    pub(super) fn exec_rotate_a(&mut self, rot: Rotate) -> u32 {
        let a = self.regs.a;
        let carry_in = self.flag(Flag::C);

        let (result, carry_out) = match rot {
            // RLCA: bit 7 to Carry and bit 0.
            Rotate::Rlca => (a.rotate_left(1), (a & 0x80) != 0),
            // RRCA: bit 0 to Carry and bit 7.
            Rotate::Rrca => (a.rotate_right(1), (a & 0x01) != 0),
            // RLA: rotate left through Carry.
            Rotate::Rla => ((a << 1) | carry_in as u8, (a & 0x80) != 0),
            // RRA: rotate right through Carry.
            Rotate::Rra => ((a >> 1) | ((carry_in as u8) << 7), (a & 0x01) != 0),
        };

        self.regs.a = result;
        self.regs.clear_flags();
        self.set_flag(Flag::C, carry_out);
        1
    }

    pub(super) fn exec_add_hl_rr(&mut self, rr: Reg16) -> u32 {
        let value = self.read_reg16(rr);
        let result = self.add16(self.regs.hl(), value);
        self.regs.set_hl(result);
        2
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.add16_signed(self.regs.sp, imm);
        4
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.daa();
        1
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        1
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        1
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        1
    }
}
