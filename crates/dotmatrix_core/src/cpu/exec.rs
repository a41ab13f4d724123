mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu, Instruction};

impl Cpu {
    /// Execute one decoded primary instruction and return the machine
    /// cycles it consumed.
    ///
    /// The opcode byte has already been fetched; operand bytes are read
    /// from PC here. No arm can fail: opcode holes run as one-cycle NOPs.
    pub fn execute<B: Bus>(&mut self, bus: &mut B, instr: Instruction) -> u32 {
        match instr {
            Instruction::Nop => 1,
            Instruction::Stop => self.exec_stop(bus),
            Instruction::Halt => self.exec_halt(),
            Instruction::Di => self.exec_di(),
            Instruction::Ei => self.exec_ei(),

            // Loads.
            Instruction::LdRrD16(rr) => self.exec_ld_rr_d16(bus, rr),
            Instruction::LdIndirectA(ind) => self.exec_ld_indirect_a(bus, ind),
            Instruction::LdAIndirect(ind) => self.exec_ld_a_indirect(bus, ind),
            Instruction::LdRD8(r) => self.exec_ld_r_d8(bus, r),
            Instruction::LdRR { dst, src } => self.exec_ld_r_r(bus, dst, src),
            Instruction::LdA16Sp => self.exec_ld_a16_sp(bus),
            Instruction::LdhA8A => self.exec_ldh_a8_a(bus),
            Instruction::LdhAA8 => self.exec_ldh_a_a8(bus),
            Instruction::LdhCA => self.exec_ldh_c_a(bus),
            Instruction::LdhAC => self.exec_ldh_a_c(bus),
            Instruction::LdA16A => self.exec_ld_a16_a(bus),
            Instruction::LdAA16 => self.exec_ld_a_a16(bus),
            Instruction::LdHlSpR8 => self.exec_ld_hl_sp_r8(bus),
            Instruction::LdSpHl => self.exec_ld_sp_hl(),

            // Increment / decrement.
            Instruction::IncR(r) => self.exec_inc8(bus, r),
            Instruction::DecR(r) => self.exec_dec8(bus, r),
            Instruction::IncRr(rr) => self.exec_inc16(rr),
            Instruction::DecRr(rr) => self.exec_dec16(rr),

            // Arithmetic / logic.
            Instruction::Alu(op, r) => self.exec_alu_reg(bus, op, r),
            Instruction::AluImm(op) => self.exec_alu_imm(bus, op),
            Instruction::AddHlRr(rr) => self.exec_add_hl_rr(rr),
            Instruction::AddSpR8 => self.exec_add_sp_r8(bus),
            Instruction::RotateA(rot) => self.exec_rotate_a(rot),
            Instruction::Daa => self.exec_daa(),
            Instruction::Cpl => self.exec_cpl(),
            Instruction::Scf => self.exec_scf(),
            Instruction::Ccf => self.exec_ccf(),

            // Control flow.
            Instruction::Jr => self.jr(bus, true),
            Instruction::JrCond(cc) => self.exec_jr_cc(bus, cc),
            Instruction::Jp => self.jp_cond(bus, true),
            Instruction::JpCond(cc) => self.exec_jp_cc(bus, cc),
            Instruction::JpHl => self.exec_jp_hl(),
            Instruction::Call => self.call_cond(bus, true),
            Instruction::CallCond(cc) => self.exec_call_cc(bus, cc),
            Instruction::Ret => self.exec_ret(bus),
            Instruction::RetCond(cc) => self.exec_ret_cc(bus, cc),
            Instruction::Reti => self.exec_reti(bus),
            Instruction::Rst(vector) => self.exec_rst(bus, vector),
            Instruction::Push(pair) => self.exec_push(bus, pair),
            Instruction::Pop(pair) => self.exec_pop(bus, pair),

            Instruction::Prefix => self.step_cb(bus),

            // Opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD).
            Instruction::Illegal(opcode) => {
                log::warn!(
                    "undefined opcode 0x{opcode:02X} at PC=0x{pc:04X}, treated as NOP",
                    pc = self.regs.pc.wrapping_sub(1),
                );
                1
            }
        }
    }
}
