use crate::cpu::{Bus, Condition, Cpu};

impl Cpu {
    pub(super) fn exec_jr_cc<B: Bus>(&mut self, bus: &mut B, cc: Condition) -> u32 {
        let taken = self.condition(cc);
        self.jr(bus, taken)
    }

    pub(super) fn exec_jp_cc<B: Bus>(&mut self, bus: &mut B, cc: Condition) -> u32 {
        let taken = self.condition(cc);
        self.jp_cond(bus, taken)
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        1
    }

    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, cc: Condition) -> u32 {
        let taken = self.condition(cc);
        self.call_cond(bus, taken)
    }

    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, cc: Condition) -> u32 {
        let taken = self.condition(cc);
        self.ret_cond(bus, taken)
    }
}
