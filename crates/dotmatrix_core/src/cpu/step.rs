use super::{dispatch, Bus, Cpu};

impl Cpu {
    /// Execute a single instruction and return the machine cycles taken.
    ///
    /// While halted nothing is fetched: the step idles for one cycle.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if self.halted {
            self.cycles += 1;
            bus.tick(1);
            return 1;
        }

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        self.opcode = opcode;
        let instr = dispatch(opcode);

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("0x{pc:04X}: {opcode:02X} {instr}\n{}", self.regs);
        }

        let cycles = self.execute(bus, instr);
        self.cycles += u64::from(cycles);
        bus.tick(cycles);
        self.apply_ime_delay();
        cycles
    }
}
