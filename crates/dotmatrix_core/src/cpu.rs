mod alu;
mod bus;
mod cb;
mod decode;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use bus::Bus;
pub use decode::{
    decode, dispatch, AluOp, Condition, Indirect, Instruction, Reg16, Reg8, Rotate, StackPair,
    DISPATCH_TABLE,
};
pub use interrupts::Interrupt;
pub use regs::{Flag, Registers};

/// Game Boy CPU core.
///
/// Owns the register file and the small amount of control state the
/// instruction set needs (`halted`, `ime`). Memory is never owned here:
/// every operation that touches the address space takes the bus by
/// exclusive reference, so a fresh `Cpu` plus any `Bus` implementation is
/// all a test needs.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Set by HALT/STOP. While true, `step` idles one cycle at a time
    /// instead of fetching.
    pub halted: bool,
    /// Interrupt master enable.
    pub ime: bool,
    /// Last opcode fetched by `step`, kept for diagnostics.
    opcode: u8,
    /// Machine cycles elapsed since power-on or the last reset.
    cycles: u64,
    /// EI was executed; IME turns on after the next instruction.
    ime_enable_pending: bool,
    ime_enable_delay: bool,
}

impl Cpu {
    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Human-readable register and flag dump.
    pub fn dump(&self) -> String {
        format!(
            "opcode=0x{:02X} cycles={} halted={} ime={}\n{}",
            self.opcode, self.cycles, self.halted, self.ime, self.regs
        )
    }
}

#[cfg(test)]
mod tests;
