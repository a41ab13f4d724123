/// Abstraction over the Game Boy address space as seen by the CPU.
///
/// Both accessors are total over the 16-bit address space: implementations
/// decide what unsupported addresses read back as, and never fail.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals by a number of machine cycles.
    ///
    /// Called once per `Cpu::step` with the cycles that step consumed.
    /// The default does nothing; a bus with timers or video attached can
    /// override it.
    fn tick(&mut self, _cycles: u32) {}
}
