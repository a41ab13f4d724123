use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use typed_builder::TypedBuilder;

use crate::cpu::Cpu;

use super::cartridge::{Cartridge, RomCartridge};
use super::MemoryBus;

/// Conditions under which [`GameBoy::run`] returns.
///
/// The default has no limits at all: the loop only returns once its
/// [`StopHandle`] is raised.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct RunLimits {
    /// Maximum number of `Cpu::step` calls.
    #[builder(default, setter(strip_option))]
    pub max_steps: Option<u64>,
    /// Return before executing the instruction at this address.
    #[builder(default, setter(strip_option))]
    pub breakpoint: Option<u16>,
    /// Return as soon as the CPU enters HALT or STOP.
    #[builder(default)]
    pub stop_on_halt: bool,
}

/// Why [`GameBoy::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    StepLimit,
    Breakpoint(u16),
    Halted,
    Stopped,
}

/// Cancellation flag for a running [`GameBoy::run`] loop.
///
/// Clones share the same flag, so one can be handed to another thread
/// (or a signal handler) while the machine runs. The run that observes
/// the request lowers the flag again, so a later `run` resumes.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Lower the flag, returning whether it was raised.
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }
}

/// CPU and bus wired together around one cartridge.
pub struct GameBoy<C: Cartridge = RomCartridge> {
    pub cpu: Cpu,
    pub bus: MemoryBus<C>,
    stop: StopHandle,
}

impl<C: Cartridge> GameBoy<C> {
    pub fn new(cartridge: C) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: MemoryBus::new(cartridge),
            stop: StopHandle::default(),
        }
    }

    /// Back to power-on state. The cartridge (and its RAM) is kept, and a
    /// raised stop handle is lowered again.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
        self.stop.clear();
    }

    /// Execute one instruction and return the machine cycles it took.
    pub fn step(&mut self) -> u32 {
        self.cpu.step(&mut self.bus)
    }

    /// Handle that makes a running [`GameBoy::run`] return `Stopped`.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Step until one of `limits` is reached or the stop handle is raised.
    ///
    /// Checks happen before each step, in this order: stop handle, halt,
    /// breakpoint, step budget. A breakpoint equal to the current PC
    /// therefore returns immediately without executing anything: after a
    /// `Breakpoint` outcome, `step` once before calling `run` again.
    pub fn run(&mut self, limits: &RunLimits) -> RunOutcome {
        let start_cycles = self.cpu.cycles();
        let mut steps: u64 = 0;

        let outcome = loop {
            if self.stop.take() {
                break RunOutcome::Stopped;
            }
            if limits.stop_on_halt && self.cpu.halted {
                break RunOutcome::Halted;
            }
            if let Some(addr) = limits.breakpoint {
                if self.cpu.regs.pc == addr && !self.cpu.halted {
                    break RunOutcome::Breakpoint(addr);
                }
            }
            if limits.max_steps.is_some_and(|max| steps >= max) {
                break RunOutcome::StepLimit;
            }

            self.step();
            steps += 1;
        };

        log::debug!(
            "run finished with {outcome:?} after {steps} steps ({} cycles)",
            self.cpu.cycles() - start_cycles
        );
        outcome
    }
}
