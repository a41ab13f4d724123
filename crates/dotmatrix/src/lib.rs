use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use typed_builder::TypedBuilder;

use dotmatrix_core::{GameBoy, RomCartridge, RunLimits, RunOutcome};

pub const USAGE: &str = "usage: dotmatrix <rom> [--steps N] [--break ADDR] [--stop-on-halt] [--trace]";

/// Everything the runner needs to know about one session.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct EmulatorConfig {
    #[builder(setter(into))]
    pub rom_path: PathBuf,
    #[builder(default, setter(strip_option))]
    pub max_steps: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub breakpoint: Option<u16>,
    #[builder(default)]
    pub stop_on_halt: bool,
    /// Log every executed instruction at `trace` level.
    #[builder(default)]
    pub trace: bool,
}

impl EmulatorConfig {
    /// Parse command-line arguments, program name already skipped.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut rom_path = None;
        let mut max_steps = None;
        let mut breakpoint = None;
        let mut stop_on_halt = false;
        let mut trace = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--steps" => {
                    let value = args.next().context("--steps needs a value")?;
                    max_steps = Some(parse_number(&value).context("invalid --steps value")?);
                }
                "--break" => {
                    let value = args.next().context("--break needs an address")?;
                    let addr = parse_number(&value).context("invalid --break address")?;
                    let addr = u16::try_from(addr)
                        .with_context(|| format!("breakpoint 0x{addr:X} is outside the address space"))?;
                    breakpoint = Some(addr);
                }
                "--stop-on-halt" => stop_on_halt = true,
                "--trace" => trace = true,
                flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
                _ if rom_path.is_some() => bail!("unexpected extra argument '{arg}'"),
                _ => rom_path = Some(PathBuf::from(&arg)),
            }
        }

        let rom_path = rom_path.context("no ROM path provided")?;
        Ok(Self {
            rom_path,
            max_steps,
            breakpoint,
            stop_on_halt,
            trace,
        })
    }

    pub fn run_limits(&self) -> RunLimits {
        RunLimits {
            max_steps: self.max_steps,
            breakpoint: self.breakpoint,
            stop_on_halt: self.stop_on_halt,
        }
    }
}

/// Decimal, or hexadecimal with a `0x` prefix.
pub fn parse_number(text: &str) -> Result<u64> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.with_context(|| format!("'{text}' is not a number"))
}

/// Load the cartridge, run it under the configured limits and report how
/// the run ended.
pub fn run(config: &EmulatorConfig) -> Result<RunOutcome> {
    log::info!("Loading ROM '{}'", config.rom_path.display());
    let cartridge = RomCartridge::from_file(&config.rom_path)?;
    let mut gb = GameBoy::new(cartridge);

    let outcome = gb.run(&config.run_limits());
    log::info!(
        "Stopped with {outcome:?} at PC=0x{:04X} after {} cycles",
        gb.cpu.regs.pc,
        gb.cpu.cycles()
    );
    log::info!("{}", gb.cpu.dump());
    Ok(outcome)
}
