//! Headless driver for the `gbcore` CPU.
//!
//! Loads a raw program image into a [`FlatMemory`] bus and steps the core
//! until the program parks itself in a tight loop, the step budget runs out,
//! or the CPU stops. Serial output is captured so test ROMs that report over
//! the link port can be checked without a display.

use anyhow::{bail, Context, Result};
use gbcore::cpu::{Bus, IE_ADDR};
use gbcore::{Cpu, CpuError, FlatMemory, Registers};
use typed_builder::TypedBuilder;

/// What to do when the program hits an opcode with no defined behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IllegalOpcodePolicy {
    /// Abort the run with the CPU error.
    #[default]
    Fail,
    /// Log the opcode, step over its single byte and carry on.
    Skip,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunConfig {
    /// Address the image's first byte is copied to.
    #[builder(default = 0x0100)]
    pub load_address: u16,
    /// Initial PC. Defaults to the load address.
    #[builder(default, setter(strip_option))]
    pub entry: Option<u16>,
    #[builder(default = 10_000_000)]
    pub step_limit: u64,
    #[builder(default)]
    pub illegal_policy: IllegalOpcodePolicy,
    /// Start from the DMG post-boot registers instead of all zeroes.
    #[builder(default = true)]
    pub boot_state: bool,
    /// Log every instruction at info level before it runs.
    #[builder(default = false)]
    pub trace: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    StepLimit,
    /// `JR -2` or `JP` to itself: the program is done and spinning.
    SelfLoop { address: u16 },
    /// STOP was executed; the runner has no joypad to wake it.
    Stopped,
    /// HALT with no interrupt source enabled, so it can never wake.
    HaltedForever,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub stop: StopReason,
    pub steps: u64,
    pub cycles: u64,
    pub illegal_skipped: u64,
    pub serial: Vec<u8>,
    pub registers: Registers,
}

impl RunReport {
    pub fn serial_text(&self) -> String {
        String::from_utf8_lossy(&self.serial).into_owned()
    }
}

pub struct Runner {
    cpu: Cpu,
    memory: FlatMemory,
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig, image: &[u8]) -> Result<Self> {
        let end = config.load_address as usize + image.len();
        if end > 0x10000 {
            bail!(
                "image of {} bytes does not fit at 0x{:04X}",
                image.len(),
                config.load_address
            );
        }

        let mut memory = FlatMemory::new();
        memory.load(config.load_address, image);

        let mut cpu = Cpu::new();
        if !config.boot_state {
            cpu.regs = Registers::default();
        }
        cpu.regs.pc = config.entry.unwrap_or(config.load_address);

        log::info!(
            "Loaded {} bytes at 0x{:04X}, entry PC=0x{:04X}",
            image.len(),
            config.load_address,
            cpu.regs.pc
        );

        Ok(Self {
            cpu,
            memory,
            config,
        })
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn memory(&self) -> &FlatMemory {
        &self.memory
    }

    pub fn run(&mut self) -> Result<RunReport> {
        let mut steps = 0u64;
        let mut cycles = 0u64;
        let mut illegal_skipped = 0u64;

        let stop = loop {
            if steps >= self.config.step_limit {
                log::warn!("Step limit of {} reached", self.config.step_limit);
                break StopReason::StepLimit;
            }
            if self.cpu.is_stopped() {
                break StopReason::Stopped;
            }
            if self.cpu.is_halted() && self.memory.read8(IE_ADDR) & 0x1F == 0 {
                break StopReason::HaltedForever;
            }

            let pc = self.cpu.regs.pc;
            if self.config.trace && !self.cpu.is_halted() {
                self.trace(pc);
            }

            steps += 1;
            match self.cpu.step(&mut self.memory) {
                Ok(exec) => {
                    cycles += u64::from(exec.cycles);
                    if exec.interrupt.is_none() && self.is_self_loop(pc) {
                        break StopReason::SelfLoop { address: pc };
                    }
                }
                Err(err) => self.handle_error(err, &mut illegal_skipped)?,
            }
        };

        log::info!(
            "Run finished: {:?} after {} steps, {} cycles",
            stop,
            steps,
            cycles
        );

        Ok(RunReport {
            stop,
            steps,
            cycles,
            illegal_skipped,
            serial: self.memory.serial_output().to_vec(),
            registers: self.cpu.regs,
        })
    }

    fn handle_error(&mut self, err: CpuError, illegal_skipped: &mut u64) -> Result<()> {
        match (err, self.config.illegal_policy) {
            (CpuError::IllegalOpcode { address, .. }, IllegalOpcodePolicy::Skip) => {
                log::warn!("Skipping {err}");
                *illegal_skipped += 1;
                self.cpu.regs.pc = address.wrapping_add(1);
                Ok(())
            }
            _ => {
                let regs = self.cpu.regs;
                Err(err).with_context(|| {
                    format!(
                        "program aborted (SP=0x{:04X} AF=0x{:04X})",
                        regs.sp,
                        regs.af()
                    )
                })
            }
        }
    }

    /// The instruction at `pc` jumped back onto itself.
    fn is_self_loop(&mut self, pc: u16) -> bool {
        if self.cpu.regs.pc != pc || self.cpu.is_halted() || self.cpu.is_stopped() {
            return false;
        }
        match self.memory.read8(pc) {
            0x18 => self.memory.read8(pc.wrapping_add(1)) == 0xFE,
            0xC3 => {
                let lo = self.memory.read8(pc.wrapping_add(1));
                let hi = self.memory.read8(pc.wrapping_add(2));
                u16::from_le_bytes([lo, hi]) == pc
            }
            _ => false,
        }
    }

    fn trace(&mut self, pc: u16) {
        let mut cursor = pc;
        let decoder = self.cpu.decoder();
        if let Ok(instr) = decoder.decode(&mut self.memory, &mut cursor) {
            let regs = &self.cpu.regs;
            let text = instr.to_string();
            log::info!(
                "{text:<28} AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X}",
                regs.af(),
                regs.bc(),
                regs.de(),
                regs.hl(),
                regs.sp
            );
        }
    }
}

/// Load `image` per `config` and run it to completion.
pub fn run(config: RunConfig, image: &[u8]) -> Result<RunReport> {
    Runner::new(config, image)?.run()
}
