mod alu;
mod bus;
mod decode;
mod error;
mod exec;
mod flags;
mod helpers;
mod init;
mod interrupts;
pub mod op;
mod regs;
mod step;
mod table;


pub use bus::{Bus, Interrupt, InterruptFlags, IE_ADDR, IF_ADDR};
pub use decode::{Decoder, Instruction};
pub use error::CpuError;
pub use flags::{Flag, FlagState};
pub use op::Op;
pub use regs::Registers;
pub use table::{InstructionDescriptor, InstructionSet, INSTRUCTION_SET};

/// Idle cost reported for a step spent in HALT. A STOP step costs nothing.
pub const IDLE_CYCLES: u32 = 4;
/// Cost of the interrupt entry sequence (push PC, jump to vector).
pub const INTERRUPT_DISPATCH_CYCLES: u32 = 20;

/// Execution state of the core as seen by the driving loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    Running,
    /// Waiting for `IE & IF` to become non-zero.
    Halted,
    /// Low-power STOP; only an external wake (joypad) resumes execution.
    Stopped,
}

/// Outcome of one executed instruction or one `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Execution {
    /// T-cycles actually consumed.
    pub cycles: u32,
    /// Interrupt whose dispatch this step performed, if any.
    pub interrupt: Option<Interrupt>,
}

impl Execution {
    #[inline]
    pub(crate) fn cycles(cycles: u32) -> Self {
        Self {
            cycles,
            interrupt: None,
        }
    }
}

/// Game Boy CPU core.
///
/// Owns the register file and the control state (`ime`, HALT/STOP, the
/// delayed EI latch and the HALT bug latch). Memory is not owned: every
/// operation borrows a [`Bus`] for its duration.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    halted: bool,
    stopped: bool,
    /// Set by HALT with IME=0 and an interrupt already pending: the next
    /// opcode fetch does not increment PC.
    halt_bug: bool,
    /// Instructions left (EI included) before a requested IME enable lands.
    ime_countdown: u8,
    decoder: Decoder<'static>,
}

impl Cpu {
    pub fn state(&self) -> CpuState {
        if self.stopped {
            CpuState::Stopped
        } else if self.halted {
            CpuState::Halted
        } else {
            CpuState::Running
        }
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Leave STOP mode. The joypad edge that triggers this is a host concern.
    pub fn wake(&mut self) {
        if self.stopped {
            log::debug!("GB CPU leaving STOP at PC=0x{:04X}", self.regs.pc);
        }
        self.stopped = false;
    }

    #[inline]
    pub fn decoder(&self) -> Decoder<'static> {
        self.decoder
    }
}
