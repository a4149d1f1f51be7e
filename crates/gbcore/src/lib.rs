//! Instruction-execution core for the Game Boy CPU (LR35902 / SM83).
//!
//! The crate exposes the register file, a static instruction table, a
//! decoder producing [`Instruction`] occurrences and the [`Cpu`] executor.
//! Memory and IO live behind the [`Bus`] trait; [`FlatMemory`] is a plain
//! 64 KiB implementation for tests and headless hosts.

pub mod cpu;
pub mod memory;

pub use cpu::{
    Bus, Cpu, CpuError, CpuState, Decoder, Execution, Flag, FlagState, Instruction,
    InstructionDescriptor, InstructionSet, Interrupt, InterruptFlags, Op, Registers,
    INSTRUCTION_SET,
};
pub use memory::FlatMemory;
