mod alu;
mod bits;
mod control;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu, CpuError, Execution, Instruction, Op};

impl Cpu {
    /// Perform one decoded instruction and report the cycles it consumed.
    ///
    /// PC is expected to already point past the instruction's encoding (the
    /// decoder leaves it there); relative jumps and return addresses are
    /// computed from it. Conditional control flow reads F now, not at decode
    /// time, and is charged the descriptor's not-taken cost when it falls
    /// through.
    ///
    /// A pending EI is advanced after every completed instruction, so a host
    /// driving decode and execute by hand sees IME turn on at the same point
    /// `step` would.
    ///
    /// Illegal opcodes and a bare CB prefix are rejected before anything is
    /// mutated.
    pub fn execute<B: Bus>(
        &mut self,
        bus: &mut B,
        instr: &Instruction<'_>,
    ) -> Result<Execution, CpuError> {
        let descriptor = instr.descriptor();

        let taken = match descriptor.op {
            Op::Illegal => {
                return Err(CpuError::IllegalOpcode {
                    opcode: descriptor.opcode,
                    address: instr.address(),
                })
            }
            Op::Prefix => {
                return Err(CpuError::UnresolvedPrefix {
                    address: instr.address(),
                })
            }
            Op::Load(load) => {
                self.exec_load(bus, load, instr);
                true
            }
            Op::Alu8(alu) => {
                self.exec_alu8(bus, alu, instr);
                true
            }
            Op::Alu16(alu) => {
                self.exec_alu16(alu, instr);
                true
            }
            Op::Bits(bits) => {
                self.exec_bits(bus, bits);
                true
            }
            Op::Control(control) => self.exec_control(bus, control, instr),
            Op::Special(special) => {
                self.exec_special(bus, special);
                true
            }
        };

        let cycles = if taken {
            descriptor.cycles
        } else {
            descriptor.cycles_not_taken.unwrap_or(descriptor.cycles)
        };
        self.tick_ime_countdown();
        Ok(Execution::cycles(cycles))
    }

    fn tick_ime_countdown(&mut self) {
        if self.ime_countdown == 0 {
            return;
        }
        self.ime_countdown -= 1;
        if self.ime_countdown == 0 {
            self.ime = true;
        }
    }
}
