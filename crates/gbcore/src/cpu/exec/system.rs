use crate::cpu::op::Special;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    pub(super) fn exec_special<B: Bus>(&mut self, bus: &mut B, special: Special) {
        match special {
            Special::Nop => {}
            Special::Halt => self.exec_halt(bus),
            Special::Stop => {
                // The padding byte was consumed by the decoder.
                self.stopped = true;
                self.halted = false;
                log::debug!("GB CPU entering STOP at PC=0x{:04X}", self.regs.pc);
            }
            Special::Di => {
                self.ime = false;
                self.ime_countdown = 0;
            }
            Special::Ei => {
                // IME becomes 1 once the instruction after EI completes.
                if !self.ime && self.ime_countdown == 0 {
                    self.ime_countdown = 2;
                }
            }
            Special::Daa => self.alu_daa(),
            Special::Cpl => {
                self.regs.a = !self.regs.a;
                self.set_flag(Flag::N, true);
                self.set_flag(Flag::H, true);
            }
            Special::Scf => {
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, false);
                self.set_flag(Flag::C, true);
            }
            Special::Ccf => {
                let carry = self.get_flag(Flag::C);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, false);
                self.set_flag(Flag::C, !carry);
            }
        }
    }

    fn exec_halt<B: Bus>(&mut self, bus: &mut B) {
        // HALT bug: with IME clear and an interrupt already pending the CPU
        // does not halt, and the next opcode fetch fails to increment PC.
        if !self.ime && !self.pending_interrupts(bus).is_empty() {
            log::debug!("GB CPU HALT bug at PC=0x{:04X}", self.regs.pc);
            self.halt_bug = true;
            return;
        }
        self.halted = true;
    }
}
