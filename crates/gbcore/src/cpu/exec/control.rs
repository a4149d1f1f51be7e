use crate::cpu::op::Control;
use crate::cpu::{Bus, Cpu, Instruction};

impl Cpu {
    /// Returns whether the branch was taken (always true for unconditional
    /// forms).
    pub(super) fn exec_control<B: Bus>(
        &mut self,
        bus: &mut B,
        control: Control,
        instr: &Instruction<'_>,
    ) -> bool {
        match control {
            Control::Jr(cond) => {
                let taken = cond.map_or(true, |cc| self.condition(cc));
                if taken {
                    // Displacement is relative to the byte after the operand.
                    let offset = instr.imm8() as i8;
                    self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
                }
                taken
            }
            Control::Jp(cond) => {
                let taken = cond.map_or(true, |cc| self.condition(cc));
                if taken {
                    self.regs.pc = instr.imm16();
                }
                taken
            }
            Control::JpHl => {
                self.regs.pc = self.regs.hl();
                true
            }
            Control::Call(cond) => {
                let taken = cond.map_or(true, |cc| self.condition(cc));
                if taken {
                    self.exec_call(bus, instr.imm16());
                }
                taken
            }
            Control::Ret(cond) => {
                let taken = cond.map_or(true, |cc| self.condition(cc));
                if taken {
                    self.exec_ret(bus);
                }
                taken
            }
            Control::Reti => {
                self.exec_ret(bus);
                // RETI enables IME immediately, unlike EI.
                self.ime = true;
                true
            }
            Control::Rst(vector) => {
                self.exec_call(bus, vector as u16);
                true
            }
        }
    }
}
