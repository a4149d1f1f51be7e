use crate::cpu::op::{Alu16, Alu8};
use crate::cpu::{Bus, Cpu, Instruction};

impl Cpu {
    pub(super) fn exec_alu8<B: Bus>(&mut self, bus: &mut B, alu: Alu8, instr: &Instruction<'_>) {
        match alu {
            Alu8::Arith(op, src) => {
                let value = self.read_operand8(bus, src, instr);
                self.alu8(op, value);
            }
            Alu8::Inc(target) => {
                let value = self.read_operand8(bus, target, instr);
                let result = self.alu_inc8(value);
                self.write_operand8(bus, target, result);
            }
            Alu8::Dec(target) => {
                let value = self.read_operand8(bus, target, instr);
                let result = self.alu_dec8(value);
                self.write_operand8(bus, target, result);
            }
        }
    }

    pub(super) fn exec_alu16(&mut self, alu: Alu16, instr: &Instruction<'_>) {
        match alu {
            // 16-bit INC/DEC leave the flags alone.
            Alu16::Inc(rr) => {
                let value = self.regs.get16(rr).wrapping_add(1);
                self.regs.set16(rr, value);
            }
            Alu16::Dec(rr) => {
                let value = self.regs.get16(rr).wrapping_sub(1);
                self.regs.set16(rr, value);
            }
            Alu16::AddHl(rr) => {
                let value = self.regs.get16(rr);
                self.alu_add_hl(value);
            }
            Alu16::AddSp => {
                self.regs.sp = self.alu_sp_offset(instr.imm8());
            }
            Alu16::LdHlSp => {
                let value = self.alu_sp_offset(instr.imm8());
                self.regs.set_hl(value);
            }
        }
    }
}
