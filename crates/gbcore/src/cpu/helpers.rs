use super::op::{Cond, Operand8};
use super::{Bus, Cpu, Flag, Instruction};

impl Cpu {
    /// Read an 8-bit operand slot: a register, the byte at (HL), or the
    /// instruction's d8 immediate.
    #[inline]
    pub(super) fn read_operand8<B: Bus>(
        &mut self,
        bus: &mut B,
        operand: Operand8,
        instr: &Instruction<'_>,
    ) -> u8 {
        match operand {
            Operand8::Reg(reg) => self.regs.get8(reg),
            Operand8::IndHl => bus.read8(self.regs.hl()),
            Operand8::Imm8 => instr.imm8(),
        }
    }

    /// Write an 8-bit operand slot. The table never uses d8 as a destination.
    #[inline]
    pub(super) fn write_operand8<B: Bus>(&mut self, bus: &mut B, operand: Operand8, value: u8) {
        match operand {
            Operand8::Reg(reg) => self.regs.set8(reg, value),
            Operand8::IndHl => bus.write8(self.regs.hl(), value),
            Operand8::Imm8 => unreachable!("d8 is not a writable operand"),
        }
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        // Stack grows downward: memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        let hi = bus.read8(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }

    /// Evaluate a branch condition against the live F register.
    #[inline]
    pub(super) fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::NZ => !self.get_flag(Flag::Z),
            Cond::Z => self.get_flag(Flag::Z),
            Cond::NC => !self.get_flag(Flag::C),
            Cond::C => self.get_flag(Flag::C),
        }
    }
}
