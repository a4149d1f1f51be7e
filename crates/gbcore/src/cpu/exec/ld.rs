use crate::cpu::op::{Indirect, Load};
use crate::cpu::{Bus, Cpu, Instruction};

impl Cpu {
    pub(super) fn exec_load<B: Bus>(&mut self, bus: &mut B, load: Load, instr: &Instruction<'_>) {
        match load {
            Load::Ld8 { dst, src } => {
                let value = self.read_operand8(bus, src, instr);
                self.write_operand8(bus, dst, value);
            }
            Load::Ld16(rr) => self.regs.set16(rr, instr.imm16()),
            Load::StoreA(ind) => {
                let addr = self.indirect_addr(ind);
                bus.write8(addr, self.regs.a);
            }
            Load::LoadA(ind) => {
                let addr = self.indirect_addr(ind);
                self.regs.a = bus.read8(addr);
            }
            Load::StoreSp => {
                let addr = instr.imm16();
                let [lo, hi] = self.regs.sp.to_le_bytes();
                bus.write8(addr, lo);
                bus.write8(addr.wrapping_add(1), hi);
            }
            Load::StoreHigh => bus.write8(high_page(instr.imm8()), self.regs.a),
            Load::LoadHigh => self.regs.a = bus.read8(high_page(instr.imm8())),
            Load::StoreHighC => bus.write8(high_page(self.regs.c), self.regs.a),
            Load::LoadHighC => self.regs.a = bus.read8(high_page(self.regs.c)),
            Load::StoreA16 => bus.write8(instr.imm16(), self.regs.a),
            Load::LoadA16 => self.regs.a = bus.read8(instr.imm16()),
            Load::SpFromHl => self.regs.sp = self.regs.hl(),
            Load::Push(pair) => self.exec_push(bus, pair),
            Load::Pop(pair) => self.exec_pop(bus, pair),
        }
    }

    /// Resolve the address of `(BC)`, `(DE)`, `(HL+)` or `(HL-)`, applying
    /// the post-increment/decrement of HL.
    fn indirect_addr(&mut self, ind: Indirect) -> u16 {
        match ind {
            Indirect::BC => self.regs.bc(),
            Indirect::DE => self.regs.de(),
            Indirect::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }
}

/// `$FF00 + offset`, the IO page used by LDH and `LD (C)`.
#[inline]
fn high_page(offset: u8) -> u16 {
    0xFF00 | offset as u16
}
