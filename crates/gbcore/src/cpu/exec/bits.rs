use crate::cpu::op::{Bits, Operand8};
use crate::cpu::{Bus, Cpu, Flag, FlagState};

impl Cpu {
    /// Accumulator rotates and the CB-prefixed rotate/shift/bit group.
    pub(super) fn exec_bits<B: Bus>(&mut self, bus: &mut B, bits: Bits) {
        match bits {
            Bits::RotateA(op) => {
                // RLCA/RRCA/RLA/RRA always clear Z, unlike their CB forms.
                let (result, carry) = self.alu_shift(op, self.regs.a);
                self.regs.a = result;
                self.set_flags(FlagState {
                    c: carry,
                    ..FlagState::default()
                });
            }
            Bits::Shift(op, target) => {
                let value = self.read_target(bus, target);
                let (result, carry) = self.alu_shift(op, value);
                self.set_flags(FlagState {
                    z: result == 0,
                    n: false,
                    h: false,
                    c: carry,
                });
                self.write_operand8(bus, target, result);
            }
            Bits::Bit(bit, target) => {
                let value = self.read_target(bus, target);
                self.set_flag(Flag::Z, value & (1 << bit) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            Bits::Res(bit, target) => {
                let value = self.read_target(bus, target);
                self.write_operand8(bus, target, value & !(1 << bit));
            }
            Bits::Set(bit, target) => {
                let value = self.read_target(bus, target);
                self.write_operand8(bus, target, value | (1 << bit));
            }
        }
    }

    /// CB targets are registers or (HL); never an immediate.
    fn read_target<B: Bus>(&mut self, bus: &mut B, target: Operand8) -> u8 {
        match target {
            Operand8::Reg(reg) => self.regs.get8(reg),
            Operand8::IndHl => bus.read8(self.regs.hl()),
            Operand8::Imm8 => unreachable!("CB group has no immediate operand"),
        }
    }
}
