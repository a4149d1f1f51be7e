use super::op::{AluOp, ShiftOp};
use super::{Cpu, Flag, FlagState};

/// 8-bit addition with optional carry-in.
fn add8(a: u8, value: u8, carry_in: bool) -> (u8, FlagState) {
    let carry = carry_in as u8;
    let result = a.wrapping_add(value).wrapping_add(carry);
    let flags = FlagState {
        z: result == 0,
        n: false,
        h: (a & 0x0F) + (value & 0x0F) + carry > 0x0F,
        c: a as u16 + value as u16 + carry as u16 > 0xFF,
    };
    (result, flags)
}

/// 8-bit subtraction with optional borrow-in. Shared by SUB, SBC and CP.
fn sub8(a: u8, value: u8, borrow_in: bool) -> (u8, FlagState) {
    let borrow = borrow_in as u8;
    let result = a.wrapping_sub(value).wrapping_sub(borrow);
    let flags = FlagState {
        z: result == 0,
        n: true,
        h: (a & 0x0F) < (value & 0x0F) + borrow,
        c: (a as u16) < value as u16 + borrow as u16,
    };
    (result, flags)
}

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP with `value` on A.
    ///
    /// CP computes the SUB flags and leaves A untouched.
    pub(super) fn alu8(&mut self, op: AluOp, value: u8) {
        let a = self.regs.a;
        let carry = self.get_flag(Flag::C);

        let (result, flags) = match op {
            AluOp::Add => add8(a, value, false),
            AluOp::Adc => add8(a, value, carry),
            AluOp::Sub | AluOp::Cp => sub8(a, value, false),
            AluOp::Sbc => sub8(a, value, carry),
            AluOp::And => {
                let result = a & value;
                let flags = FlagState {
                    z: result == 0,
                    h: true,
                    ..FlagState::default()
                };
                (result, flags)
            }
            AluOp::Xor | AluOp::Or => {
                let result = if op == AluOp::Xor { a ^ value } else { a | value };
                let flags = FlagState {
                    z: result == 0,
                    ..FlagState::default()
                };
                (result, flags)
            }
        };

        if op != AluOp::Cp {
            self.regs.a = result;
        }
        self.set_flags(flags);
    }

    /// INC r / INC (HL). C is preserved.
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, value & 0x0F == 0x0F);
        result
    }

    /// DEC r / DEC (HL). C is preserved; H signals a borrow from bit 4.
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, value & 0x0F == 0);
        result
    }

    /// ADD HL,rr: Z preserved, N cleared, H from bit 11, C from bit 15.
    pub(super) fn alu_add_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, hl as u32 + value as u32 > 0xFFFF);
        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// SP plus a signed 8-bit offset, for ADD SP,r8 and LD HL,SP+r8.
    ///
    /// Z and N are cleared; H and C come from the unsigned addition of the
    /// low byte of SP and the raw offset byte.
    pub(super) fn alu_sp_offset(&mut self, offset: u8) -> u16 {
        let sp = self.regs.sp;
        let low = sp as u8;
        self.set_flags(FlagState {
            z: false,
            n: false,
            h: (low & 0x0F) + (offset & 0x0F) > 0x0F,
            c: low as u16 + offset as u16 > 0xFF,
        });
        sp.wrapping_add(offset as i8 as u16)
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// The correction depends on N, H and C: after an addition the low/high
    /// digit is also corrected when it overflowed past 9. N is preserved,
    /// H is cleared, C is set when the high digit was corrected.
    pub(super) fn alu_daa(&mut self) {
        let flags = self.flags();
        let mut correction = 0u8;
        let mut carry = flags.c;

        if flags.h || (!flags.n && self.regs.a & 0x0F > 0x09) {
            correction |= 0x06;
        }
        if flags.c || (!flags.n && self.regs.a > 0x99) {
            correction |= 0x60;
            carry = true;
        }

        let result = if flags.n {
            self.regs.a.wrapping_sub(correction)
        } else {
            self.regs.a.wrapping_add(correction)
        };

        self.regs.a = result;
        self.set_flags(FlagState {
            z: result == 0,
            n: flags.n,
            h: false,
            c: carry,
        });
    }

    /// Rotate or shift `value`; returns the result and the bit shifted out.
    pub(super) fn alu_shift(&self, op: ShiftOp, value: u8) -> (u8, bool) {
        let carry_in = self.get_flag(Flag::C) as u8;
        match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | carry_in, value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        }
    }
}
