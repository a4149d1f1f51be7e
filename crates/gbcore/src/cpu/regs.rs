use super::op::{Reg16, Reg8, StackPair};

/// Registers for the Game Boy CPU (LR35902).
///
/// The 16-bit pairs are views over two 8-bit fields rather than separate
/// storage, so writing a half is visible through the pair and vice versa.
/// F only ever holds flag bits in its upper nibble.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f & 0xF0])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    #[inline]
    pub fn get8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
            Reg8::A => self.a,
        }
    }

    #[inline]
    pub fn set8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.b = value,
            Reg8::C => self.c = value,
            Reg8::D => self.d = value,
            Reg8::E => self.e = value,
            Reg8::H => self.h = value,
            Reg8::L => self.l = value,
            Reg8::A => self.a = value,
        }
    }

    /// Read one of the `rr` pairs used by 16-bit loads and arithmetic.
    #[inline]
    pub fn get16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.bc(),
            Reg16::DE => self.de(),
            Reg16::HL => self.hl(),
            Reg16::SP => self.sp,
        }
    }

    #[inline]
    pub fn set16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.set_bc(value),
            Reg16::DE => self.set_de(value),
            Reg16::HL => self.set_hl(value),
            Reg16::SP => self.sp = value,
        }
    }

    /// PUSH/POP operate on AF in place of SP.
    #[inline]
    pub fn get_stack_pair(&self, pair: StackPair) -> u16 {
        match pair {
            StackPair::BC => self.bc(),
            StackPair::DE => self.de(),
            StackPair::HL => self.hl(),
            StackPair::AF => self.af(),
        }
    }

    #[inline]
    pub fn set_stack_pair(&mut self, pair: StackPair, value: u16) {
        match pair {
            StackPair::BC => self.set_bc(value),
            StackPair::DE => self.set_de(value),
            StackPair::HL => self.set_hl(value),
            StackPair::AF => self.set_af(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn af_masks_low_nibble_of_f() {
        let mut regs = Registers::default();
        regs.set_af(0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f, 0xF0);
        assert_eq!(regs.af(), 0x12F0);
    }

    #[test]
    fn sp_pair_is_independent_of_hl() {
        let mut regs = Registers::default();
        regs.set16(Reg16::SP, 0xBEEF);
        regs.set16(Reg16::HL, 0x1234);
        assert_eq!(regs.sp, 0xBEEF);
        assert_eq!(regs.get16(Reg16::HL), 0x1234);
    }

    proptest! {
        #[test]
        fn pairs_are_views_over_halves(hi in any::<u8>(), lo in any::<u8>(), start in any::<u16>()) {
            let mut regs = Registers::default();

            regs.set_bc(start);
            regs.b = hi;
            prop_assert_eq!(regs.bc(), u16::from_be_bytes([hi, start as u8]));
            regs.c = lo;
            prop_assert_eq!(regs.bc(), u16::from_be_bytes([hi, lo]));

            regs.set_de(start);
            regs.d = hi;
            prop_assert_eq!(regs.de(), u16::from_be_bytes([hi, start as u8]));
            regs.e = lo;
            prop_assert_eq!(regs.de(), u16::from_be_bytes([hi, lo]));

            regs.set_hl(start);
            regs.h = hi;
            prop_assert_eq!(regs.hl(), u16::from_be_bytes([hi, start as u8]));
            regs.l = lo;
            prop_assert_eq!(regs.hl(), u16::from_be_bytes([hi, lo]));
        }

        #[test]
        fn writing_a_pair_updates_both_halves(value in any::<u16>()) {
            let mut regs = Registers::default();
            regs.set16(Reg16::DE, value);
            let [d, e] = value.to_be_bytes();
            prop_assert_eq!(regs.get8(Reg8::D), d);
            prop_assert_eq!(regs.get8(Reg8::E), e);
        }
    }
}
