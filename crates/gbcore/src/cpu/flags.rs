use super::Cpu;

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Unpacked view of the four condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlagState {
    pub z: bool,
    pub n: bool,
    pub h: bool,
    pub c: bool,
}

impl FlagState {
    pub fn pack(self) -> u8 {
        let mut f = 0u8;
        if self.z {
            f |= Flag::Z.mask();
        }
        if self.n {
            f |= Flag::N.mask();
        }
        if self.h {
            f |= Flag::H.mask();
        }
        if self.c {
            f |= Flag::C.mask();
        }
        f
    }

    /// The low nibble is ignored.
    pub fn unpack(value: u8) -> Self {
        Self {
            z: value & Flag::Z.mask() != 0,
            n: value & Flag::N.mask() != 0,
            h: value & Flag::H.mask() != 0,
            c: value & Flag::C.mask() != 0,
        }
    }
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.regs.f & flag.mask()) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= flag.mask();
        } else {
            self.regs.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    #[inline]
    pub fn flags(&self) -> FlagState {
        FlagState::unpack(self.regs.f)
    }

    #[inline]
    pub fn set_flags(&mut self, flags: FlagState) {
        self.regs.f = flags.pack();
    }
}
