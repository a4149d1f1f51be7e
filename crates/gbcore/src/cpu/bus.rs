use bitflags::bitflags;

/// Interrupt enable register address (IE).
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt flag register address (IF).
pub const IF_ADDR: u16 = 0xFF0F;

bitflags! {
    /// Bit layout shared by IE and IF. Bit 0 has the highest priority.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

/// A single interrupt source, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    /// Highest-priority source in `pending`, if any.
    pub fn highest_priority(pending: InterruptFlags) -> Option<Self> {
        match pending.bits().trailing_zeros() {
            0 => Some(Interrupt::VBlank),
            1 => Some(Interrupt::LcdStat),
            2 => Some(Interrupt::Timer),
            3 => Some(Interrupt::Serial),
            4 => Some(Interrupt::Joypad),
            _ => None,
        }
    }

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(1 << self as u8)
    }

    /// Fixed dispatch address: 0x40, 0x48, 0x50, 0x58, 0x60.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }
}

/// Abstraction over the Game Boy bus (memory and IO).
///
/// Every address in 0x0000..=0xFFFF must yield a defined value; open-bus
/// behaviour, banking and IO side effects are the implementor's business.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Current interrupt-enable mask.
    ///
    /// The default reads IE at `$FFFF`; buses that keep the interrupt
    /// controller outside the address space can override it.
    fn interrupt_enable(&mut self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.read8(IE_ADDR))
    }

    /// Current interrupt-request mask (IF at `$FF0F` by default).
    fn interrupt_flag(&mut self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.read8(IF_ADDR))
    }

    /// Clear the request bit of an interrupt that is being serviced.
    fn acknowledge_interrupt(&mut self, interrupt: Interrupt) {
        let iflags = self.read8(IF_ADDR) & !interrupt.flag().bits();
        self.write8(IF_ADDR, iflags);
    }

    /// Hook that finalises a single CPU step (instruction, idle step, or
    /// interrupt entry) from the bus's point of view.
    ///
    /// `cycles` is the total number of T-cycles the step consumed. Buses
    /// that drive timers or video advance them here, strictly after the
    /// instruction's own memory effects. The default does nothing.
    fn end_instruction(&mut self, _cycles: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_follow_priority_order() {
        assert_eq!(Interrupt::VBlank.vector(), 0x40);
        assert_eq!(Interrupt::LcdStat.vector(), 0x48);
        assert_eq!(Interrupt::Timer.vector(), 0x50);
        assert_eq!(Interrupt::Serial.vector(), 0x58);
        assert_eq!(Interrupt::Joypad.vector(), 0x60);
    }

    #[test]
    fn lowest_bit_wins() {
        let pending = InterruptFlags::TIMER | InterruptFlags::JOYPAD;
        assert_eq!(Interrupt::highest_priority(pending), Some(Interrupt::Timer));
        assert_eq!(Interrupt::highest_priority(InterruptFlags::empty()), None);
        assert_eq!(Interrupt::Serial.flag(), InterruptFlags::SERIAL);
    }
}
