use super::super::{Bus, Cpu, InterruptFlags};

impl Cpu {
    /// Interrupts that are both requested (IF) and enabled (IE).
    #[inline]
    pub(in crate::cpu) fn pending_interrupts<B: Bus>(&self, bus: &mut B) -> InterruptFlags {
        bus.interrupt_enable() & bus.interrupt_flag()
    }
}
