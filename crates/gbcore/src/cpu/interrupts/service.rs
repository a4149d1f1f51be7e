use super::super::{Bus, Cpu, Execution, Interrupt, INTERRUPT_DISPATCH_CYCLES};

impl Cpu {
    /// Dispatch the highest-priority pending interrupt if IME allows it.
    ///
    /// Returns the dispatch cost, or `None` when nothing was serviced. Any
    /// pending interrupt wakes the CPU from HALT even with IME clear; in
    /// that case execution simply resumes after the HALT. STOP ignores
    /// interrupts entirely.
    ///
    /// Entry sequence: IME is cleared, the return address is pushed, the IF bit is
    /// acknowledged and PC jumps to the vector, for a fixed 20 T-cycles.
    pub fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<Execution> {
        if self.stopped {
            return None;
        }

        let pending = self.pending_interrupts(bus);
        let interrupt = Interrupt::highest_priority(pending)?;

        if !self.ime {
            if self.halted {
                log::trace!("GB CPU woke from HALT with IME=0 ({interrupt:?} pending)");
                self.halted = false;
            }
            return None;
        }

        self.ime = false;
        self.halted = false;

        // HALT bug with an interrupt already due (EI; HALT): the handler
        // returns to the HALT itself and the doubled fetch never happens.
        let pc = if self.halt_bug {
            self.halt_bug = false;
            self.regs.pc.wrapping_sub(1)
        } else {
            self.regs.pc
        };
        self.push_u16(bus, pc);
        bus.acknowledge_interrupt(interrupt);
        self.regs.pc = interrupt.vector();

        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} pending=0x{:02X}",
            interrupt,
            interrupt.vector(),
            pc,
            self.regs.sp,
            pending.bits(),
        );

        Some(Execution {
            cycles: INTERRUPT_DISPATCH_CYCLES,
            interrupt: Some(interrupt),
        })
    }
}
