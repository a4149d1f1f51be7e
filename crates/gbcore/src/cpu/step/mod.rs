mod instruction;

use super::{Bus, Cpu, CpuError, Execution, IDLE_CYCLES};

impl Cpu {
    /// Advance the CPU by one step and return what it consumed.
    ///
    /// A step is one of: an interrupt dispatch, an idle HALT slot (4 cycles),
    /// an idle STOP slot (0 cycles), or one decoded and executed instruction.
    /// After the step completes the bus is told how many T-cycles elapsed via
    /// `Bus::end_instruction`; the returned cost is always the same number.
    ///
    /// An illegal opcode is reported without mutating anything; PC keeps
    /// pointing at it, and the caller decides whether to stop or skip.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Execution, CpuError> {
        if self.stopped {
            // STOP freezes the system clock: no time passes for anyone.
            bus.end_instruction(0);
            return Ok(Execution::cycles(0));
        }

        if let Some(dispatch) = self.service_interrupt(bus) {
            bus.end_instruction(dispatch.cycles);
            return Ok(dispatch);
        }

        if self.halted {
            bus.end_instruction(IDLE_CYCLES);
            return Ok(Execution::cycles(IDLE_CYCLES));
        }

        let execution = self.step_instruction(bus)?;
        bus.end_instruction(execution.cycles);
        Ok(execution)
    }
}
