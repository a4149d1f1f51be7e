use super::super::{Bus, Cpu, CpuError, Execution};

impl Cpu {
    /// Decode and execute the instruction at PC, ignoring interrupts and
    /// HALT/STOP state.
    ///
    /// `step` is the usual entry point; this is exposed for hosts that
    /// schedule interrupt dispatch themselves via `service_interrupt`.
    pub fn step_instruction<B: Bus>(&mut self, bus: &mut B) -> Result<Execution, CpuError> {
        let mut pc = self.regs.pc;
        let decoded = if self.halt_bug {
            self.decoder.decode_with_halt_bug(bus, &mut pc)
        } else {
            self.decoder.decode(bus, &mut pc)
        };

        let instr = decoded.map_err(|err| {
            log::error!(
                "GB CPU {err} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
            err
        })?;
        log::trace!("{instr}");

        self.halt_bug = false;
        self.regs.pc = pc;
        self.execute(bus, &instr)
    }
}
