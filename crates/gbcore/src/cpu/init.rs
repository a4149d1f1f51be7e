use super::{Cpu, Decoder, InstructionSet, Registers, INSTRUCTION_SET};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A CPU in the DMG post-boot state, decoding through the shared table.
    pub fn new() -> Self {
        Self::with_table(&INSTRUCTION_SET)
    }

    /// A CPU decoding through a caller-provided table.
    pub fn with_table(table: &'static InstructionSet) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            halt_bug: false,
            ime_countdown: 0,
            decoder: Decoder::new(table),
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset to the state the DMG boot ROM leaves behind at 0x0100.
    pub fn reset(&mut self) {
        self.halted = false;
        self.stopped = false;
        self.halt_bug = false;
        self.ime_countdown = 0;
        self.apply_dmg_boot_state();
    }

    /// Register values after the DMG boot ROM hands control to cartridge
    /// code (Pan Docs, "Power Up Sequence").
    fn apply_dmg_boot_state(&mut self) {
        self.regs = Registers {
            a: 0x01,
            f: 0xB0,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        };
        // IME is clear at 0x0100; the program enables interrupts itself.
        self.ime = false;
    }
}
