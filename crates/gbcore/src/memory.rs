//! A flat 64 KiB bus for running test programs against the CPU core.
//!
//! No banking, no IO side effects beyond a minimal serial port: test ROMs
//! report results by writing a byte to SB and starting a transfer on SC,
//! which is all that is modelled here.

use crate::cpu::Bus;

const MEMORY_SIZE: usize = 0x10000;

/// Serial transfer data register.
pub const SB_ADDR: u16 = 0xFF01;
/// Serial transfer control register.
pub const SC_ADDR: u16 = 0xFF02;

#[derive(Clone, Debug, Default)]
struct Serial {
    output: Vec<u8>,
}

impl Serial {
    /// A transfer starts when SC has both the start bit and the internal
    /// clock bit set; it completes immediately.
    fn write_sc(&mut self, sb: u8, sc: u8) -> u8 {
        if sc & 0x81 == 0x81 {
            self.output.push(sb);
            return sc & !0x80;
        }
        sc
    }
}

/// Plain RAM covering the whole address space.
#[derive(Clone)]
pub struct FlatMemory {
    memory: Box<[u8; MEMORY_SIZE]>,
    serial: Serial,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("serial_output", &self.serial.output.len())
            .finish_non_exhaustive()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            memory: Box::new([0; MEMORY_SIZE]),
            serial: Serial::default(),
        }
    }

    /// Copy `bytes` into memory starting at `addr`, wrapping past 0xFFFF.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut cursor = addr;
        for byte in bytes {
            self.memory[cursor as usize] = *byte;
            cursor = cursor.wrapping_add(1);
        }
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.serial.output
    }

    pub fn take_serial_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.serial.output)
    }
}

impl Bus for FlatMemory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        let value = if addr == SC_ADDR {
            let sb = self.memory[SB_ADDR as usize];
            self.serial.write_sc(sb, value)
        } else {
            value
        };
        self.memory[addr as usize] = value;
    }
}
