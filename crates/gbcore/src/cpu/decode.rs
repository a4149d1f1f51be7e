use std::fmt;

use super::table::{InstructionDescriptor, InstructionSet, INSTRUCTION_SET};
use super::{Bus, CpuError, Op};

/// One decoded instruction: the descriptor plus the operand bytes that
/// followed it in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction<'a> {
    descriptor: &'a InstructionDescriptor,
    operands: [u8; 2],
    address: u16,
}

impl<'a> Instruction<'a> {
    /// Build an occurrence by hand. Bytes beyond the descriptor's operand
    /// count are ignored; missing bytes read as zero.
    pub fn new(descriptor: &'a InstructionDescriptor, operands: &[u8], address: u16) -> Self {
        let mut slots = [0u8; 2];
        for (slot, byte) in slots
            .iter_mut()
            .zip(operands)
            .take(descriptor.operand_len() as usize)
        {
            *slot = *byte;
        }
        Self {
            descriptor,
            operands: slots,
            address,
        }
    }

    #[inline]
    pub fn descriptor(&self) -> &'a InstructionDescriptor {
        self.descriptor
    }

    #[inline]
    pub fn op(&self) -> Op {
        self.descriptor.op
    }

    /// Address of the first byte of the encoding.
    #[inline]
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Bytes consumed by the encoding, prefix included.
    #[inline]
    pub fn length(&self) -> u8 {
        self.descriptor.length
    }

    #[inline]
    pub fn operands(&self) -> &[u8] {
        &self.operands[..self.descriptor.operand_len() as usize]
    }

    #[inline]
    pub fn imm8(&self) -> u8 {
        self.operands[0]
    }

    /// Little-endian 16-bit immediate (low byte first).
    #[inline]
    pub fn imm16(&self) -> u16 {
        u16::from_le_bytes(self.operands)
    }
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}: {}", self.address, self.descriptor)?;
        let operands = self.operands();
        if !operands.is_empty() {
            f.write_str(" [")?;
            for (i, byte) in operands.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{byte:02X}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// Translates memory bytes into [`Instruction`]s. Never executes anything.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'a> {
    table: &'a InstructionSet,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new(&INSTRUCTION_SET)
    }
}

impl<'a> Decoder<'a> {
    pub fn new(table: &'a InstructionSet) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &'a InstructionSet {
        self.table
    }

    /// Decode the instruction at `*pc` and advance `*pc` past its encoding.
    ///
    /// On an illegal opcode `*pc` is left untouched.
    pub fn decode<B: Bus>(&self, bus: &mut B, pc: &mut u16) -> Result<Instruction<'a>, CpuError> {
        self.decode_inner(bus, pc, false)
    }

    /// Decode as the first fetch after a HALT bug: the opcode fetch does not
    /// advance PC, so the opcode byte is read again as the next byte.
    pub fn decode_with_halt_bug<B: Bus>(
        &self,
        bus: &mut B,
        pc: &mut u16,
    ) -> Result<Instruction<'a>, CpuError> {
        self.decode_inner(bus, pc, true)
    }

    fn decode_inner<B: Bus>(
        &self,
        bus: &mut B,
        pc: &mut u16,
        halt_bug: bool,
    ) -> Result<Instruction<'a>, CpuError> {
        let address = *pc;
        let opcode = bus.read8(address);
        let mut cursor = if halt_bug {
            address
        } else {
            address.wrapping_add(1)
        };

        let mut descriptor = self.table.lookup(opcode);
        if descriptor.is_illegal() {
            return Err(CpuError::IllegalOpcode { opcode, address });
        }
        if descriptor.is_prefix() {
            let cb = bus.read8(cursor);
            cursor = cursor.wrapping_add(1);
            descriptor = self.table.lookup_cb(cb);
        }

        let mut operands = [0u8; 2];
        for slot in operands.iter_mut().take(descriptor.operand_len() as usize) {
            *slot = bus.read8(cursor);
            cursor = cursor.wrapping_add(1);
        }

        *pc = cursor;
        Ok(Instruction {
            descriptor,
            operands,
            address,
        })
    }
}
