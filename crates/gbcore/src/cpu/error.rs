/// Conditions reported by the decoder and executor.
///
/// None of these leave the CPU partially mutated: the instruction that raised
/// the error has not touched registers, memory, or PC.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("illegal opcode 0x{opcode:02X} at 0x{address:04X}")]
    IllegalOpcode { opcode: u8, address: u16 },
    #[error("CB prefix at 0x{address:04X} executed without its second byte")]
    UnresolvedPrefix { address: u16 },
}
