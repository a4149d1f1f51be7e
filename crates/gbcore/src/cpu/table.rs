//! Static opcode metadata for the primary and CB-prefixed opcode spaces.
//!
//! Both tables are derived from the standard x/y/z opcode field layout
//! (`x = op >> 6`, `y = (op >> 3) & 7`, `z = op & 7`) and built exactly once.
//! Cycle counts are in T-cycles and follow the documented DMG timing table.

use std::fmt;

use lazy_static::lazy_static;

use super::op::{
    Alu16, Alu8, AluOp, Bits, Cond, Control, Indirect, Load, Op, Operand8, Reg16, Reg8,
    ShiftOp, Special, StackPair,
};

lazy_static! {
    /// Process-wide instruction table, built on first use and never mutated.
    pub static ref INSTRUCTION_SET: InstructionSet = InstructionSet::new();
}

/// Operand order used by the `r` field: B, C, D, E, H, L, (HL), A.
const R8: [Operand8; 8] = [
    Operand8::Reg(Reg8::B),
    Operand8::Reg(Reg8::C),
    Operand8::Reg(Reg8::D),
    Operand8::Reg(Reg8::E),
    Operand8::Reg(Reg8::H),
    Operand8::Reg(Reg8::L),
    Operand8::IndHl,
    Operand8::Reg(Reg8::A),
];

const RP: [Reg16; 4] = [Reg16::BC, Reg16::DE, Reg16::HL, Reg16::SP];
const RP2: [StackPair; 4] = [StackPair::BC, StackPair::DE, StackPair::HL, StackPair::AF];
const IND: [Indirect; 4] = [Indirect::BC, Indirect::DE, Indirect::HlInc, Indirect::HlDec];
const CC: [Cond; 4] = [Cond::NZ, Cond::Z, Cond::NC, Cond::C];

const ALU: [AluOp; 8] = [
    AluOp::Add,
    AluOp::Adc,
    AluOp::Sub,
    AluOp::Sbc,
    AluOp::And,
    AluOp::Xor,
    AluOp::Or,
    AluOp::Cp,
];

const ROT: [ShiftOp; 8] = [
    ShiftOp::Rlc,
    ShiftOp::Rrc,
    ShiftOp::Rl,
    ShiftOp::Rr,
    ShiftOp::Sla,
    ShiftOp::Sra,
    ShiftOp::Swap,
    ShiftOp::Srl,
];

/// Immutable metadata for a single opcode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionDescriptor {
    pub opcode: u8,
    /// True for entries of the CB-prefixed table.
    pub prefixed: bool,
    pub mnemonic: String,
    /// Encoded length in bytes, including the 0xCB prefix when present.
    pub length: u8,
    /// T-cycles taken (or the only cost for unconditional instructions).
    pub cycles: u32,
    /// T-cycles when a conditional branch is not taken.
    pub cycles_not_taken: Option<u32>,
    pub op: Op,
}

impl InstructionDescriptor {
    fn new(opcode: u8, prefixed: bool, op: Op) -> Self {
        let (cycles, cycles_not_taken) = timing(&op);
        Self {
            opcode,
            prefixed,
            mnemonic: op.to_string(),
            length: 1 + prefixed as u8 + op.operand_len(),
            cycles,
            cycles_not_taken,
            op,
        }
    }

    #[inline]
    pub fn is_illegal(&self) -> bool {
        self.op == Op::Illegal
    }

    #[inline]
    pub fn is_prefix(&self) -> bool {
        self.op == Op::Prefix
    }

    /// Number of immediate operand bytes following the opcode.
    #[inline]
    pub fn operand_len(&self) -> u8 {
        self.op.operand_len()
    }
}

impl fmt::Display for InstructionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic)
    }
}

/// The full opcode space: 256 primary entries and 256 CB-prefixed entries.
#[derive(Debug)]
pub struct InstructionSet {
    primary: [InstructionDescriptor; 256],
    cb: [InstructionDescriptor; 256],
}

impl Default for InstructionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionSet {
    pub fn new() -> Self {
        let primary = std::array::from_fn(|i| {
            InstructionDescriptor::new(i as u8, false, decode_primary(i as u8))
        });
        let cb =
            std::array::from_fn(|i| InstructionDescriptor::new(i as u8, true, decode_cb(i as u8)));
        log::debug!("GB instruction table built (256 primary + 256 CB entries)");
        Self { primary, cb }
    }

    #[inline]
    pub fn lookup(&self, opcode: u8) -> &InstructionDescriptor {
        &self.primary[opcode as usize]
    }

    #[inline]
    pub fn lookup_cb(&self, opcode: u8) -> &InstructionDescriptor {
        &self.cb[opcode as usize]
    }

    pub fn primary(&self) -> impl Iterator<Item = &InstructionDescriptor> {
        self.primary.iter()
    }

    pub fn cb(&self) -> impl Iterator<Item = &InstructionDescriptor> {
        self.cb.iter()
    }
}

fn decode_primary(opcode: u8) -> Op {
    let x = opcode >> 6;
    let y = ((opcode >> 3) & 0x07) as usize;
    let z = opcode & 0x07;
    let p = y >> 1;
    let q = y & 1;

    match x {
        0 => match z {
            0 => match y {
                0 => Op::Special(Special::Nop),
                1 => Op::Load(Load::StoreSp),
                2 => Op::Special(Special::Stop),
                3 => Op::Control(Control::Jr(None)),
                _ => Op::Control(Control::Jr(Some(CC[y - 4]))),
            },
            1 if q == 0 => Op::Load(Load::Ld16(RP[p])),
            1 => Op::Alu16(Alu16::AddHl(RP[p])),
            2 if q == 0 => Op::Load(Load::StoreA(IND[p])),
            2 => Op::Load(Load::LoadA(IND[p])),
            3 if q == 0 => Op::Alu16(Alu16::Inc(RP[p])),
            3 => Op::Alu16(Alu16::Dec(RP[p])),
            4 => Op::Alu8(Alu8::Inc(R8[y])),
            5 => Op::Alu8(Alu8::Dec(R8[y])),
            6 => Op::Load(Load::Ld8 {
                dst: R8[y],
                src: Operand8::Imm8,
            }),
            _ => match y {
                0..=3 => Op::Bits(Bits::RotateA(ROT[y])),
                4 => Op::Special(Special::Daa),
                5 => Op::Special(Special::Cpl),
                6 => Op::Special(Special::Scf),
                _ => Op::Special(Special::Ccf),
            },
        },
        1 if opcode == 0x76 => Op::Special(Special::Halt),
        1 => Op::Load(Load::Ld8 {
            dst: R8[y],
            src: R8[z as usize],
        }),
        2 => Op::Alu8(Alu8::Arith(ALU[y], R8[z as usize])),
        _ => match z {
            0 => match y {
                0..=3 => Op::Control(Control::Ret(Some(CC[y]))),
                4 => Op::Load(Load::StoreHigh),
                5 => Op::Alu16(Alu16::AddSp),
                6 => Op::Load(Load::LoadHigh),
                _ => Op::Alu16(Alu16::LdHlSp),
            },
            1 if q == 0 => Op::Load(Load::Pop(RP2[p])),
            1 => match p {
                0 => Op::Control(Control::Ret(None)),
                1 => Op::Control(Control::Reti),
                2 => Op::Control(Control::JpHl),
                _ => Op::Load(Load::SpFromHl),
            },
            2 => match y {
                0..=3 => Op::Control(Control::Jp(Some(CC[y]))),
                4 => Op::Load(Load::StoreHighC),
                5 => Op::Load(Load::StoreA16),
                6 => Op::Load(Load::LoadHighC),
                _ => Op::Load(Load::LoadA16),
            },
            3 => match y {
                0 => Op::Control(Control::Jp(None)),
                1 => Op::Prefix,
                6 => Op::Special(Special::Di),
                7 => Op::Special(Special::Ei),
                _ => Op::Illegal,
            },
            4 => match y {
                0..=3 => Op::Control(Control::Call(Some(CC[y]))),
                _ => Op::Illegal,
            },
            5 if q == 0 => Op::Load(Load::Push(RP2[p])),
            5 if p == 0 => Op::Control(Control::Call(None)),
            5 => Op::Illegal,
            6 => Op::Alu8(Alu8::Arith(ALU[y], Operand8::Imm8)),
            _ => Op::Control(Control::Rst((y as u8) * 8)),
        },
    }
}

fn decode_cb(opcode: u8) -> Op {
    let y = (opcode >> 3) & 0x07;
    let target = R8[(opcode & 0x07) as usize];

    match opcode >> 6 {
        0 => Op::Bits(Bits::Shift(ROT[y as usize], target)),
        1 => Op::Bits(Bits::Bit(y, target)),
        2 => Op::Bits(Bits::Res(y, target)),
        _ => Op::Bits(Bits::Set(y, target)),
    }
}

/// Extra cost of an operand slot: (HL) and d8 each add one memory cycle.
fn operand_cost(operand: Operand8) -> u32 {
    match operand {
        Operand8::Reg(_) => 0,
        Operand8::IndHl | Operand8::Imm8 => 4,
    }
}

/// Base cost and not-taken cost for an instruction kind.
fn timing(op: &Op) -> (u32, Option<u32>) {
    let cycles = match op {
        Op::Load(load) => match load {
            Load::Ld8 { dst, src } => 4 + operand_cost(*dst) + operand_cost(*src),
            Load::Ld16(_) => 12,
            Load::StoreA(_) | Load::LoadA(_) => 8,
            Load::StoreSp => 20,
            Load::StoreHigh | Load::LoadHigh => 12,
            Load::StoreHighC | Load::LoadHighC => 8,
            Load::StoreA16 | Load::LoadA16 => 16,
            Load::SpFromHl => 8,
            Load::Push(_) => 16,
            Load::Pop(_) => 12,
        },
        Op::Alu8(alu) => match alu {
            Alu8::Arith(_, src) => 4 + operand_cost(*src),
            Alu8::Inc(Operand8::IndHl) | Alu8::Dec(Operand8::IndHl) => 12,
            Alu8::Inc(_) | Alu8::Dec(_) => 4,
        },
        Op::Alu16(alu) => match alu {
            Alu16::Inc(_) | Alu16::Dec(_) | Alu16::AddHl(_) => 8,
            Alu16::AddSp => 16,
            Alu16::LdHlSp => 12,
        },
        Op::Bits(bits) => match bits {
            Bits::RotateA(_) => 4,
            Bits::Bit(_, Operand8::IndHl) => 12,
            Bits::Shift(_, Operand8::IndHl)
            | Bits::Res(_, Operand8::IndHl)
            | Bits::Set(_, Operand8::IndHl) => 16,
            Bits::Shift(..) | Bits::Bit(..) | Bits::Res(..) | Bits::Set(..) => 8,
        },
        Op::Control(control) => {
            return match control {
                Control::Jr(None) => (12, None),
                Control::Jr(Some(_)) => (12, Some(8)),
                Control::Jp(None) => (16, None),
                Control::Jp(Some(_)) => (16, Some(12)),
                Control::JpHl => (4, None),
                Control::Call(None) => (24, None),
                Control::Call(Some(_)) => (24, Some(12)),
                Control::Ret(None) => (16, None),
                Control::Ret(Some(_)) => (20, Some(8)),
                Control::Reti | Control::Rst(_) => (16, None),
            }
        }
        Op::Special(_) | Op::Prefix | Op::Illegal => 4,
    };
    (cycles, None)
}
