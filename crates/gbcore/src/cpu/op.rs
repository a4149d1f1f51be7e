//! Instruction kinds and their operand slots.
//!
//! Every opcode in both tables maps onto exactly one [`Op`]. The executor is a
//! single exhaustive match over this type, so adding a kind without executor
//! support is a compile error rather than a silent NOP.

use std::fmt;

/// 8-bit registers addressable by opcode fields (F is never a direct operand).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    A,
}

/// 8-bit operand slot: a register, the byte at (HL), or the d8 immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand8 {
    Reg(Reg8),
    IndHl,
    Imm8,
}

/// 16-bit pairs used by loads and 16-bit arithmetic (`rr`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

/// 16-bit pairs used by PUSH/POP, where AF takes SP's slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackPair {
    BC,
    DE,
    HL,
    AF,
}

/// Address sources for `LD (rr),A` / `LD A,(rr)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indirect {
    BC,
    DE,
    HlInc,
    HlDec,
}

/// Branch conditions evaluated against F at execution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cond {
    NZ,
    Z,
    NC,
    C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// Rotate/shift operations of the CB group. The first four also exist as
/// one-byte accumulator forms (RLCA, RRCA, RLA, RRA).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Load {
    /// `LD r,r'`, `LD r,d8`, `LD r,(HL)`, `LD (HL),r`, `LD (HL),d8`.
    Ld8 { dst: Operand8, src: Operand8 },
    /// `LD rr,d16`.
    Ld16(Reg16),
    /// `LD (rr),A`.
    StoreA(Indirect),
    /// `LD A,(rr)`.
    LoadA(Indirect),
    /// `LD (a16),SP`.
    StoreSp,
    /// `LDH (a8),A`.
    StoreHigh,
    /// `LDH A,(a8)`.
    LoadHigh,
    /// `LD (C),A`.
    StoreHighC,
    /// `LD A,(C)`.
    LoadHighC,
    /// `LD (a16),A`.
    StoreA16,
    /// `LD A,(a16)`.
    LoadA16,
    /// `LD SP,HL`.
    SpFromHl,
    Push(StackPair),
    Pop(StackPair),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alu8 {
    Arith(AluOp, Operand8),
    Inc(Operand8),
    Dec(Operand8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alu16 {
    Inc(Reg16),
    Dec(Reg16),
    AddHl(Reg16),
    /// `ADD SP,r8`.
    AddSp,
    /// `LD HL,SP+r8`.
    LdHlSp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bits {
    /// RLCA / RRCA / RLA / RRA.
    RotateA(ShiftOp),
    Shift(ShiftOp, Operand8),
    Bit(u8, Operand8),
    Res(u8, Operand8),
    Set(u8, Operand8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Jr(Option<Cond>),
    Jp(Option<Cond>),
    JpHl,
    Call(Option<Cond>),
    Ret(Option<Cond>),
    Reti,
    Rst(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Special {
    Nop,
    Halt,
    Stop,
    Di,
    Ei,
    Daa,
    Cpl,
    Scf,
    Ccf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Load(Load),
    Alu8(Alu8),
    Alu16(Alu16),
    Bits(Bits),
    Control(Control),
    Special(Special),
    /// 0xCB in the primary table: the next byte indexes the CB table.
    Prefix,
    /// One of the primary opcode holes.
    Illegal,
}

impl Op {
    /// Number of immediate bytes following the opcode (and prefix).
    pub fn operand_len(&self) -> u8 {
        match self {
            Op::Load(Load::Ld8 {
                src: Operand8::Imm8,
                ..
            })
            | Op::Load(Load::StoreHigh | Load::LoadHigh)
            | Op::Alu8(Alu8::Arith(_, Operand8::Imm8))
            | Op::Alu16(Alu16::AddSp | Alu16::LdHlSp)
            | Op::Control(Control::Jr(_))
            | Op::Special(Special::Stop) => 1,
            Op::Load(
                Load::Ld16(_) | Load::StoreSp | Load::StoreA16 | Load::LoadA16,
            )
            | Op::Control(Control::Jp(_) | Control::Call(_)) => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
            Reg8::A => "A",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Operand8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand8::Reg(reg) => write!(f, "{reg}"),
            Operand8::IndHl => f.write_str("(HL)"),
            Operand8::Imm8 => f.write_str("d8"),
        }
    }
}

impl fmt::Display for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for StackPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackPair::BC => "BC",
            StackPair::DE => "DE",
            StackPair::HL => "HL",
            StackPair::AF => "AF",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indirect::BC => "(BC)",
            Indirect::DE => "(DE)",
            Indirect::HlInc => "(HL+)",
            Indirect::HlDec => "(HL-)",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cond::NZ => "NZ",
            Cond::Z => "Z",
            Cond::NC => "NC",
            Cond::C => "C",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftOp::Rlc => "RLC",
            ShiftOp::Rrc => "RRC",
            ShiftOp::Rl => "RL",
            ShiftOp::Rr => "RR",
            ShiftOp::Sla => "SLA",
            ShiftOp::Sra => "SRA",
            ShiftOp::Swap => "SWAP",
            ShiftOp::Srl => "SRL",
        };
        f.write_str(name)
    }
}

/// Renders `mnemonic` or `mnemonic cc,operand` depending on the condition.
fn write_branch(
    f: &mut fmt::Formatter<'_>,
    mnemonic: &str,
    cond: &Option<Cond>,
    operand: &str,
) -> fmt::Result {
    match cond {
        Some(cc) => write!(f, "{mnemonic} {cc},{operand}"),
        None => write!(f, "{mnemonic} {operand}"),
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Load(load) => match load {
                Load::Ld8 { dst, src } => write!(f, "LD {dst},{src}"),
                Load::Ld16(rr) => write!(f, "LD {rr},d16"),
                Load::StoreA(ind) => write!(f, "LD {ind},A"),
                Load::LoadA(ind) => write!(f, "LD A,{ind}"),
                Load::StoreSp => f.write_str("LD (a16),SP"),
                Load::StoreHigh => f.write_str("LDH (a8),A"),
                Load::LoadHigh => f.write_str("LDH A,(a8)"),
                Load::StoreHighC => f.write_str("LD (C),A"),
                Load::LoadHighC => f.write_str("LD A,(C)"),
                Load::StoreA16 => f.write_str("LD (a16),A"),
                Load::LoadA16 => f.write_str("LD A,(a16)"),
                Load::SpFromHl => f.write_str("LD SP,HL"),
                Load::Push(pair) => write!(f, "PUSH {pair}"),
                Load::Pop(pair) => write!(f, "POP {pair}"),
            },
            Op::Alu8(alu) => match alu {
                Alu8::Arith(op, src) => match op {
                    AluOp::Add => write!(f, "ADD A,{src}"),
                    AluOp::Adc => write!(f, "ADC A,{src}"),
                    AluOp::Sub => write!(f, "SUB {src}"),
                    AluOp::Sbc => write!(f, "SBC A,{src}"),
                    AluOp::And => write!(f, "AND {src}"),
                    AluOp::Xor => write!(f, "XOR {src}"),
                    AluOp::Or => write!(f, "OR {src}"),
                    AluOp::Cp => write!(f, "CP {src}"),
                },
                Alu8::Inc(target) => write!(f, "INC {target}"),
                Alu8::Dec(target) => write!(f, "DEC {target}"),
            },
            Op::Alu16(alu) => match alu {
                Alu16::Inc(rr) => write!(f, "INC {rr}"),
                Alu16::Dec(rr) => write!(f, "DEC {rr}"),
                Alu16::AddHl(rr) => write!(f, "ADD HL,{rr}"),
                Alu16::AddSp => f.write_str("ADD SP,r8"),
                Alu16::LdHlSp => f.write_str("LD HL,SP+r8"),
            },
            Op::Bits(bits) => match bits {
                Bits::RotateA(op) => write!(f, "{op}A"),
                Bits::Shift(op, target) => write!(f, "{op} {target}"),
                Bits::Bit(bit, target) => write!(f, "BIT {bit},{target}"),
                Bits::Res(bit, target) => write!(f, "RES {bit},{target}"),
                Bits::Set(bit, target) => write!(f, "SET {bit},{target}"),
            },
            Op::Control(control) => match control {
                Control::Jr(cond) => write_branch(f, "JR", cond, "r8"),
                Control::Jp(cond) => write_branch(f, "JP", cond, "a16"),
                Control::JpHl => f.write_str("JP (HL)"),
                Control::Call(cond) => write_branch(f, "CALL", cond, "a16"),
                Control::Ret(Some(cc)) => write!(f, "RET {cc}"),
                Control::Ret(None) => f.write_str("RET"),
                Control::Reti => f.write_str("RETI"),
                Control::Rst(vector) => write!(f, "RST {vector:02X}H"),
            },
            Op::Special(special) => {
                let name = match special {
                    Special::Nop => "NOP",
                    Special::Halt => "HALT",
                    Special::Stop => "STOP 0",
                    Special::Di => "DI",
                    Special::Ei => "EI",
                    Special::Daa => "DAA",
                    Special::Cpl => "CPL",
                    Special::Scf => "SCF",
                    Special::Ccf => "CCF",
                };
                f.write_str(name)
            }
            Op::Prefix => f.write_str("PREFIX CB"),
            Op::Illegal => f.write_str("ILLEGAL"),
        }
    }
}
