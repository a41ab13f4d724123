use std::fmt;

/// 8-bit operand in the standard register order used by opcode tables:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory-indirect through HL.
    HlMem,
    A,
}

impl Reg8 {
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Reg8::B,
            1 => Reg8::C,
            2 => Reg8::D,
            3 => Reg8::E,
            4 => Reg8::H,
            5 => Reg8::L,
            6 => Reg8::HlMem,
            _ => Reg8::A,
        }
    }

    #[inline]
    pub const fn is_memory(self) -> bool {
        matches!(self, Reg8::HlMem)
    }

    const fn name(self) -> &'static str {
        match self {
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
            Reg8::HlMem => "(HL)",
            Reg8::A => "A",
        }
    }
}

/// Register pairs addressed by the `rp` field (bits 4–5) of 16-bit
/// load/inc/dec/add opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => Reg16::SP,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        }
    }
}

/// Register pairs addressed by PUSH/POP, where slot 3 is AF instead of SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackPair {
    BC,
    DE,
    HL,
    AF,
}

impl StackPair {
    const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => StackPair::BC,
            1 => StackPair::DE,
            2 => StackPair::HL,
            _ => StackPair::AF,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            StackPair::BC => "BC",
            StackPair::DE => "DE",
            StackPair::HL => "HL",
            StackPair::AF => "AF",
        }
    }
}

/// Address source for `LD (rr),A` / `LD A,(rr)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indirect {
    BC,
    DE,
    /// (HL+): post-increment HL.
    HlInc,
    /// (HL-): post-decrement HL.
    HlDec,
}

impl Indirect {
    const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Indirect::BC,
            1 => Indirect::DE,
            2 => Indirect::HlInc,
            _ => Indirect::HlDec,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Indirect::BC => "(BC)",
            Indirect::DE => "(DE)",
            Indirect::HlInc => "(HL+)",
            Indirect::HlDec => "(HL-)",
        }
    }
}

/// Branch conditions: NZ, Z, NC, C.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

impl Condition {
    const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NotCarry,
            _ => Condition::Carry,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Condition::NotZero => "NZ",
            Condition::Zero => "Z",
            Condition::NotCarry => "NC",
            Condition::Carry => "C",
        }
    }
}

/// Accumulator ALU operations, in opcode order (bits 3–5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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

impl AluOp {
    const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            AluOp::Add => "ADD A,",
            AluOp::Adc => "ADC A,",
            AluOp::Sub => "SUB ",
            AluOp::Sbc => "SBC A,",
            AluOp::And => "AND ",
            AluOp::Xor => "XOR ",
            AluOp::Or => "OR ",
            AluOp::Cp => "CP ",
        }
    }
}

/// Unprefixed accumulator rotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotate {
    Rlca,
    Rrca,
    Rla,
    Rra,
}

impl Rotate {
    const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Rotate::Rlca,
            1 => Rotate::Rrca,
            2 => Rotate::Rla,
            _ => Rotate::Rra,
        }
    }
}

/// One decoded primary opcode.
///
/// Every byte value maps to exactly one variant; the eleven opcode holes
/// decode to [`Instruction::Illegal`], which executes as a one-cycle no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,

    /// LD rr,d16
    LdRrD16(Reg16),
    /// LD (rr),A
    LdIndirectA(Indirect),
    /// LD A,(rr)
    LdAIndirect(Indirect),
    /// LD r,d8
    LdRD8(Reg8),
    /// LD r,r'
    LdRR { dst: Reg8, src: Reg8 },
    /// LD (a16),SP
    LdA16Sp,
    /// LDH (a8),A
    LdhA8A,
    /// LDH A,(a8)
    LdhAA8,
    /// LD (C),A
    LdhCA,
    /// LD A,(C)
    LdhAC,
    /// LD (a16),A
    LdA16A,
    /// LD A,(a16)
    LdAA16,
    /// LD HL,SP+r8
    LdHlSpR8,
    /// LD SP,HL
    LdSpHl,

    IncR(Reg8),
    DecR(Reg8),
    IncRr(Reg16),
    DecRr(Reg16),

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r
    Alu(AluOp, Reg8),
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,d8
    AluImm(AluOp),
    /// ADD HL,rr
    AddHlRr(Reg16),
    /// ADD SP,r8
    AddSpR8,
    RotateA(Rotate),
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jr,
    JrCond(Condition),
    Jp,
    JpCond(Condition),
    JpHl,
    Call,
    CallCond(Condition),
    Ret,
    RetCond(Condition),
    Reti,
    /// RST to one of the eight fixed vectors 0x00..=0x38.
    Rst(u8),
    Push(StackPair),
    Pop(StackPair),

    /// 0xCB: the next byte selects a rotate/shift/bit instruction.
    Prefix,
    /// Unassigned opcode; executes as a one-cycle no-op.
    Illegal(u8),
}

/// Decode one primary opcode.
///
/// Uses the usual `x`/`y`/`z` field split (bits 6–7, 3–5, 0–2) with `p`/`q`
/// (bits 4–5 and bit 3) for the register-pair groups.
pub const fn decode(opcode: u8) -> Instruction {
    let x = opcode >> 6;
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = y >> 1;
    let q = y & 0x01;

    match x {
        0 => match z {
            0 => match y {
                0 => Instruction::Nop,
                1 => Instruction::LdA16Sp,
                2 => Instruction::Stop,
                3 => Instruction::Jr,
                _ => Instruction::JrCond(Condition::from_index(y - 4)),
            },
            1 => {
                if q == 0 {
                    Instruction::LdRrD16(Reg16::from_index(p))
                } else {
                    Instruction::AddHlRr(Reg16::from_index(p))
                }
            }
            2 => {
                if q == 0 {
                    Instruction::LdIndirectA(Indirect::from_index(p))
                } else {
                    Instruction::LdAIndirect(Indirect::from_index(p))
                }
            }
            3 => {
                if q == 0 {
                    Instruction::IncRr(Reg16::from_index(p))
                } else {
                    Instruction::DecRr(Reg16::from_index(p))
                }
            }
            4 => Instruction::IncR(Reg8::from_index(y)),
            5 => Instruction::DecR(Reg8::from_index(y)),
            6 => Instruction::LdRD8(Reg8::from_index(y)),
            _ => match y {
                0..=3 => Instruction::RotateA(Rotate::from_index(y)),
                4 => Instruction::Daa,
                5 => Instruction::Cpl,
                6 => Instruction::Scf,
                _ => Instruction::Ccf,
            },
        },
        1 => {
            if opcode == 0x76 {
                Instruction::Halt
            } else {
                Instruction::LdRR {
                    dst: Reg8::from_index(y),
                    src: Reg8::from_index(z),
                }
            }
        }
        2 => Instruction::Alu(AluOp::from_index(y), Reg8::from_index(z)),
        _ => match z {
            0 => match y {
                0..=3 => Instruction::RetCond(Condition::from_index(y)),
                4 => Instruction::LdhA8A,
                5 => Instruction::AddSpR8,
                6 => Instruction::LdhAA8,
                _ => Instruction::LdHlSpR8,
            },
            1 => {
                if q == 0 {
                    Instruction::Pop(StackPair::from_index(p))
                } else {
                    match p {
                        0 => Instruction::Ret,
                        1 => Instruction::Reti,
                        2 => Instruction::JpHl,
                        _ => Instruction::LdSpHl,
                    }
                }
            }
            2 => match y {
                0..=3 => Instruction::JpCond(Condition::from_index(y)),
                4 => Instruction::LdhCA,
                5 => Instruction::LdA16A,
                6 => Instruction::LdhAC,
                _ => Instruction::LdAA16,
            },
            3 => match y {
                0 => Instruction::Jp,
                1 => Instruction::Prefix,
                6 => Instruction::Di,
                7 => Instruction::Ei,
                _ => Instruction::Illegal(opcode),
            },
            4 => match y {
                0..=3 => Instruction::CallCond(Condition::from_index(y)),
                _ => Instruction::Illegal(opcode),
            },
            5 => {
                if q == 0 {
                    Instruction::Push(StackPair::from_index(p))
                } else if p == 0 {
                    Instruction::Call
                } else {
                    Instruction::Illegal(opcode)
                }
            }
            6 => Instruction::AluImm(AluOp::from_index(y)),
            _ => Instruction::Rst(y * 8),
        },
    }
}

const fn build_dispatch_table() -> [Instruction; 256] {
    let mut table = [Instruction::Nop; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode(i as u8);
        i += 1;
    }
    table
}

/// Opcode → instruction, computed once at compile time.
pub static DISPATCH_TABLE: [Instruction; 256] = build_dispatch_table();

#[inline]
pub fn dispatch(opcode: u8) -> Instruction {
    DISPATCH_TABLE[opcode as usize]
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Nop => write!(f, "NOP"),
            Instruction::Stop => write!(f, "STOP"),
            Instruction::Halt => write!(f, "HALT"),
            Instruction::Di => write!(f, "DI"),
            Instruction::Ei => write!(f, "EI"),
            Instruction::LdRrD16(rr) => write!(f, "LD {},d16", rr.name()),
            Instruction::LdIndirectA(ind) => write!(f, "LD {},A", ind.name()),
            Instruction::LdAIndirect(ind) => write!(f, "LD A,{}", ind.name()),
            Instruction::LdRD8(r) => write!(f, "LD {},d8", r.name()),
            Instruction::LdRR { dst, src } => write!(f, "LD {},{}", dst.name(), src.name()),
            Instruction::LdA16Sp => write!(f, "LD (a16),SP"),
            Instruction::LdhA8A => write!(f, "LDH (a8),A"),
            Instruction::LdhAA8 => write!(f, "LDH A,(a8)"),
            Instruction::LdhCA => write!(f, "LD (C),A"),
            Instruction::LdhAC => write!(f, "LD A,(C)"),
            Instruction::LdA16A => write!(f, "LD (a16),A"),
            Instruction::LdAA16 => write!(f, "LD A,(a16)"),
            Instruction::LdHlSpR8 => write!(f, "LD HL,SP+r8"),
            Instruction::LdSpHl => write!(f, "LD SP,HL"),
            Instruction::IncR(r) => write!(f, "INC {}", r.name()),
            Instruction::DecR(r) => write!(f, "DEC {}", r.name()),
            Instruction::IncRr(rr) => write!(f, "INC {}", rr.name()),
            Instruction::DecRr(rr) => write!(f, "DEC {}", rr.name()),
            Instruction::Alu(op, r) => write!(f, "{}{}", op.name(), r.name()),
            Instruction::AluImm(op) => write!(f, "{}d8", op.name()),
            Instruction::AddHlRr(rr) => write!(f, "ADD HL,{}", rr.name()),
            Instruction::AddSpR8 => write!(f, "ADD SP,r8"),
            Instruction::RotateA(Rotate::Rlca) => write!(f, "RLCA"),
            Instruction::RotateA(Rotate::Rrca) => write!(f, "RRCA"),
            Instruction::RotateA(Rotate::Rla) => write!(f, "RLA"),
            Instruction::RotateA(Rotate::Rra) => write!(f, "RRA"),
            Instruction::Daa => write!(f, "DAA"),
            Instruction::Cpl => write!(f, "CPL"),
            Instruction::Scf => write!(f, "SCF"),
            Instruction::Ccf => write!(f, "CCF"),
            Instruction::Jr => write!(f, "JR r8"),
            Instruction::JrCond(cc) => write!(f, "JR {},r8", cc.name()),
            Instruction::Jp => write!(f, "JP a16"),
            Instruction::JpCond(cc) => write!(f, "JP {},a16", cc.name()),
            Instruction::JpHl => write!(f, "JP HL"),
            Instruction::Call => write!(f, "CALL a16"),
            Instruction::CallCond(cc) => write!(f, "CALL {},a16", cc.name()),
            Instruction::Ret => write!(f, "RET"),
            Instruction::RetCond(cc) => write!(f, "RET {}", cc.name()),
            Instruction::Reti => write!(f, "RETI"),
            Instruction::Rst(vector) => write!(f, "RST {vector:02X}H"),
            Instruction::Push(pair) => write!(f, "PUSH {}", pair.name()),
            Instruction::Pop(pair) => write!(f, "POP {}", pair.name()),
            Instruction::Prefix => write!(f, "PREFIX CB"),
            Instruction::Illegal(opcode) => write!(f, "ILLEGAL 0x{opcode:02X}"),
        }
    }
}
