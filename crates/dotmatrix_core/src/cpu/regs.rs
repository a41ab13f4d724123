use std::fmt;

/// Registers for the Game Boy CPU (LR35902 / SM83).
///
/// The eight 8-bit registers pair up as AF, BC, DE and HL, high byte first.
/// `f` is private so that every write goes through [`Registers::set_f`],
/// which keeps the low nibble clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Register values left behind by the DMG boot ROM when it jumps to
    /// the cartridge entry point at 0x0100.
    pub const fn power_on() -> Self {
        Self {
            a: 0x01,
            f: 0xB0, // Z=1 N=0 H=1 C=1
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        }
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.f
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        // Lower 4 bits of F are always zero.
        self.f = value & 0xF0;
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.set_f(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        (self.f & flag.mask()) != 0
    }

    /// Set or clear a single flag bit, leaving the other three untouched.
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.f |= flag.mask();
        } else {
            self.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.f = 0;
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "AF=0x{:04X} A=0x{:02X} F=0x{:02X}",
            self.af(),
            self.a,
            self.f
        )?;
        writeln!(
            f,
            "BC=0x{:04X} B=0x{:02X} C=0x{:02X}",
            self.bc(),
            self.b,
            self.c
        )?;
        writeln!(
            f,
            "DE=0x{:04X} D=0x{:02X} E=0x{:02X}",
            self.de(),
            self.d,
            self.e
        )?;
        writeln!(
            f,
            "HL=0x{:04X} H=0x{:02X} L=0x{:02X}",
            self.hl(),
            self.h,
            self.l
        )?;
        writeln!(f, "SP=0x{:04X} PC=0x{:04X}", self.sp, self.pc)?;
        write!(
            f,
            "Z={} N={} H={} C={}",
            self.flag(Flag::Z) as u8,
            self.flag(Flag::N) as u8,
            self.flag(Flag::H) as u8,
            self.flag(Flag::C) as u8
        )
    }
}

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}
