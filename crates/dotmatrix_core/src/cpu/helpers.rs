use super::{Bus, Condition, Cpu, Flag, Reg16, Reg8, StackPair};

impl Cpu {
    #[inline]
    pub(super) fn read_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlMem => bus.read8(self.regs.hl()),
            Reg8::A => self.regs.a,
        }
    }

    #[inline]
    pub(super) fn write_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlMem => bus.write8(self.regs.hl(), value),
            Reg8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn read_reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn read_stack_pair(&self, pair: StackPair) -> u16 {
        match pair {
            StackPair::BC => self.regs.bc(),
            StackPair::DE => self.regs.de(),
            StackPair::HL => self.regs.hl(),
            StackPair::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn write_stack_pair(&mut self, pair: StackPair, value: u16) {
        match pair {
            StackPair::BC => self.regs.set_bc(value),
            StackPair::DE => self.regs.set_de(value),
            StackPair::HL => self.regs.set_hl(value),
            // set_af masks the low nibble of F.
            StackPair::AF => self.regs.set_af(value),
        }
    }

    #[inline]
    pub(super) fn condition(&self, cc: Condition) -> bool {
        match cc {
            Condition::NotZero => !self.flag(Flag::Z),
            Condition::Zero => self.flag(Flag::Z),
            Condition::NotCarry => !self.flag(Flag::C),
            Condition::Carry => self.flag(Flag::C),
        }
    }

    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Little-endian 16-bit immediate.
    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        // Stack grows downward: memory[SP+1] = high, memory[SP] = low.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        let hi = bus.read8(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }

    /// Relative jump used by JR/JR cc.
    ///
    /// The displacement is signed and relative to the address following
    /// the operand. Returns 3 cycles when taken, 2 otherwise.
    pub(super) fn jr<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        let offset = self.fetch8(bus) as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            3
        } else {
            2
        }
    }

    /// Absolute jump used by JP/JP cc. 4 cycles taken, 3 not taken.
    pub(super) fn jp_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        let addr = self.fetch16(bus);
        if cond {
            self.regs.pc = addr;
            4
        } else {
            3
        }
    }

    /// Call used by CALL/CALL cc. The pushed return address is the byte
    /// after the 3-byte instruction. 6 cycles taken, 3 not taken.
    pub(super) fn call_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        let addr = self.fetch16(bus);
        if cond {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            6
        } else {
            3
        }
    }

    /// Conditional return used by RET cc. 5 cycles taken, 2 not taken.
    pub(super) fn ret_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        if cond {
            self.regs.pc = self.pop_u16(bus);
            5
        } else {
            2
        }
    }
}
