use super::{AluOp, Cpu, Flag};

impl Cpu {
    /// 8-bit ADD. Z from the result, N=0, H on carry out of bit 3, C on
    /// carry out of bit 7.
    pub fn add8(&mut self, a: u8, b: u8) -> u8 {
        self.add8_with_carry(a, b, 0)
    }

    /// 8-bit ADC: ADD plus the incoming carry, with H/C computed on the
    /// three-way sum.
    pub fn adc8(&mut self, a: u8, b: u8) -> u8 {
        let carry_in = self.flag(Flag::C) as u8;
        self.add8_with_carry(a, b, carry_in)
    }

    fn add8_with_carry(&mut self, a: u8, b: u8, carry_in: u8) -> u8 {
        let half = (a & 0x0F) + (b & 0x0F) + carry_in;
        let full = (a as u16) + (b as u16) + (carry_in as u16);
        let result = full as u8;

        self.regs.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, half > 0x0F);
        self.set_flag(Flag::C, full > 0xFF);
        result
    }

    /// 8-bit SUB. N=1, H on borrow from bit 4, C on borrow from bit 8.
    pub fn sub8(&mut self, a: u8, b: u8) -> u8 {
        self.sub8_with_carry(a, b, 0)
    }

    /// 8-bit SBC: SUB with the incoming carry as an extra borrow.
    pub fn sbc8(&mut self, a: u8, b: u8) -> u8 {
        let carry_in = self.flag(Flag::C) as u8;
        self.sub8_with_carry(a, b, carry_in)
    }

    fn sub8_with_carry(&mut self, a: u8, b: u8, carry_in: u8) -> u8 {
        let half = (a & 0x0F) as i16 - (b & 0x0F) as i16 - carry_in as i16;
        let full = a as i16 - b as i16 - carry_in as i16;
        let result = full as u8;

        self.regs.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half < 0);
        self.set_flag(Flag::C, full < 0);
        result
    }

    /// Compare: flags as for `sub8(a, b)`, result discarded.
    #[inline]
    pub fn cp8(&mut self, a: u8, b: u8) {
        self.sub8(a, b);
    }

    #[inline]
    pub fn and8(&mut self, a: u8, b: u8) -> u8 {
        let result = a & b;
        self.regs.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
        // N and C are already cleared.
        result
    }

    #[inline]
    pub fn or8(&mut self, a: u8, b: u8) -> u8 {
        let result = a | b;
        self.regs.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        result
    }

    #[inline]
    pub fn xor8(&mut self, a: u8, b: u8) -> u8 {
        let result = a ^ b;
        self.regs.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        result
    }

    /// 8-bit increment used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub fn inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub fn dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H and C come from bits 11 and 15.
    #[inline]
    pub fn add16(&mut self, a: u16, b: u16) -> u16 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, (a as u32) + (b as u32) > 0xFFFF);
        a.wrapping_add(b)
    }

    /// Add a signed 8-bit displacement to a 16-bit base, as done by
    /// `ADD SP,r8` and `LD HL,SP+r8`.
    ///
    /// The result uses the sign-extended displacement, but H and C are
    /// computed from the unsigned low nibble / low byte of `base + imm8`.
    /// Z and N are always cleared.
    #[inline]
    pub fn add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.regs.clear_flags();
        self.set_flag(Flag::H, (base & 0x000F) + (imm8 as u16 & 0x000F) > 0x000F);
        self.set_flag(Flag::C, (base & 0x00FF) + (imm8 as u16) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// Uses C, H, N and A to pick the correction; updates A, Z, H, C and
    /// leaves N unchanged.
    pub fn daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.flag(Flag::C) { 0x60 } else { 0x00 };
        if self.flag(Flag::H) {
            adjust |= 0x06;
        }

        if !self.flag(Flag::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, a == 0);
        self.regs.a = a;
    }

    /// Apply one of the eight accumulator operations with `value` as the
    /// right-hand operand.
    pub(super) fn alu_a(&mut self, op: AluOp, value: u8) {
        let a = self.regs.a;
        match op {
            AluOp::Add => self.regs.a = self.add8(a, value),
            AluOp::Adc => self.regs.a = self.adc8(a, value),
            AluOp::Sub => self.regs.a = self.sub8(a, value),
            AluOp::Sbc => self.regs.a = self.sbc8(a, value),
            AluOp::And => self.regs.a = self.and8(a, value),
            AluOp::Xor => self.regs.a = self.xor8(a, value),
            AluOp::Or => self.regs.a = self.or8(a, value),
            AluOp::Cp => self.cp8(a, value),
        }
    }
}
