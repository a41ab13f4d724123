use super::*;

struct TestBus {
    memory: [u8; 0x10000],
    ticks: u64,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
            ticks: 0,
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn tick(&mut self, cycles: u32) {
        self.ticks += u64::from(cycles);
    }
}

/// Fresh CPU at power-on with `program` at PC (0x0100).
fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let _ = env_logger::builder().is_test(true).try_init();
    let cpu = Cpu::new();
    let mut bus = TestBus::default();
    let pc = cpu.regs.pc as usize;
    bus.memory[pc..pc + program.len()].copy_from_slice(program);
    (cpu, bus)
}

fn flags(cpu: &Cpu) -> (bool, bool, bool, bool) {
    (
        cpu.flag(Flag::Z),
        cpu.flag(Flag::N),
        cpu.flag(Flag::H),
        cpu.flag(Flag::C),
    )
}

#[test]
fn f_low_nibble_is_always_zero() {
    let mut regs = Registers::power_on();
    regs.set_f(0xFF);
    assert_eq!(regs.f(), 0xF0);
    regs.set_af(0x12FF);
    assert_eq!(regs.af(), 0x12F0);
    assert_eq!(regs.a, 0x12);
}

#[test]
fn set_flag_leaves_other_bits_alone() {
    let mut regs = Registers::power_on();
    regs.set_f(0x00);
    for flag in [Flag::Z, Flag::N, Flag::H, Flag::C] {
        regs.set_flag(flag, true);
        assert_eq!(regs.f(), flag.mask());
        regs.set_flag(flag, false);
        assert_eq!(regs.f(), 0);
    }
    regs.set_f(0xF0);
    regs.set_flag(Flag::H, false);
    assert_eq!(regs.f(), 0xD0);
}

#[test]
fn register_pairs_are_high_byte_first() {
    let mut regs = Registers::power_on();
    regs.set_bc(0x1234);
    regs.set_de(0x5678);
    regs.set_hl(0x9ABC);
    assert_eq!((regs.b, regs.c), (0x12, 0x34));
    assert_eq!((regs.d, regs.e), (0x56, 0x78));
    assert_eq!((regs.h, regs.l), (0x9A, 0xBC));
}

#[test]
fn add_then_sub_round_trips() {
    let mut cpu = Cpu::new();
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            let sum = cpu.add8(a, b);
            assert_eq!(cpu.flag(Flag::Z), sum == 0);
            assert!(!cpu.flag(Flag::N));
            assert_eq!(cpu.flag(Flag::H), (a & 0x0F) + (b & 0x0F) > 0x0F);
            assert_eq!(cpu.flag(Flag::C), a as u16 + b as u16 > 0xFF);

            let back = cpu.sub8(sum, b);
            assert_eq!(back, a);
            assert!(cpu.flag(Flag::N));
            assert_eq!(cpu.flag(Flag::H), (sum & 0x0F) < (b & 0x0F));
            assert_eq!(cpu.flag(Flag::C), sum < b);
        }
    }
}

#[test]
fn adc_and_sbc_use_incoming_carry() {
    let mut cpu = Cpu::new();

    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.adc8(0x0E, 0x01), 0x10);
    assert_eq!(flags(&cpu), (false, false, true, false));

    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.adc8(0xFF, 0x00), 0x00);
    assert_eq!(flags(&cpu), (true, false, true, true));

    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.sbc8(0x10, 0x0F), 0x00);
    assert_eq!(flags(&cpu), (true, true, true, false));

    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.sbc8(0x00, 0x00), 0xFF);
    assert_eq!(flags(&cpu), (false, true, true, true));
}

#[test]
fn cp_sets_flags_without_storing() {
    let (mut cpu, mut bus) = setup(&[0xFE, 0x42]);
    cpu.regs.a = 0x42;
    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(flags(&cpu), (true, true, false, false));
}

#[test]
fn logic_ops_force_h_and_c() {
    let mut cpu = Cpu::new();
    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.and8(0xF0, 0x0F), 0x00);
    assert_eq!(flags(&cpu), (true, false, true, false));

    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.or8(0xF0, 0x0F), 0xFF);
    assert_eq!(flags(&cpu), (false, false, false, false));

    cpu.set_flag(Flag::H, true);
    assert_eq!(cpu.xor8(0xAA, 0xAA), 0x00);
    assert_eq!(flags(&cpu), (true, false, false, false));
}

#[test]
fn inc_then_dec_preserves_carry() {
    let mut cpu = Cpu::new();
    for carry in [false, true] {
        for value in 0..=255u8 {
            cpu.set_flag(Flag::C, carry);
            let up = cpu.inc8(value);
            assert_eq!(cpu.flag(Flag::H), value & 0x0F == 0x0F);
            assert!(!cpu.flag(Flag::N));
            let down = cpu.dec8(up);
            assert_eq!(down, value);
            assert!(cpu.flag(Flag::N));
            assert_eq!(cpu.flag(Flag::Z), value == 0);
            assert_eq!(cpu.flag(Flag::C), carry);
        }
    }
}

#[test]
fn add16_uses_bit_11_and_15() {
    let mut cpu = Cpu::new();
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.add16(0x0FFF, 0x0001), 0x1000);
    assert_eq!(flags(&cpu), (true, false, true, false));

    cpu.set_flag(Flag::Z, false);
    assert_eq!(cpu.add16(0xFFFF, 0x0001), 0x0000);
    assert_eq!(flags(&cpu), (false, false, true, true));

    assert_eq!(cpu.add16(0x00FF, 0x0001), 0x0100);
    assert_eq!(flags(&cpu), (false, false, false, false));
}

#[test]
fn daa_leaves_valid_bcd_alone() {
    let mut cpu = Cpu::new();
    for hi in 0..=9u8 {
        for lo in 0..=9u8 {
            let bcd = (hi << 4) | lo;
            cpu.regs.a = bcd;
            cpu.regs.set_f(0);
            cpu.daa();
            assert_eq!(cpu.regs.a, bcd);
            assert!(!cpu.flag(Flag::C));
            assert!(!cpu.flag(Flag::H));
            assert_eq!(cpu.flag(Flag::Z), bcd == 0);
        }
    }
}

#[test]
fn daa_corrects_bcd_addition_and_subtraction() {
    let mut cpu = Cpu::new();
    for x in 0..100u8 {
        for y in 0..100u8 {
            let bx = ((x / 10) << 4) | (x % 10);
            let by = ((y / 10) << 4) | (y % 10);

            cpu.regs.a = cpu.add8(bx, by);
            cpu.daa();
            let sum = (x as u16 + y as u16) % 100;
            assert_eq!(cpu.regs.a, (((sum / 10) << 4) | (sum % 10)) as u8);
            assert_eq!(cpu.flag(Flag::C), x as u16 + y as u16 >= 100);

            cpu.regs.a = cpu.sub8(bx, by);
            cpu.daa();
            let diff = (x as i16 - y as i16).rem_euclid(100) as u8;
            assert_eq!(cpu.regs.a, ((diff / 10) << 4) | (diff % 10));
            assert_eq!(cpu.flag(Flag::C), x < y);
            assert!(cpu.flag(Flag::N));
        }
    }
}

#[test]
fn push_pop_round_trips_every_pair() {
    // PUSH rr; POP rr for BC, DE, HL.
    for (push, pop) in [(0xC5, 0xC1), (0xD5, 0xD1), (0xE5, 0xE1)] {
        let (mut cpu, mut bus) = setup(&[push, pop]);
        cpu.regs.set_bc(0x1234);
        cpu.regs.set_de(0x5678);
        cpu.regs.set_hl(0x9ABC);
        let before = (cpu.regs.bc(), cpu.regs.de(), cpu.regs.hl());

        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.regs.sp, 0xFFFC);
        assert_eq!(cpu.step(&mut bus), 3);
        assert_eq!(cpu.regs.sp, 0xFFFE);
        assert_eq!((cpu.regs.bc(), cpu.regs.de(), cpu.regs.hl()), before);
    }
}

#[test]
fn push_writes_high_byte_above_low_byte() {
    let (mut cpu, mut bus) = setup(&[0xC5]);
    cpu.regs.set_bc(0xBEEF);
    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xFFFD], 0xBE);
    assert_eq!(bus.memory[0xFFFC], 0xEF);
}

#[test]
fn pop_af_masks_low_nibble() {
    // POP AF with 0x12FF on the stack.
    let (mut cpu, mut bus) = setup(&[0xF1]);
    cpu.regs.sp = 0xC000;
    bus.memory[0xC000] = 0xFF;
    bus.memory[0xC001] = 0x12;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.af(), 0x12F0);
    assert_eq!(cpu.regs.sp, 0xC002);
}

#[test]
fn call_then_ret_restores_pc_and_sp() {
    // 0x0100: CALL 0x0200; 0x0200: RET
    let (mut cpu, mut bus) = setup(&[0xCD, 0x00, 0x02]);
    bus.memory[0x0200] = 0xC9;
    let sp = cpu.regs.sp;

    assert_eq!(cpu.step(&mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.regs.sp, sp.wrapping_sub(2));
    assert_eq!(bus.memory[sp as usize - 1], 0x01);
    assert_eq!(bus.memory[sp as usize - 2], 0x03);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, sp);
}

#[test]
fn jr_nz_cycle_split() {
    // JR NZ,+5
    let (mut cpu, mut bus) = setup(&[0x20, 0x05]);
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.pc, 0x0102);

    let (mut cpu, mut bus) = setup(&[0x20, 0x05]);
    cpu.set_flag(Flag::Z, false);
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0107);
}

#[test]
fn jr_displacement_is_signed() {
    // JR -4
    let (mut cpu, mut bus) = setup(&[0x18, 0xFC]);
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x00FE);
}

#[test]
fn conditional_jp_call_ret_costs() {
    // JP C,a16 / CALL C,a16 / RET C with carry clear, then set.
    for (carry, jp, call, ret) in [(false, 3, 3, 2), (true, 4, 6, 5)] {
        let (mut cpu, mut bus) = setup(&[0xDA, 0x00, 0x02]);
        cpu.set_flag(Flag::C, carry);
        assert_eq!(cpu.step(&mut bus), jp);
        assert_eq!(cpu.regs.pc, if carry { 0x0200 } else { 0x0103 });

        let (mut cpu, mut bus) = setup(&[0xDC, 0x00, 0x02]);
        cpu.set_flag(Flag::C, carry);
        assert_eq!(cpu.step(&mut bus), call);
        assert_eq!(cpu.regs.pc, if carry { 0x0200 } else { 0x0103 });

        let (mut cpu, mut bus) = setup(&[0xD8]);
        cpu.regs.sp = 0xC000;
        bus.memory[0xC000] = 0x34;
        bus.memory[0xC001] = 0x12;
        cpu.set_flag(Flag::C, carry);
        assert_eq!(cpu.step(&mut bus), ret);
        assert_eq!(cpu.regs.pc, if carry { 0x1234 } else { 0x0101 });
    }
}

#[test]
fn rst_calls_fixed_vector() {
    // RST 28H
    let (mut cpu, mut bus) = setup(&[0xEF]);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x01);
}

#[test]
fn jp_hl_and_ld_sp_hl() {
    let (mut cpu, mut bus) = setup(&[0xF9, 0xE9]);
    cpu.regs.set_hl(0x4000);
    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.sp, 0x4000);
    assert_eq!(cpu.step(&mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x4000);
}

#[test]
fn sp_relative_flags_use_unsigned_low_byte() {
    // ADD SP,-1 with SP=0x0001: low byte 0x01 + 0xFF carries out of bits 3 and 7.
    let (mut cpu, mut bus) = setup(&[0xE8, 0xFF]);
    cpu.regs.sp = 0x0001;
    cpu.set_flag(Flag::Z, true);
    cpu.set_flag(Flag::N, true);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert_eq!(flags(&cpu), (false, false, true, true));

    // LD HL,SP+2 with SP=0xFFF0: no carries, HL wraps nothing.
    let (mut cpu, mut bus) = setup(&[0xF8, 0x02]);
    cpu.regs.sp = 0xFFF0;
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.hl(), 0xFFF2);
    assert_eq!(cpu.regs.sp, 0xFFF0);
    assert_eq!(flags(&cpu), (false, false, false, false));

    // LD HL,SP-128 with SP=0x1080.
    let (mut cpu, mut bus) = setup(&[0xF8, 0x80]);
    cpu.regs.sp = 0x1080;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert_eq!(flags(&cpu), (false, false, false, true));
}

#[test]
fn loads_cover_memory_and_immediates() {
    // LD BC,0xC000; LD A,0x5A; LD (BC),A; LD E,A; LD A,(0xC000)
    let (mut cpu, mut bus) = setup(&[
        0x01, 0x00, 0xC0, 0x3E, 0x5A, 0x02, 0x5F, 0xFA, 0x00, 0xC0,
    ]);
    let costs: Vec<u32> = (0..5).map(|_| cpu.step(&mut bus)).collect();
    assert_eq!(costs, [3, 2, 2, 1, 4]);
    assert_eq!(bus.memory[0xC000], 0x5A);
    assert_eq!(cpu.regs.e, 0x5A);
    assert_eq!(cpu.regs.a, 0x5A);
    assert_eq!(cpu.cycles(), 12);
    assert_eq!(bus.ticks, 12);
}

#[test]
fn ld_hl_increment_and_decrement() {
    // LD (HL+),A; LD (HL-),A; LD A,(HL-)
    let (mut cpu, mut bus) = setup(&[0x22, 0x32, 0x3A]);
    cpu.regs.set_hl(0xC000);
    cpu.regs.a = 0x77;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.hl(), 0xC001);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.hl(), 0xC000);
    assert_eq!(bus.memory[0xC000], 0x77);
    assert_eq!(bus.memory[0xC001], 0x77);

    cpu.regs.a = 0;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x77);
    assert_eq!(cpu.regs.hl(), 0xBFFF);
}

#[test]
fn ldh_and_ld_c_address_high_page() {
    // LDH (0x80),A; LD C,0x81; LD (C),A; LDH A,(0x81)
    let (mut cpu, mut bus) = setup(&[0xE0, 0x80, 0x0E, 0x81, 0xE2, 0xF0, 0x81]);
    cpu.regs.a = 0x3C;
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(bus.memory[0xFF80], 0x3C);
    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(bus.memory[0xFF81], 0x3C);
    cpu.regs.a = 0;
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.a, 0x3C);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    let (mut cpu, mut bus) = setup(&[0x08, 0x00, 0xC0]);
    cpu.regs.sp = 0xBEEF;
    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(bus.memory[0xC000], 0xEF);
    assert_eq!(bus.memory[0xC001], 0xBE);
}

#[test]
fn inc_dec_memory_costs_three() {
    // INC (HL); DEC (HL); INC HL
    let (mut cpu, mut bus) = setup(&[0x34, 0x35, 0x23]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x0F;

    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(bus.memory[0xC000], 0x10);
    assert!(cpu.flag(Flag::H));
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(bus.memory[0xC000], 0x0F);
    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.hl(), 0xC001);
}

#[test]
fn accumulator_rotates_clear_zero() {
    // RLCA; RRA
    let (mut cpu, mut bus) = setup(&[0x07, 0x1F]);
    cpu.regs.a = 0x80;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(flags(&cpu), (false, false, false, true));

    cpu.regs.a = 0x01;
    cpu.step(&mut bus);
    // Carry rotates in at bit 7, bit 0 goes out.
    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(flags(&cpu), (false, false, false, true));
}

#[test]
fn cpl_scf_ccf() {
    let (mut cpu, mut bus) = setup(&[0x2F, 0x37, 0x3F]);
    cpu.regs.a = 0x0F;
    cpu.regs.set_f(0);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xF0);
    assert_eq!(flags(&cpu), (false, true, true, false));
    cpu.step(&mut bus);
    assert_eq!(flags(&cpu), (false, false, false, true));
    cpu.step(&mut bus);
    assert_eq!(flags(&cpu), (false, false, false, false));
}

#[test]
fn decode_table_is_total() {
    let illegal: Vec<u8> = (0..=255u8)
        .filter(|&op| matches!(dispatch(op), Instruction::Illegal(_)))
        .collect();
    assert_eq!(
        illegal,
        [0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD]
    );

    assert_eq!(dispatch(0x76), Instruction::Halt);
    assert_eq!(dispatch(0xCB), Instruction::Prefix);
    assert_eq!(
        dispatch(0x41),
        Instruction::LdRR {
            dst: Reg8::B,
            src: Reg8::C
        }
    );
    for op in 0..=255u8 {
        assert_eq!(DISPATCH_TABLE[op as usize], decode(op));
    }
}

#[test]
fn instruction_mnemonics() {
    assert_eq!(dispatch(0x00).to_string(), "NOP");
    assert_eq!(dispatch(0x3C).to_string(), "INC A");
    assert_eq!(dispatch(0x7E).to_string(), "LD A,(HL)");
    assert_eq!(dispatch(0xC3).to_string(), "JP a16");
    assert_eq!(dispatch(0x20).to_string(), "JR NZ,r8");
    assert_eq!(dispatch(0xFF).to_string(), "RST 38H");
    assert_eq!(dispatch(0xD3).to_string(), "ILLEGAL 0xD3");
}

#[test]
fn illegal_opcode_is_one_cycle_nop() {
    let (mut cpu, mut bus) = setup(&[0xD3]);
    let regs = cpu.regs;
    assert_eq!(cpu.step(&mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(cpu.regs.af(), regs.af());
    assert_eq!(cpu.regs.sp, regs.sp);
}

#[test]
fn cb_rotates_shifts_and_swap() {
    // RLC B; SRA C; SWAP D; SRL E; RL H; RR L
    let (mut cpu, mut bus) = setup(&[
        0xCB, 0x00, 0xCB, 0x29, 0xCB, 0x32, 0xCB, 0x3B, 0xCB, 0x14, 0xCB, 0x1D,
    ]);
    cpu.regs.b = 0x85;
    cpu.regs.c = 0x81;
    cpu.regs.d = 0xAB;
    cpu.regs.e = 0x01;
    cpu.regs.h = 0x40;
    cpu.regs.l = 0x02;

    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.b, 0x0B);
    assert!(cpu.flag(Flag::C));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.c, 0xC0);
    assert!(cpu.flag(Flag::C));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.d, 0xBA);
    assert!(!cpu.flag(Flag::C));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.e, 0x00);
    assert_eq!(flags(&cpu), (true, false, false, true));

    cpu.step(&mut bus);
    // Carry from SRL shifts in.
    assert_eq!(cpu.regs.h, 0x81);
    assert!(!cpu.flag(Flag::C));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.l, 0x01);
    assert!(!cpu.flag(Flag::Z));
}

#[test]
fn cb_bit_res_set() {
    // BIT 7,A; RES 0,(HL); SET 3,(HL); BIT 3,(HL)
    let (mut cpu, mut bus) = setup(&[0xCB, 0x7F, 0xCB, 0x86, 0xCB, 0xDE, 0xCB, 0x5E]);
    cpu.regs.a = 0x7F;
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x01;
    cpu.set_flag(Flag::C, true);

    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(flags(&cpu), (true, false, true, true));

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(bus.memory[0xC000], 0x00);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(bus.memory[0xC000], 0x08);

    assert_eq!(cpu.step(&mut bus), 3);
    assert!(!cpu.flag(Flag::Z));
    assert!(cpu.flag(Flag::C));
}

#[test]
fn halt_idles_one_cycle_per_step() {
    let (mut cpu, mut bus) = setup(&[0x76, 0x3C]);
    assert_eq!(cpu.step(&mut bus), 1);
    assert!(cpu.halted);

    let a = cpu.regs.a;
    for _ in 0..3 {
        assert_eq!(cpu.step(&mut bus), 1);
    }
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(cpu.regs.a, a);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn stop_consumes_padding_and_halts() {
    let (mut cpu, mut bus) = setup(&[0x10, 0x00]);
    assert_eq!(cpu.step(&mut bus), 1);
    assert!(cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn ei_takes_effect_after_next_instruction() {
    // EI; NOP; NOP
    let (mut cpu, mut bus) = setup(&[0xFB, 0x00, 0x00]);
    cpu.step(&mut bus);
    assert!(!cpu.ime);
    cpu.step(&mut bus);
    assert!(cpu.ime);
}

#[test]
fn di_cancels_pending_ei() {
    // EI; DI; NOP
    let (mut cpu, mut bus) = setup(&[0xFB, 0xF3, 0x00]);
    for _ in 0..3 {
        cpu.step(&mut bus);
    }
    assert!(!cpu.ime);
}

#[test]
fn reti_enables_immediately() {
    let (mut cpu, mut bus) = setup(&[0xD9]);
    cpu.regs.sp = 0xC000;
    bus.memory[0xC000] = 0x00;
    bus.memory[0xC001] = 0x02;

    assert_eq!(cpu.step(&mut bus), 4);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0200);
}

#[test]
fn interrupt_request_wakes_and_services() {
    let (mut cpu, mut bus) = setup(&[0x76]);
    cpu.step(&mut bus);
    assert!(cpu.halted);

    // IME clear: wake only.
    assert_eq!(cpu.request_interrupt(&mut bus, Interrupt::Timer), 0);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0101);

    cpu.ime = true;
    let cycles = cpu.cycles();
    let ticks = bus.ticks;
    assert_eq!(cpu.request_interrupt(&mut bus, Interrupt::Timer), 5);
    assert!(!cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(cpu.cycles(), cycles + 5);
    assert_eq!(bus.ticks, ticks + 5);
    assert_eq!(bus.ticks, cpu.cycles());
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x01);
}

#[test]
fn interrupt_vectors() {
    let vectors: Vec<u16> = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ]
    .into_iter()
    .map(Interrupt::vector)
    .collect();
    assert_eq!(vectors, [0x40, 0x48, 0x50, 0x58, 0x60]);
}

#[test]
fn dump_lists_every_register_and_flag() {
    let cpu = Cpu::new();
    let dump = cpu.dump();
    for needle in [
        "AF=0x01B0",
        "BC=0x0013",
        "DE=0x00D8",
        "HL=0x014D",
        "SP=0xFFFE",
        "PC=0x0100",
        "A=0x01",
        "F=0xB0",
        "Z=1 N=0 H=1 C=1",
    ] {
        assert!(dump.contains(needle), "missing {needle} in:\n{dump}");
    }
}

#[test]
fn reset_returns_to_power_on() {
    let (mut cpu, mut bus) = setup(&[0x3C, 0xFB, 0x76]);
    for _ in 0..3 {
        cpu.step(&mut bus);
    }
    cpu.reset();
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert!(!cpu.halted);
    assert!(!cpu.ime);
    assert_eq!(cpu.cycles(), 0);
}
