//! Tests for decimal-mode ADC and SBC.
//!
//! With D set, each nibble is a base-10 digit. The expectations here are
//! what NMOS silicon produces, including the quirky cases: ADC takes N, Z
//! and V from the intermediate binary-style sum, and non-BCD operands are
//! processed without complaint.

use r6502::{opcodes, Cpu, Memory, Status, RESET_VECTOR};

fn setup_decimal(carry: bool) -> (Cpu, Memory) {
    let mut memory = Memory::new();
    memory[RESET_VECTOR + 1] = 0x80;
    let mut cpu = Cpu::new();
    cpu.reset(&mut memory);
    let mut status = cpu.status() | Status::DECIMAL;
    status.set(Status::CARRY, carry);
    cpu.set_status(status);
    (cpu, memory)
}

#[test]
fn bcd_add_without_carry() {
    let (mut cpu, mut memory) = setup_decimal(false);
    memory.load(0x8000, &[opcodes::ADC_IM, 0x27]);
    cpu.set_a(0x15);

    cpu.step(&mut memory);

    // 15 + 27 = 42 in decimal.
    assert_eq!(cpu.a(), 0x42);
    let p = cpu.status();
    assert!(!p.contains(Status::CARRY));
    assert!(!p.contains(Status::ZERO));
    assert!(!p.contains(Status::NEGATIVE));
}

#[test]
fn bcd_add_low_nibble_adjust() {
    let (mut cpu, mut memory) = setup_decimal(false);
    memory.load(0x8000, &[opcodes::ADC_IM, 0x09]);
    cpu.set_a(0x09);

    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0x18); // 9 + 9 = 18
}

#[test]
fn bcd_add_wraps_past_99_with_carry() {
    let (mut cpu, mut memory) = setup_decimal(false);
    memory.load(0x8000, &[opcodes::ADC_IM, 0x01]);
    cpu.set_a(0x99);

    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().contains(Status::CARRY));
}

#[test]
fn bcd_add_uses_incoming_carry_as_one() {
    let (mut cpu, mut memory) = setup_decimal(true);
    memory.load(0x8000, &[opcodes::ADC_IM, 0x24]);
    cpu.set_a(0x17);

    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0x42); // 17 + 24 + 1
}

#[test]
fn bcd_add_high_sums_adjust_like_silicon() {
    let (mut cpu, mut memory) = setup_decimal(false);
    memory.load(0x8000, &[opcodes::ADC_IM, 0x90]);
    cpu.set_a(0x90);

    cpu.step(&mut memory);

    // 90 + 90 = 180: silicon leaves 0x80 in A with carry out.
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.status().contains(Status::CARRY));
}

#[test]
fn bcd_add_accepts_non_bcd_operands() {
    let (mut cpu, mut memory) = setup_decimal(false);
    memory.load(0x8000, &[opcodes::ADC_IM, 0x01]);
    cpu.set_a(0x1F); // 0xF is not a decimal digit

    cpu.step(&mut memory);

    // Low nibble 0xF + 1 = 0x10, adjusted by 6: silicon says 0x26.
    assert_eq!(cpu.a(), 0x26);
    assert!(!cpu.status().contains(Status::CARRY));
}

#[test]
fn bcd_subtract_simple() {
    let (mut cpu, mut memory) = setup_decimal(true);
    memory.load(0x8000, &[opcodes::SBC_IM, 0x27]);
    cpu.set_a(0x42);

    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0x15); // 42 - 27
    assert!(cpu.status().contains(Status::CARRY)); // no borrow
}

#[test]
fn bcd_subtract_with_borrow_out() {
    let (mut cpu, mut memory) = setup_decimal(true);
    memory.load(0x8000, &[opcodes::SBC_IM, 0x27]);
    cpu.set_a(0x15);

    cpu.step(&mut memory);

    // 15 - 27 = -12, which reads as 88 with the borrow flagged.
    assert_eq!(cpu.a(), 0x88);
    assert!(!cpu.status().contains(Status::CARRY));
}

#[test]
fn bcd_subtract_consumes_missing_carry() {
    let (mut cpu, mut memory) = setup_decimal(false);
    memory.load(0x8000, &[opcodes::SBC_IM, 0x01]);
    cpu.set_a(0x10);

    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0x08); // 10 - 1 - 1
    assert!(cpu.status().contains(Status::CARRY));
}

#[test]
fn bcd_subtract_to_zero() {
    let (mut cpu, mut memory) = setup_decimal(true);
    memory.load(0x8000, &[opcodes::SBC_IM, 0x42]);
    cpu.set_a(0x42);

    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().contains(Status::ZERO));
    assert!(cpu.status().contains(Status::CARRY));
}

#[test]
fn binary_mode_resumes_after_cld() {
    let (mut cpu, mut memory) = setup_decimal(false);
    memory.load(0x8000, &[opcodes::CLD, opcodes::ADC_IM, 0x27]);
    cpu.set_a(0x15);

    cpu.step(&mut memory);
    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0x3C); // plain binary 0x15 + 0x27
}
