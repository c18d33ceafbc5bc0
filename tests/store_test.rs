//! Tests for STA, STX and STY.
//!
//! Stores never touch flags, and their indexed forms have a fixed cost: the
//! hardware always performs the dummy read, so crossing a page changes
//! nothing.

use r6502::{opcodes, Cpu, Memory, RESET_VECTOR};

fn setup(origin: u16) -> (Cpu, Memory) {
    let mut memory = Memory::new();
    memory[RESET_VECTOR] = (origin & 0xFF) as u8;
    memory[RESET_VECTOR + 1] = (origin >> 8) as u8;
    let mut cpu = Cpu::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn sta_zero_page() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STA_ZP, 0x42]);
    cpu.set_a(0x99);

    let cost = cpu.step(&mut memory);

    assert_eq!(memory[0x0042], 0x99);
    assert_eq!(cost, 3);
}

#[test]
fn sta_does_not_touch_flags() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STA_ZP, 0x42]);
    cpu.set_a(0x00); // a load of zero would set Z; a store must not
    let before = cpu.status();

    cpu.step(&mut memory);

    assert_eq!(cpu.status(), before);
}

#[test]
fn sta_absolute() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STA_ABS, 0x00, 0x02]);
    cpu.set_a(0x42);

    let cost = cpu.step(&mut memory);

    assert_eq!(memory[0x0200], 0x42);
    assert_eq!(cost, 4);
}

#[test]
fn sta_absolute_x_costs_five_without_crossing() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STA_ABSX, 0x80, 0x10]);
    cpu.set_a(0x42);
    cpu.set_x(0x10);

    let cost = cpu.step(&mut memory);

    assert_eq!(memory[0x1090], 0x42);
    assert_eq!(cost, 5);
}

#[test]
fn sta_absolute_x_costs_five_with_crossing() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STA_ABSX, 0xF0, 0x10]);
    cpu.set_a(0x42);
    cpu.set_x(0x20);

    let cost = cpu.step(&mut memory);

    assert_eq!(memory[0x1110], 0x42);
    assert_eq!(cost, 5);
}

#[test]
fn sta_absolute_y_fixed_cost() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STA_ABSY, 0x00, 0x20]);
    cpu.set_a(0x01);
    cpu.set_y(0x05);

    assert_eq!(cpu.step(&mut memory), 5);
    assert_eq!(memory[0x2005], 0x01);
}

#[test]
fn sta_indexed_indirect() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STA_INDX, 0x40]);
    cpu.set_a(0x42);
    cpu.set_x(0x05);
    memory[0x0045] = 0x00;
    memory[0x0046] = 0x30;

    let cost = cpu.step(&mut memory);

    assert_eq!(memory[0x3000], 0x42);
    assert_eq!(cost, 6);
}

#[test]
fn sta_indirect_indexed_fixed_cost() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STA_INDY, 0x40]);
    cpu.set_a(0x42);
    cpu.set_y(0x05);
    memory[0x0040] = 0xFF;
    memory[0x0041] = 0x12; // base 0x12FF: crossing, still 6 ticks

    let cost = cpu.step(&mut memory);

    assert_eq!(memory[0x1304], 0x42);
    assert_eq!(cost, 6);
}

#[test]
fn stx_zero_page_y() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STX_ZPY, 0x30]);
    cpu.set_x(0x77);
    cpu.set_y(0x04);

    let cost = cpu.step(&mut memory);

    assert_eq!(memory[0x0034], 0x77);
    assert_eq!(cost, 4);
}

#[test]
fn stx_absolute() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STX_ABS, 0x00, 0x40]);
    cpu.set_x(0x12);

    assert_eq!(cpu.step(&mut memory), 4);
    assert_eq!(memory[0x4000], 0x12);
}

#[test]
fn sty_zero_page_x() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STY_ZPX, 0x30]);
    cpu.set_y(0x88);
    cpu.set_x(0x01);

    let cost = cpu.step(&mut memory);

    assert_eq!(memory[0x0031], 0x88);
    assert_eq!(cost, 4);
}

#[test]
fn sty_absolute() {
    let (mut cpu, mut memory) = setup(0x8000);
    memory.load(0x8000, &[opcodes::STY_ABS, 0xCD, 0xAB]);
    cpu.set_y(0x0E);

    assert_eq!(cpu.step(&mut memory), 4);
    assert_eq!(memory[0xABCD], 0x0E);
}
