//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register file and a few arbitrary memory regions,
//! steps once, and checks the accounting invariants that must survive any
//! input: the cost is positive, it equals the counter increment, and it
//! never exceeds the longest legal instruction.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use r6502::{Cpu, Memory, Status, RESET_VECTOR};

#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction bytes placed at the program counter.
    instruction: [u8; 3],
    /// Page zero, where indirect pointers live.
    zero_page: [u8; 256],
    /// Page one, the stack.
    stack_page: [u8; 256],
    /// A window of general memory at 0x4000.
    window: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Memory::new();
    memory[RESET_VECTOR + 1] = 0x80;
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.window);
    memory.load(0x8000, &input.memory.instruction);

    let mut cpu = Cpu::new();
    cpu.reset(&mut memory);
    cpu.set_a(input.registers.a);
    cpu.set_x(input.registers.x);
    cpu.set_y(input.registers.y);
    cpu.set_sp(input.registers.sp);
    cpu.set_status(Status::from_bits_retain(input.registers.status));

    let before = cpu.total_cycles();
    let cost = cpu.step(&mut memory);

    assert!(cost > 0);
    assert!(cost <= 8);
    assert_eq!(cpu.total_cycles(), before + cost);
});
