//! Shift and rotate instructions.
//!
//! ASL/LSR shift a zero in; ROL/ROR rotate the old carry in. In every case
//! the ejected bit becomes the new carry and Z/N follow the result. The
//! accumulator forms cost one internal tick; the memory forms are
//! read-modify-write.

use crate::cpu::Cpu;
use crate::memory::Bus;
use crate::status::Status;

fn asl_value(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.p.set(Status::CARRY, (value & 0x80) != 0);
    let result = value << 1;
    cpu.p.set_zn(result);
    result
}

fn lsr_value(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.p.set(Status::CARRY, (value & 0x01) != 0);
    let result = value >> 1;
    cpu.p.set_zn(result);
    result
}

fn rol_value(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.p.contains(Status::CARRY) as u8;
    cpu.p.set(Status::CARRY, (value & 0x80) != 0);
    let result = (value << 1) | carry_in;
    cpu.p.set_zn(result);
    result
}

fn ror_value(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.p.contains(Status::CARRY) as u8;
    cpu.p.set(Status::CARRY, (value & 0x01) != 0);
    let result = (value >> 1) | (carry_in << 7);
    cpu.p.set_zn(result);
    result
}

/// ASL A.
pub(crate) fn asl_accumulator(cpu: &mut Cpu, cycles: &mut u64) {
    let value = cpu.a;
    cpu.a = asl_value(cpu, value);
    *cycles += 1;
}

/// ASL on memory.
pub(crate) fn asl_memory<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    let value = memory.read_byte(address, cycles);
    let result = asl_value(cpu, value);
    *cycles += 1;
    memory.write_byte(address, result, cycles);
}

/// LSR A.
pub(crate) fn lsr_accumulator(cpu: &mut Cpu, cycles: &mut u64) {
    let value = cpu.a;
    cpu.a = lsr_value(cpu, value);
    *cycles += 1;
}

/// LSR on memory.
pub(crate) fn lsr_memory<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    let value = memory.read_byte(address, cycles);
    let result = lsr_value(cpu, value);
    *cycles += 1;
    memory.write_byte(address, result, cycles);
}

/// ROL A.
pub(crate) fn rol_accumulator(cpu: &mut Cpu, cycles: &mut u64) {
    let value = cpu.a;
    cpu.a = rol_value(cpu, value);
    *cycles += 1;
}

/// ROL on memory.
pub(crate) fn rol_memory<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    let value = memory.read_byte(address, cycles);
    let result = rol_value(cpu, value);
    *cycles += 1;
    memory.write_byte(address, result, cycles);
}

/// ROR A.
pub(crate) fn ror_accumulator(cpu: &mut Cpu, cycles: &mut u64) {
    let value = cpu.a;
    cpu.a = ror_value(cpu, value);
    *cycles += 1;
}

/// ROR on memory.
pub(crate) fn ror_memory<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    let value = memory.read_byte(address, cycles);
    let result = ror_value(cpu, value);
    *cycles += 1;
    memory.write_byte(address, result, cycles);
}
