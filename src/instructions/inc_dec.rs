//! Increment and decrement instructions.
//!
//! The memory forms are read-modify-write: one tick for the read, one
//! internal tick while the value changes, one tick for the write-back.

use crate::cpu::Cpu;
use crate::memory::Bus;

/// INC: memory\[address\] += 1 with 8-bit wrap; sets Z and N.
pub(crate) fn inc<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    let value = memory.read_byte(address, cycles).wrapping_add(1);
    *cycles += 1;
    memory.write_byte(address, value, cycles);
    cpu.p.set_zn(value);
}

/// DEC: memory\[address\] -= 1 with 8-bit wrap; sets Z and N.
pub(crate) fn dec<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    let value = memory.read_byte(address, cycles).wrapping_sub(1);
    *cycles += 1;
    memory.write_byte(address, value, cycles);
    cpu.p.set_zn(value);
}

/// INX: X += 1 with wrap; sets Z and N.
pub(crate) fn inx(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.x = cpu.x.wrapping_add(1);
    *cycles += 1;
    cpu.p.set_zn(cpu.x);
}

/// INY: Y += 1 with wrap; sets Z and N.
pub(crate) fn iny(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.y = cpu.y.wrapping_add(1);
    *cycles += 1;
    cpu.p.set_zn(cpu.y);
}

/// DEX: X -= 1 with wrap; sets Z and N.
pub(crate) fn dex(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.x = cpu.x.wrapping_sub(1);
    *cycles += 1;
    cpu.p.set_zn(cpu.x);
}

/// DEY: Y -= 1 with wrap; sets Z and N.
pub(crate) fn dey(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.y = cpu.y.wrapping_sub(1);
    *cycles += 1;
    cpu.p.set_zn(cpu.y);
}
