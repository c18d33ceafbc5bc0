//! Load and store instructions.
//!
//! Loads copy memory into a register and retrace Z/N from the loaded value;
//! stores copy a register into memory and leave every flag alone.

use crate::cpu::Cpu;
use crate::memory::Bus;

/// LDA: A ← memory\[address\]; sets Z and N.
pub(crate) fn lda<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    cpu.a = memory.read_byte(address, cycles);
    cpu.p.set_zn(cpu.a);
}

/// LDX: X ← memory\[address\]; sets Z and N.
pub(crate) fn ldx<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    cpu.x = memory.read_byte(address, cycles);
    cpu.p.set_zn(cpu.x);
}

/// LDY: Y ← memory\[address\]; sets Z and N.
pub(crate) fn ldy<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    cpu.y = memory.read_byte(address, cycles);
    cpu.p.set_zn(cpu.y);
}

/// STA: memory\[address\] ← A.
pub(crate) fn sta<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    memory.write_byte(address, cpu.a, cycles);
}

/// STX: memory\[address\] ← X.
pub(crate) fn stx<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    memory.write_byte(address, cpu.x, cycles);
}

/// STY: memory\[address\] ← Y.
pub(crate) fn sty<M: Bus>(cpu: &mut Cpu, memory: &mut M, address: u16, cycles: &mut u64) {
    memory.write_byte(address, cpu.y, cycles);
}
