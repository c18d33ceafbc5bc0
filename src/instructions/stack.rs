//! Stack push and pull instructions.
//!
//! PHP always pushes with B and the unused bit set; PLP writes whatever was
//! popped back into P with the unused bit forced on. The pulls spend two
//! internal ticks before touching the stack.

use crate::cpu::Cpu;
use crate::memory::Bus;
use crate::status::Status;

/// PHA: push A.
pub(crate) fn pha<M: Bus>(cpu: &mut Cpu, memory: &mut M, cycles: &mut u64) {
    *cycles += 1;
    let value = cpu.a;
    cpu.push_byte(memory, value, cycles);
}

/// PHP: push P with B and the unused bit forced to 1 in the pushed byte.
pub(crate) fn php<M: Bus>(cpu: &mut Cpu, memory: &mut M, cycles: &mut u64) {
    *cycles += 1;
    let value = cpu.p.pushed();
    cpu.push_byte(memory, value, cycles);
}

/// PLA: pull into A; sets Z and N.
pub(crate) fn pla<M: Bus>(cpu: &mut Cpu, memory: &mut M, cycles: &mut u64) {
    *cycles += 2;
    cpu.a = cpu.pop_byte(memory, cycles);
    cpu.p.set_zn(cpu.a);
}

/// PLP: pull into P; the unused bit reads back as 1.
pub(crate) fn plp<M: Bus>(cpu: &mut Cpu, memory: &mut M, cycles: &mut u64) {
    *cycles += 2;
    let value = cpu.pop_byte(memory, cycles);
    cpu.p = Status::from_pushed(value);
}
