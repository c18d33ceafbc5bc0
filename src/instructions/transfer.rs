//! Register transfer instructions.
//!
//! Every transfer except TXS retraces Z/N from the destination. TXS is the
//! odd one out: the stack pointer is not a flag-bearing register.

use crate::cpu::Cpu;

/// TAX: X ← A; sets Z and N.
pub(crate) fn tax(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.x = cpu.a;
    *cycles += 1;
    cpu.p.set_zn(cpu.x);
}

/// TAY: Y ← A; sets Z and N.
pub(crate) fn tay(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.y = cpu.a;
    *cycles += 1;
    cpu.p.set_zn(cpu.y);
}

/// TXA: A ← X; sets Z and N.
pub(crate) fn txa(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.a = cpu.x;
    *cycles += 1;
    cpu.p.set_zn(cpu.a);
}

/// TYA: A ← Y; sets Z and N.
pub(crate) fn tya(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.a = cpu.y;
    *cycles += 1;
    cpu.p.set_zn(cpu.a);
}

/// TSX: X ← SP; sets Z and N.
pub(crate) fn tsx(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.x = cpu.sp;
    *cycles += 1;
    cpu.p.set_zn(cpu.x);
}

/// TXS: SP ← X. No flags.
pub(crate) fn txs(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.sp = cpu.x;
    *cycles += 1;
}
