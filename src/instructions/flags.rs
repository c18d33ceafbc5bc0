//! Single-flag set and clear instructions.

use crate::cpu::Cpu;
use crate::status::Status;

pub(crate) fn clc(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.p.remove(Status::CARRY);
    *cycles += 1;
}

pub(crate) fn sec(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.p.insert(Status::CARRY);
    *cycles += 1;
}

pub(crate) fn cld(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.p.remove(Status::DECIMAL);
    *cycles += 1;
}

pub(crate) fn sed(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.p.insert(Status::DECIMAL);
    *cycles += 1;
}

pub(crate) fn cli(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.p.remove(Status::INTERRUPT);
    *cycles += 1;
}

pub(crate) fn sei(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.p.insert(Status::INTERRUPT);
    *cycles += 1;
}

pub(crate) fn clv(cpu: &mut Cpu, cycles: &mut u64) {
    cpu.p.remove(Status::OVERFLOW);
    *cycles += 1;
}
