//! # Instruction Implementations
//!
//! Execution semantics for the 151 documented instructions, organized by
//! category. Each function receives the CPU, the bus, the effective address
//! its addressing mode produced (where one exists) and the per-instruction
//! cycle counter; memory accesses charge their own ticks, internal
//! operations bump the counter directly.
//!
//! - `load_store` — LDA, LDX, LDY, STA, STX, STY
//! - `alu` — AND, ORA, EOR, BIT, ADC, SBC, CMP, CPX, CPY
//! - `inc_dec` — INC, DEC, INX, INY, DEX, DEY
//! - `shifts` — ASL, LSR, ROL, ROR (accumulator and memory forms)
//! - `stack` — PHA, PHP, PLA, PLP
//! - `transfer` — TAX, TAY, TXA, TYA, TSX, TXS
//! - `branches` — the eight conditional branches
//! - `control` — JMP, JSR, RTS, RTI, BRK, NOP
//! - `flags` — CLC, SEC, CLD, SED, CLI, SEI, CLV

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;
