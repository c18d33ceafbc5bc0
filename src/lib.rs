//! # r6502 — a cycle-counting 6502 core
//!
//! A functional emulator for the NMOS MOS 6502 (Rockwell R650X-compatible):
//! all 151 documented opcodes with bit-exact flag, wrap-around and
//! cycle-count semantics, including decimal-mode ADC/SBC, the indirect-JMP
//! page-boundary bug and the branch page-cross penalty.
//!
//! The core is two values: a [`Memory`] (64 KiB of flat RAM behind the
//! cycle-charging [`Bus`] trait) and a [`Cpu`] (the register file plus a
//! retired-cycle counter). The CPU holds no reference to memory — every
//! entry point takes it explicitly — so snapshotting, replay, and sharing a
//! memory between cores are all plain data manipulation.
//!
//! ## Quick start
//!
//! ```rust
//! use r6502::{opcodes, Cpu, Memory, Status, RESET_VECTOR};
//!
//! // Build a memory, point the reset vector at the program.
//! let mut memory = Memory::new();
//! memory[RESET_VECTOR] = 0x00;
//! memory[RESET_VECTOR + 1] = 0x10; // 0x1000
//!
//! // CLC; LDA #$05; ADC #$03
//! memory.load(0x1000, &[opcodes::CLC, opcodes::LDA_IM, 0x05, opcodes::ADC_IM, 0x03]);
//!
//! let mut cpu = Cpu::new();
//! cpu.reset(&mut memory); // loads PC from the vector, 8 ticks
//!
//! cpu.step(&mut memory);
//! cpu.step(&mut memory);
//! cpu.step(&mut memory);
//!
//! assert_eq!(cpu.a(), 0x08);
//! assert!(!cpu.status().contains(Status::CARRY));
//! ```
//!
//! ## Scope
//!
//! Instruction-retire accuracy: the counter advances one tick per memory
//! access and per defined internal operation, not per hardware T-state.
//! Undocumented opcodes retire as one-byte, two-tick no-ops. The IRQ and
//! NMI *lines* are not modeled — only the software `BRK`/`RTI` pair — though
//! the vector addresses are published for hosts that lay out images.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

mod instructions;

pub use addressing::AddressingMode;
pub use cpu::{Cpu, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, SP_ON_RESET, STACK_BASE};
pub use memory::{Bus, Memory};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use status::Status;
