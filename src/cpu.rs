//! # CPU State and Execution
//!
//! The [`Cpu`] owns the architectural register file (A, X, Y, PC, SP, P) and
//! the running cycle total, and nothing else. Memory arrives as an explicit
//! argument at every entry point, so a CPU and a memory are independent
//! values: snapshotting a machine means copying the register bundle and the
//! 64 KiB block, and several CPUs could share one memory if a host wanted
//! that.
//!
//! Execution is a classic fetch-decode-execute interpreter. [`Cpu::step`]
//! retires exactly one instruction and returns what it cost; every memory
//! access charges one tick through the [`Bus`] as it happens, and defined
//! internal operations bump the same per-instruction counter, so the CPU and
//! the memory always agree on the bill.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::memory::Bus;
use crate::opcodes::{self, OPCODE_TABLE};
use crate::status::Status;

/// Bottom of the hardware stack; SP is the low byte of an address in this
/// page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value established by reset.
pub const SP_ON_RESET: u8 = 0xFD;

/// NMI handler vector. Reserved: the core never asserts NMI, but hosts lay
/// out memory around it.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector: PC is loaded from this little-endian word on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK handler vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycle policy for indexed addressing.
///
/// Read instructions pay one extra tick only when adding the index register
/// carries into the address high byte. Stores and read-modify-write
/// instructions always perform the dummy read at the uncorrected address,
/// so their tick is unconditional and the instruction cost never varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndexedAccess {
    Read,
    Write,
}

/// The 6502 register file plus the retired-cycle counter.
///
/// # Examples
///
/// ```
/// use r6502::{opcodes, Cpu, Memory, RESET_VECTOR};
///
/// let mut memory = Memory::new();
/// memory[RESET_VECTOR] = 0x00;
/// memory[RESET_VECTOR + 1] = 0x10; // reset to 0x1000
/// memory.load(0x1000, &[opcodes::LDA_IM, 0x42]);
///
/// let mut cpu = Cpu::new();
/// cpu.reset(&mut memory);
/// assert_eq!(cpu.pc(), 0x1000);
/// assert_eq!(cpu.total_cycles(), 8);
///
/// let cost = cpu.step(&mut memory);
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.total_cycles(), 8 + cost);
/// ```
#[derive(Default)]
pub struct Cpu {
    /// Accumulator.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Program counter: address of the next byte to fetch.
    pub(crate) pc: u16,

    /// Stack pointer, the low byte of an address in page 1.
    pub(crate) sp: u8,

    /// Processor status.
    pub(crate) p: Status,

    /// Ticks retired since construction. Strictly non-decreasing.
    pub(crate) total_cycles: u64,
}

impl Cpu {
    /// Creates a CPU with every register and the cycle counter at zero.
    /// Call [`Cpu::reset`] before stepping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hardware reset: loads PC from the word at [`RESET_VECTOR`], sets SP
    /// to 0xFD, sets P to 0x24 (unused and interrupt-disable bits), zeroes
    /// A, X and Y. Charges the 8 ticks a real reset sequence takes.
    pub fn reset<M: Bus>(&mut self, memory: &mut M) {
        self.pc = memory.read_word(RESET_VECTOR, &mut self.total_cycles);
        self.sp = SP_ON_RESET;
        self.p = Status::UNUSED | Status::INTERRUPT;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        // The vector read above already accounted for two of the eight.
        self.total_cycles += 6;
    }

    /// Executes one instruction and returns the ticks it consumed. The same
    /// amount is folded into [`Cpu::total_cycles`].
    ///
    /// Undocumented opcodes retire as one-byte no-ops costing the opcode
    /// fetch plus one tick; `step` never fails.
    pub fn step<M: Bus>(&mut self, memory: &mut M) -> u64 {
        let mut cycles = 0u64;
        let opcode = self.fetch_byte(memory, &mut cycles);

        match opcode {
            // Loads
            opcodes::LDA_IM | opcodes::LDA_ZP | opcodes::LDA_ZPX | opcodes::LDA_ABS
            | opcodes::LDA_ABSX | opcodes::LDA_ABSY | opcodes::LDA_INDX | opcodes::LDA_INDY => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                load_store::lda(self, memory, address, &mut cycles);
            }
            opcodes::LDX_IM | opcodes::LDX_ZP | opcodes::LDX_ZPY | opcodes::LDX_ABS
            | opcodes::LDX_ABSY => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                load_store::ldx(self, memory, address, &mut cycles);
            }
            opcodes::LDY_IM | opcodes::LDY_ZP | opcodes::LDY_ZPX | opcodes::LDY_ABS
            | opcodes::LDY_ABSX => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                load_store::ldy(self, memory, address, &mut cycles);
            }

            // Stores
            opcodes::STA_ZP | opcodes::STA_ZPX | opcodes::STA_ABS | opcodes::STA_ABSX
            | opcodes::STA_ABSY | opcodes::STA_INDX | opcodes::STA_INDY => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Write, &mut cycles);
                load_store::sta(self, memory, address, &mut cycles);
            }
            opcodes::STX_ZP | opcodes::STX_ZPY | opcodes::STX_ABS => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Write, &mut cycles);
                load_store::stx(self, memory, address, &mut cycles);
            }
            opcodes::STY_ZP | opcodes::STY_ZPX | opcodes::STY_ABS => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Write, &mut cycles);
                load_store::sty(self, memory, address, &mut cycles);
            }

            // Register transfers
            opcodes::TAX => transfer::tax(self, &mut cycles),
            opcodes::TAY => transfer::tay(self, &mut cycles),
            opcodes::TXA => transfer::txa(self, &mut cycles),
            opcodes::TYA => transfer::tya(self, &mut cycles),
            opcodes::TSX => transfer::tsx(self, &mut cycles),
            opcodes::TXS => transfer::txs(self, &mut cycles),

            // Stack operations
            opcodes::PHA => stack::pha(self, memory, &mut cycles),
            opcodes::PHP => stack::php(self, memory, &mut cycles),
            opcodes::PLA => stack::pla(self, memory, &mut cycles),
            opcodes::PLP => stack::plp(self, memory, &mut cycles),

            // Logical operations
            opcodes::AND_IM | opcodes::AND_ZP | opcodes::AND_ZPX | opcodes::AND_ABS
            | opcodes::AND_ABSX | opcodes::AND_ABSY | opcodes::AND_INDX | opcodes::AND_INDY => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                alu::and(self, memory, address, &mut cycles);
            }
            opcodes::ORA_IM | opcodes::ORA_ZP | opcodes::ORA_ZPX | opcodes::ORA_ABS
            | opcodes::ORA_ABSX | opcodes::ORA_ABSY | opcodes::ORA_INDX | opcodes::ORA_INDY => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                alu::ora(self, memory, address, &mut cycles);
            }
            opcodes::EOR_IM | opcodes::EOR_ZP | opcodes::EOR_ZPX | opcodes::EOR_ABS
            | opcodes::EOR_ABSX | opcodes::EOR_ABSY | opcodes::EOR_INDX | opcodes::EOR_INDY => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                alu::eor(self, memory, address, &mut cycles);
            }
            opcodes::BIT_ZP | opcodes::BIT_ABS => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                alu::bit(self, memory, address, &mut cycles);
            }

            // Arithmetic
            opcodes::ADC_IM | opcodes::ADC_ZP | opcodes::ADC_ZPX | opcodes::ADC_ABS
            | opcodes::ADC_ABSX | opcodes::ADC_ABSY | opcodes::ADC_INDX | opcodes::ADC_INDY => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                alu::adc(self, memory, address, &mut cycles);
            }
            opcodes::SBC_IM | opcodes::SBC_ZP | opcodes::SBC_ZPX | opcodes::SBC_ABS
            | opcodes::SBC_ABSX | opcodes::SBC_ABSY | opcodes::SBC_INDX | opcodes::SBC_INDY => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                alu::sbc(self, memory, address, &mut cycles);
            }

            // Comparisons
            opcodes::CMP_IM | opcodes::CMP_ZP | opcodes::CMP_ZPX | opcodes::CMP_ABS
            | opcodes::CMP_ABSX | opcodes::CMP_ABSY | opcodes::CMP_INDX | opcodes::CMP_INDY => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                alu::cmp(self, memory, address, &mut cycles);
            }
            opcodes::CPX_IM | opcodes::CPX_ZP | opcodes::CPX_ABS => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                alu::cpx(self, memory, address, &mut cycles);
            }
            opcodes::CPY_IM | opcodes::CPY_ZP | opcodes::CPY_ABS => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Read, &mut cycles);
                alu::cpy(self, memory, address, &mut cycles);
            }

            // Increment and decrement
            opcodes::INC_ZP | opcodes::INC_ZPX | opcodes::INC_ABS | opcodes::INC_ABSX => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Write, &mut cycles);
                inc_dec::inc(self, memory, address, &mut cycles);
            }
            opcodes::DEC_ZP | opcodes::DEC_ZPX | opcodes::DEC_ABS | opcodes::DEC_ABSX => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Write, &mut cycles);
                inc_dec::dec(self, memory, address, &mut cycles);
            }
            opcodes::INX => inc_dec::inx(self, &mut cycles),
            opcodes::INY => inc_dec::iny(self, &mut cycles),
            opcodes::DEX => inc_dec::dex(self, &mut cycles),
            opcodes::DEY => inc_dec::dey(self, &mut cycles),

            // Shifts and rotates
            opcodes::ASL_ACC => shifts::asl_accumulator(self, &mut cycles),
            opcodes::ASL_ZP | opcodes::ASL_ZPX | opcodes::ASL_ABS | opcodes::ASL_ABSX => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Write, &mut cycles);
                shifts::asl_memory(self, memory, address, &mut cycles);
            }
            opcodes::LSR_ACC => shifts::lsr_accumulator(self, &mut cycles),
            opcodes::LSR_ZP | opcodes::LSR_ZPX | opcodes::LSR_ABS | opcodes::LSR_ABSX => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Write, &mut cycles);
                shifts::lsr_memory(self, memory, address, &mut cycles);
            }
            opcodes::ROL_ACC => shifts::rol_accumulator(self, &mut cycles),
            opcodes::ROL_ZP | opcodes::ROL_ZPX | opcodes::ROL_ABS | opcodes::ROL_ABSX => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Write, &mut cycles);
                shifts::rol_memory(self, memory, address, &mut cycles);
            }
            opcodes::ROR_ACC => shifts::ror_accumulator(self, &mut cycles),
            opcodes::ROR_ZP | opcodes::ROR_ZPX | opcodes::ROR_ABS | opcodes::ROR_ABSX => {
                let address = self.operand_address(memory, opcode, IndexedAccess::Write, &mut cycles);
                shifts::ror_memory(self, memory, address, &mut cycles);
            }

            // Jumps and subroutines
            opcodes::JMP_ABS => {
                let address = self.absolute(memory, &mut cycles);
                control::jmp(self, address);
            }
            opcodes::JMP_IND => control::jmp_indirect(self, memory, &mut cycles),
            opcodes::JSR => {
                let address = self.absolute(memory, &mut cycles);
                control::jsr(self, memory, address, &mut cycles);
            }
            opcodes::RTS => control::rts(self, memory, &mut cycles),
            opcodes::RTI => control::rti(self, memory, &mut cycles),

            // Branches
            opcodes::BCC => {
                let taken = !self.p.contains(Status::CARRY);
                branches::branch_if(self, memory, &mut cycles, taken);
            }
            opcodes::BCS => {
                let taken = self.p.contains(Status::CARRY);
                branches::branch_if(self, memory, &mut cycles, taken);
            }
            opcodes::BEQ => {
                let taken = self.p.contains(Status::ZERO);
                branches::branch_if(self, memory, &mut cycles, taken);
            }
            opcodes::BNE => {
                let taken = !self.p.contains(Status::ZERO);
                branches::branch_if(self, memory, &mut cycles, taken);
            }
            opcodes::BMI => {
                let taken = self.p.contains(Status::NEGATIVE);
                branches::branch_if(self, memory, &mut cycles, taken);
            }
            opcodes::BPL => {
                let taken = !self.p.contains(Status::NEGATIVE);
                branches::branch_if(self, memory, &mut cycles, taken);
            }
            opcodes::BVC => {
                let taken = !self.p.contains(Status::OVERFLOW);
                branches::branch_if(self, memory, &mut cycles, taken);
            }
            opcodes::BVS => {
                let taken = self.p.contains(Status::OVERFLOW);
                branches::branch_if(self, memory, &mut cycles, taken);
            }

            // Flag operations
            opcodes::CLC => flags::clc(self, &mut cycles),
            opcodes::SEC => flags::sec(self, &mut cycles),
            opcodes::CLD => flags::cld(self, &mut cycles),
            opcodes::SED => flags::sed(self, &mut cycles),
            opcodes::CLI => flags::cli(self, &mut cycles),
            opcodes::SEI => flags::sei(self, &mut cycles),
            opcodes::CLV => flags::clv(self, &mut cycles),

            // System
            opcodes::BRK => control::brk(self, memory, &mut cycles),
            opcodes::NOP => control::nop(&mut cycles),

            // Undocumented opcodes retire as one-tick no-ops.
            _ => cycles += 1,
        }

        self.total_cycles += cycles;
        cycles
    }

    /// Steps until at least `budget` ticks have been retired, never stopping
    /// mid-instruction, and returns the ticks actually consumed (at most one
    /// instruction past the budget).
    ///
    /// # Examples
    ///
    /// ```
    /// use r6502::{opcodes, Cpu, Memory, RESET_VECTOR};
    ///
    /// let mut memory = Memory::new();
    /// memory[RESET_VECTOR + 1] = 0x80; // reset to 0x8000
    /// memory.load(0x8000, &[opcodes::NOP; 16]);
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.reset(&mut memory);
    ///
    /// // NOP costs 2 ticks, so a budget of 7 retires four of them.
    /// assert_eq!(cpu.run_for(7, &mut memory), 8);
    /// assert_eq!(cpu.pc(), 0x8004);
    /// ```
    pub fn run_for<M: Bus>(&mut self, budget: u64, memory: &mut M) -> u64 {
        let mut executed = 0;
        while executed < budget {
            executed += self.step(memory);
        }
        executed
    }

    // ========== Register access ==========

    /// Accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer. The full stack address is `0x0100 + sp`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Processor status.
    pub fn status(&self) -> Status {
        self.p
    }

    /// Ticks retired since construction.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the processor status wholesale.
    pub fn set_status(&mut self, status: Status) {
        self.p = status;
    }

    // ========== Fetch and stack micro-operations ==========

    /// Reads the byte at PC and advances PC; 1 tick.
    pub(crate) fn fetch_byte<M: Bus>(&mut self, memory: &mut M, cycles: &mut u64) -> u8 {
        let value = memory.read_byte(self.pc, cycles);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and advances PC by two; 2 ticks.
    pub(crate) fn fetch_word<M: Bus>(&mut self, memory: &mut M, cycles: &mut u64) -> u16 {
        let value = memory.read_word(self.pc, cycles);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Writes at 0x0100+SP, then decrements SP with wrap; 1 tick.
    pub(crate) fn push_byte<M: Bus>(&mut self, memory: &mut M, value: u8, cycles: &mut u64) {
        memory.write_byte(STACK_BASE | self.sp as u16, value, cycles);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes high byte then low byte, so the word reads back little-endian
    /// from its final position; 2 ticks.
    pub(crate) fn push_word<M: Bus>(&mut self, memory: &mut M, value: u16, cycles: &mut u64) {
        self.push_byte(memory, (value >> 8) as u8, cycles);
        self.push_byte(memory, (value & 0xFF) as u8, cycles);
    }

    /// Increments SP with wrap, then reads at 0x0100+SP; 1 tick.
    pub(crate) fn pop_byte<M: Bus>(&mut self, memory: &mut M, cycles: &mut u64) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        memory.read_byte(STACK_BASE | self.sp as u16, cycles)
    }

    /// Pops low byte then high byte; 2 ticks.
    pub(crate) fn pop_word<M: Bus>(&mut self, memory: &mut M, cycles: &mut u64) -> u16 {
        let low = self.pop_byte(memory, cycles) as u16;
        let high = self.pop_byte(memory, cycles) as u16;
        (high << 8) | low
    }

    // ========== Effective address computation ==========

    /// Resolves the operand address for `opcode` according to its addressing
    /// mode in the metadata table, charging the mode's ticks.
    fn operand_address<M: Bus>(
        &mut self,
        memory: &mut M,
        opcode: u8,
        access: IndexedAccess,
        cycles: &mut u64,
    ) -> u16 {
        let mode = OPCODE_TABLE[opcode as usize].mode;
        match mode {
            AddressingMode::Immediate => self.immediate(cycles),
            AddressingMode::ZeroPage => self.zero_page(memory, cycles),
            AddressingMode::ZeroPageX => self.zero_page_x(memory, cycles),
            AddressingMode::ZeroPageY => self.zero_page_y(memory, cycles),
            AddressingMode::Absolute => self.absolute(memory, cycles),
            AddressingMode::AbsoluteX => self.absolute_x(memory, access, cycles),
            AddressingMode::AbsoluteY => self.absolute_y(memory, access, cycles),
            AddressingMode::IndexedIndirect => self.indexed_indirect(memory, cycles),
            AddressingMode::IndirectIndexed => self.indirect_indexed(memory, access, cycles),
            _ => unreachable!("{:?} does not name an operand address", mode),
        }
    }

    /// Immediate: the operand is at PC. Charges the operand fetch tick.
    fn immediate(&mut self, cycles: &mut u64) -> u16 {
        let address = self.pc;
        self.pc = self.pc.wrapping_add(1);
        *cycles += 1;
        address
    }

    /// Zero page: one operand byte names an address in page 0.
    fn zero_page<M: Bus>(&mut self, memory: &mut M, cycles: &mut u64) -> u16 {
        self.fetch_byte(memory, cycles) as u16
    }

    /// Zero page,X: the index add wraps within page 0 and costs a tick.
    fn zero_page_x<M: Bus>(&mut self, memory: &mut M, cycles: &mut u64) -> u16 {
        let base = self.fetch_byte(memory, cycles);
        *cycles += 1;
        base.wrapping_add(self.x) as u16
    }

    /// Zero page,Y: as zero page,X but indexed by Y.
    fn zero_page_y<M: Bus>(&mut self, memory: &mut M, cycles: &mut u64) -> u16 {
        let base = self.fetch_byte(memory, cycles);
        *cycles += 1;
        base.wrapping_add(self.y) as u16
    }

    /// Absolute: a full 16-bit operand address.
    fn absolute<M: Bus>(&mut self, memory: &mut M, cycles: &mut u64) -> u16 {
        self.fetch_word(memory, cycles)
    }

    /// Absolute,X.
    fn absolute_x<M: Bus>(&mut self, memory: &mut M, access: IndexedAccess, cycles: &mut u64) -> u16 {
        let base = self.fetch_word(memory, cycles);
        let address = base.wrapping_add(self.x as u16);
        self.charge_index(base, address, access, cycles);
        address
    }

    /// Absolute,Y.
    fn absolute_y<M: Bus>(&mut self, memory: &mut M, access: IndexedAccess, cycles: &mut u64) -> u16 {
        let base = self.fetch_word(memory, cycles);
        let address = base.wrapping_add(self.y as u16);
        self.charge_index(base, address, access, cycles);
        address
    }

    /// (zp,X): index within page 0, then read the 16-bit target from there.
    /// The pointer's second byte wraps within page 0.
    fn indexed_indirect<M: Bus>(&mut self, memory: &mut M, cycles: &mut u64) -> u16 {
        let pointer = self.fetch_byte(memory, cycles).wrapping_add(self.x);
        *cycles += 1;
        let low = memory.read_byte(pointer as u16, cycles) as u16;
        let high = memory.read_byte(pointer.wrapping_add(1) as u16, cycles) as u16;
        (high << 8) | low
    }

    /// (zp),Y: read the 16-bit base from page 0, then add Y. The pointer's
    /// second byte wraps within page 0.
    fn indirect_indexed<M: Bus>(
        &mut self,
        memory: &mut M,
        access: IndexedAccess,
        cycles: &mut u64,
    ) -> u16 {
        let pointer = self.fetch_byte(memory, cycles);
        let low = memory.read_byte(pointer as u16, cycles) as u16;
        let high = memory.read_byte(pointer.wrapping_add(1) as u16, cycles) as u16;
        let base = (high << 8) | low;
        let address = base.wrapping_add(self.y as u16);
        self.charge_index(base, address, access, cycles);
        address
    }

    fn charge_index(&self, base: u16, effective: u16, access: IndexedAccess, cycles: &mut u64) {
        match access {
            IndexedAccess::Read => {
                if (base & 0xFF00) != (effective & 0xFF00) {
                    *cycles += 1;
                }
            }
            IndexedAccess::Write => *cycles += 1,
        }
    }
}

impl fmt::Display for Cpu {
    /// Renders the register file the way front panels print it:
    /// `PC=1000 SP=FD A=42 X=00 Y=00 P=[n-v-1-b-d-I-z-c] cycles=10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bit(set: bool, label: char) -> char {
            if set {
                label.to_ascii_uppercase()
            } else {
                label
            }
        }
        write!(
            f,
            "PC={:04X} SP={:02X} A={:02X} X={:02X} Y={:02X} P=[{}{}{}{}{}{}{}{}] cycles={}",
            self.pc,
            self.sp,
            self.a,
            self.x,
            self.y,
            bit(self.p.contains(Status::NEGATIVE), 'n'),
            bit(self.p.contains(Status::OVERFLOW), 'v'),
            if self.p.contains(Status::UNUSED) { '1' } else { '0' },
            bit(self.p.contains(Status::BREAK), 'b'),
            bit(self.p.contains(Status::DECIMAL), 'd'),
            bit(self.p.contains(Status::INTERRUPT), 'i'),
            bit(self.p.contains(Status::ZERO), 'z'),
            bit(self.p.contains(Status::CARRY), 'c'),
            self.total_cycles,
        )
    }
}
