//! Execution engine.
//!
//! A minimal interpreter for the simulated instruction set. It provides:
//! 1. **State:** A sixteen-slot register file and an address-keyed integer
//!    store.
//! 2. **Execution:** Per-instruction dispatch as a total match over the closed
//!    instruction enum, with wrapping integer arithmetic.
//! 3. **Slicing:** Bounded process execution under an optional instruction
//!    quantum and an optional preemption predicate.
//! 4. **Dry runs:** A counting mode that measures burst length without
//!    touching registers, store, clock, or process bookkeeping.
//!
//! Real-mode execution resumes each process from its persisted program
//! counter, so successive slices make forward progress proportional to the
//! instructions charged against simulated time.

use std::collections::BTreeMap;

use crate::common::RegisterFile;
use crate::isa::Instruction;
use crate::process::Process;

/// Simulated clock.
pub mod clock;

pub use clock::SimClock;

/// Execution mode for an engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Apply instruction effects and advance the shared clock.
    Real,
    /// Count instructions only; mutate nothing.
    DryRun,
}

/// Interpreter state: register file plus address-keyed store.
#[derive(Debug, Clone, Default)]
pub struct ExecutionEngine {
    regs: RegisterFile,
    store: BTreeMap<u64, i64>,
}

impl ExecutionEngine {
    /// Creates an engine with zeroed registers and an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Reads a store cell; unwritten addresses read as zero.
    pub fn load(&self, addr: u64) -> i64 {
        self.store.get(&addr).copied().unwrap_or_default()
    }

    /// Clears registers and store for a fresh run.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.store.clear();
    }

    /// Executes a single instruction.
    ///
    /// In [`ExecMode::DryRun`] the instruction is a no-op whose only purpose
    /// is to be counted by the caller. The match is total: every decodable
    /// instruction executes.
    pub fn execute_instruction(&mut self, inst: Instruction, mode: ExecMode) {
        if mode == ExecMode::DryRun {
            return;
        }
        match inst {
            Instruction::Ld { rd, addr } => self.regs.write(rd, self.load(addr)),
            Instruction::St { rs, addr } => {
                let _ = self.store.insert(addr, self.regs.read(rs));
            }
            Instruction::Ldi { rd, imm } => self.regs.write(rd, imm),
            Instruction::Add { rd, rs1, rs2 } => {
                let value = self.regs.read(rs1).wrapping_add(self.regs.read(rs2));
                self.regs.write(rd, value);
            }
            Instruction::Addi { rd, rs1, imm } => {
                let value = self.regs.read(rs1).wrapping_add(imm);
                self.regs.write(rd, value);
            }
            Instruction::Sub { rd, rs1, rs2 } => {
                let value = self.regs.read(rs1).wrapping_sub(self.regs.read(rs2));
                self.regs.write(rd, value);
            }
            Instruction::And { rd, rs1, rs2 } => {
                self.regs.write(rd, self.regs.read(rs1) & self.regs.read(rs2));
            }
            Instruction::Or { rd, rs1, rs2 } => {
                self.regs.write(rd, self.regs.read(rs1) | self.regs.read(rs2));
            }
            Instruction::Xor { rd, rs1, rs2 } => {
                self.regs.write(rd, self.regs.read(rs1) ^ self.regs.read(rs2));
            }
            Instruction::Sll { rd, rs1, shamt } => {
                let value = (self.regs.read(rs1) as u64) << shamt;
                self.regs.write(rd, value as i64);
            }
            Instruction::Srl { rd, rs1, shamt } => {
                // Logical shift: operate on the unsigned representation.
                let value = (self.regs.read(rs1) as u64) >> shamt;
                self.regs.write(rd, value as i64);
            }
        }
    }

    /// Executes a bounded slice of a process's program.
    ///
    /// Execution stops at the first of: natural completion (the program
    /// counter no longer indexes an instruction), `quantum` instructions
    /// executed in this call, or the `preempt` predicate returning true
    /// before the next instruction.
    ///
    /// In [`ExecMode::Real`] the shared clock advances one tick per
    /// instruction and the process's program counter is persisted, so the
    /// next call resumes where this one stopped. In [`ExecMode::DryRun`] the
    /// full program is walked from index 1 with a local cursor and neither
    /// the clock nor any process or engine state is mutated.
    ///
    /// # Arguments
    ///
    /// * `clock` - The run-wide simulated clock.
    /// * `process` - The process whose program is executed.
    /// * `quantum` - Maximum instructions for this call, if bounded.
    /// * `preempt` - Cooperative preemption predicate, checked each step.
    /// * `mode` - Real execution or counting dry run.
    ///
    /// # Returns
    ///
    /// The number of instructions executed in this call.
    pub fn execute_process(
        &mut self,
        clock: &mut SimClock,
        process: &mut Process,
        quantum: Option<u64>,
        preempt: Option<&dyn Fn(&Process) -> bool>,
        mode: ExecMode,
    ) -> u64 {
        let mut cursor = match mode {
            ExecMode::Real => process.pc,
            ExecMode::DryRun => 1,
        };
        let mut executed = 0u64;

        loop {
            if quantum.is_some_and(|q| executed >= q) {
                break;
            }
            if preempt.is_some_and(|check| check(process)) {
                break;
            }
            let Some(inst) = process.program.get(cursor) else {
                break;
            };
            self.execute_instruction(inst, mode);
            cursor += 1;
            executed += 1;
            if mode == ExecMode::Real {
                clock.advance(1);
            }
        }

        if mode == ExecMode::Real {
            process.pc = cursor;
        }
        executed
    }
}
