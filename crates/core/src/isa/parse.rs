//! Text-descriptor decoding.
//!
//! A process descriptor is a text resource whose first line is the integer
//! arrival time; each subsequent line is `opcode operand_list` with a
//! comma-separated operand list. Line order defines the program's 1-based
//! instruction indices. Decoding is strict: an unknown mnemonic or a
//! malformed operand aborts the load with a line-precise error.

use crate::common::{Reg, SimError, SimTime};

use super::instruction::{Instruction, Program};

/// Decodes a full descriptor into its arrival time and program.
///
/// Blank lines are ignored; all remaining lines after the first must decode
/// to instructions.
///
/// # Errors
///
/// Returns [`SimError::MalformedDescriptor`] for a missing or non-integer
/// arrival line and for malformed operands, and
/// [`SimError::UnsupportedOpcode`] for a mnemonic outside the instruction
/// set.
pub fn parse_descriptor(text: &str) -> Result<(SimTime, Program), SimError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line, arrival) = lines.next().ok_or_else(|| SimError::MalformedDescriptor {
        line: 1,
        reason: "descriptor is empty; expected an arrival time".into(),
    })?;
    let arrival_time: SimTime = arrival.parse().map_err(|_| SimError::MalformedDescriptor {
        line,
        reason: format!("arrival time `{arrival}` is not an integer"),
    })?;

    let mut instructions = Vec::new();
    for (line, text) in lines {
        instructions.push(parse_instruction(text, line)?);
    }
    Ok((arrival_time, Program::new(instructions)))
}

/// Decodes one `opcode operand_list` line.
///
/// # Errors
///
/// Returns [`SimError::UnsupportedOpcode`] for an unknown mnemonic and
/// [`SimError::MalformedDescriptor`] for operand defects.
pub fn parse_instruction(text: &str, line: usize) -> Result<Instruction, SimError> {
    let mut parts = text.splitn(2, char::is_whitespace);
    let mnemonic = parts.next().unwrap_or_default();
    let operands: Vec<&str> = parts
        .next()
        .map(|list| list.split(',').map(str::trim).collect())
        .unwrap_or_default();

    let inst = match mnemonic {
        "ld" => Instruction::Ld {
            rd: reg(&operands, 0, line)?,
            addr: address(&operands, 1, line)?,
        },
        "st" => Instruction::St {
            rs: reg(&operands, 0, line)?,
            addr: address(&operands, 1, line)?,
        },
        "ldi" => Instruction::Ldi {
            rd: reg(&operands, 0, line)?,
            imm: immediate(&operands, 1, line)?,
        },
        "add" => Instruction::Add {
            rd: reg(&operands, 0, line)?,
            rs1: reg(&operands, 1, line)?,
            rs2: reg(&operands, 2, line)?,
        },
        "addi" => Instruction::Addi {
            rd: reg(&operands, 0, line)?,
            rs1: reg(&operands, 1, line)?,
            imm: immediate(&operands, 2, line)?,
        },
        "sub" => Instruction::Sub {
            rd: reg(&operands, 0, line)?,
            rs1: reg(&operands, 1, line)?,
            rs2: reg(&operands, 2, line)?,
        },
        "and" => Instruction::And {
            rd: reg(&operands, 0, line)?,
            rs1: reg(&operands, 1, line)?,
            rs2: reg(&operands, 2, line)?,
        },
        "or" => Instruction::Or {
            rd: reg(&operands, 0, line)?,
            rs1: reg(&operands, 1, line)?,
            rs2: reg(&operands, 2, line)?,
        },
        "xor" => Instruction::Xor {
            rd: reg(&operands, 0, line)?,
            rs1: reg(&operands, 1, line)?,
            rs2: reg(&operands, 2, line)?,
        },
        "sll" => Instruction::Sll {
            rd: reg(&operands, 0, line)?,
            rs1: reg(&operands, 1, line)?,
            shamt: shift_amount(&operands, 2, line)?,
        },
        "srl" => Instruction::Srl {
            rd: reg(&operands, 0, line)?,
            rs1: reg(&operands, 1, line)?,
            shamt: shift_amount(&operands, 2, line)?,
        },
        other => return Err(SimError::UnsupportedOpcode(other.to_owned())),
    };

    if operands.len() > operand_count(inst) {
        return Err(SimError::MalformedDescriptor {
            line,
            reason: format!(
                "`{mnemonic}` takes {} operands, found {}",
                operand_count(inst),
                operands.len()
            ),
        });
    }
    Ok(inst)
}

const fn operand_count(inst: Instruction) -> usize {
    match inst {
        Instruction::Ld { .. } | Instruction::St { .. } | Instruction::Ldi { .. } => 2,
        _ => 3,
    }
}

fn operand<'a>(operands: &[&'a str], index: usize, line: usize) -> Result<&'a str, SimError> {
    operands
        .get(index)
        .copied()
        .ok_or_else(|| SimError::MalformedDescriptor {
            line,
            reason: format!("missing operand {}", index + 1),
        })
}

fn reg(operands: &[&str], index: usize, line: usize) -> Result<Reg, SimError> {
    let text = operand(operands, index, line)?;
    let raw: u8 = text.parse().map_err(|_| SimError::MalformedDescriptor {
        line,
        reason: format!("register index `{text}` is not an integer"),
    })?;
    Reg::new(raw).ok_or_else(|| SimError::MalformedDescriptor {
        line,
        reason: format!("register index {raw} is out of range"),
    })
}

fn address(operands: &[&str], index: usize, line: usize) -> Result<u64, SimError> {
    let text = operand(operands, index, line)?;
    text.parse().map_err(|_| SimError::MalformedDescriptor {
        line,
        reason: format!("store address `{text}` is not an unsigned integer"),
    })
}

fn immediate(operands: &[&str], index: usize, line: usize) -> Result<i64, SimError> {
    let text = operand(operands, index, line)?;
    text.parse().map_err(|_| SimError::MalformedDescriptor {
        line,
        reason: format!("immediate `{text}` is not an integer"),
    })
}

fn shift_amount(operands: &[&str], index: usize, line: usize) -> Result<u32, SimError> {
    let text = operand(operands, index, line)?;
    let raw: u32 = text.parse().map_err(|_| SimError::MalformedDescriptor {
        line,
        reason: format!("shift amount `{text}` is not an unsigned integer"),
    })?;
    if raw >= 64 {
        return Err(SimError::MalformedDescriptor {
            line,
            reason: format!("shift amount {raw} exceeds the register width"),
        });
    }
    Ok(raw)
}
