// Thu Oct 15 2026 - Alex

use crate::memory::Address;
use serde::{Deserialize, Serialize};

/// A decoded instruction as handed over by the disassembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub address: Address,
    pub mnemonic: String,
    pub op_str: String,
    pub operands: Vec<Operand>,
    pub bytes: Vec<u8>,
    pub category: InstructionCategory,
    /// Sibling merged into this instruction's rendering (e.g. the compare
    /// feeding a conditional jump).
    pub fused: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Register(String),
    Immediate { value: i64, size: usize },
    Memory { base: Option<String>, index: Option<String>, scale: u8, disp: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionCategory {
    Plain,
    Compare,
    Jump,
    ConditionalJump,
    Call,
    Return,
}

impl Instruction {
    pub fn new(address: Address, mnemonic: &str, op_str: &str) -> Self {
        Self {
            address,
            mnemonic: mnemonic.to_string(),
            op_str: op_str.to_string(),
            operands: Vec::new(),
            bytes: Vec::new(),
            category: InstructionCategory::Plain,
            fused: None,
        }
    }

    pub fn with_operands(mut self, operands: Vec<Operand>) -> Self {
        self.operands = operands;
        self
    }

    pub fn with_bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes = bytes.to_vec();
        self
    }

    pub fn with_category(mut self, category: InstructionCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_fused(mut self, fused: Address) -> Self {
        self.fused = Some(fused);
        self
    }

    pub fn is_branch(&self) -> bool {
        matches!(
            self.category,
            InstructionCategory::Jump | InstructionCategory::ConditionalJump | InstructionCategory::Call
        )
    }

    /// `mnemonic` alone, or `mnemonic op_str` when there are operands.
    pub fn text(&self) -> String {
        if self.operands.is_empty() && self.op_str.is_empty() {
            self.mnemonic.clone()
        } else {
            format!("{} {}", self.mnemonic, self.op_str)
        }
    }
}
