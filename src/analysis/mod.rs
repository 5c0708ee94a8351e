// Thu Oct 15 2026 - Alex

pub mod instruction;

pub use instruction::{Instruction, InstructionCategory, Operand};
