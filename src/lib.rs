// Thu Oct 15 2026 - Alex

pub mod analysis;
pub mod arch;
pub mod binary;
pub mod config;
pub mod memory;
pub mod output;
pub mod utils;

pub use analysis::{Instruction, InstructionCategory, Operand};
pub use arch::GenericOperands;
pub use binary::{BinaryKind, BinaryView, Section};
pub use config::{ConfigError, RenderConfig};
pub use memory::{Address, AnalysisDb, FunctionFlags, MemoryKind};
pub use output::{
    render_function, render_functions, AsmBlock, AstNode, FunctionJob, OperandRenderer, RenderContext, RenderError,
    RenderMode, RenderResult, Renderer, Rendering, Style, StyleRegistry,
};
