// Thu Oct 15 2026 - Alex

use crate::analysis::Instruction;
use crate::output::error::{RenderError, RenderResult};
use crate::output::renderer::Renderer;

/// Architecture-specific operand text. One implementation is chosen per
/// render pass; every hook left unimplemented aborts the pass.
pub trait OperandRenderer: Send + Sync {
    /// Mnemonic and operands of `inst`. Returns true when the text differs
    /// from the decoder's own (e.g. a stack slot was replaced by a variable).
    fn instruction(&self, out: &mut Renderer<'_>, inst: &Instruction, tab: usize) -> RenderResult<bool> {
        let _ = (out, inst, tab);
        Err(RenderError::NotImplemented { hook: "instruction" })
    }

    fn operand(
        &self,
        out: &mut Renderer<'_>,
        inst: &Instruction,
        index: usize,
        hexa: bool,
        show_deref: bool,
    ) -> RenderResult<bool> {
        let _ = (out, inst, index, hexa, show_deref);
        Err(RenderError::NotImplemented { hook: "operand" })
    }

    /// Condition of an `if` built from a conditional jump and the compare
    /// fused into it.
    fn condition(&self, out: &mut Renderer<'_>, jump: &Instruction, fused: Option<&Instruction>) -> RenderResult<()> {
        let _ = (out, jump, fused);
        Err(RenderError::NotImplemented { hook: "condition" })
    }
}

/// A node of the reconstructed control-flow tree.
pub trait AstNode: Send + Sync {
    fn dump(&self, out: &mut Renderer<'_>, tab: usize) -> RenderResult<()> {
        let _ = (out, tab);
        Err(RenderError::NotImplemented { hook: "dump" })
    }
}

/// Straight-line run of instructions.
#[derive(Debug, Clone, Default)]
pub struct AsmBlock {
    pub instructions: Vec<Instruction>,
}

impl AsmBlock {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl AstNode for AsmBlock {
    fn dump(&self, out: &mut Renderer<'_>, tab: usize) -> RenderResult<()> {
        out.block(&self.instructions, tab, None)
    }
}
