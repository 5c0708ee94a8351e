// Thu Oct 15 2026 - Alex

use crate::analysis::{Instruction, InstructionCategory, Operand};
use crate::output::error::RenderResult;
use crate::output::hooks::OperandRenderer;
use crate::output::immediate::ImmOptions;
use crate::output::renderer::Renderer;
use itertools::Itertools;

/// Architecture-neutral operand text: `mnemonic op, op, ...`. Immediates go
/// through the immediate formatter and stack slots with a declared variable
/// print the variable name.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericOperands;

impl GenericOperands {
    fn memory_text(base: &Option<String>, index: &Option<String>, scale: u8, disp: i64) -> String {
        let mut parts = Vec::new();
        if let Some(base) = base {
            parts.push(base.clone());
        }
        if let Some(index) = index {
            if scale > 1 {
                parts.push(format!("{}*{}", index, scale));
            } else {
                parts.push(index.clone());
            }
        }

        let mut text = parts.iter().join(" + ");
        if disp != 0 || text.is_empty() {
            if text.is_empty() {
                text = format!("0x{:x}", disp);
            } else if disp < 0 {
                text.push_str(&format!(" - 0x{:x}", disp.unsigned_abs()));
            } else {
                text.push_str(&format!(" + 0x{:x}", disp));
            }
        }
        text
    }
}

impl OperandRenderer for GenericOperands {
    fn instruction(&self, out: &mut Renderer<'_>, inst: &Instruction, _tab: usize) -> RenderResult<bool> {
        match inst.category {
            InstructionCategory::Call | InstructionCategory::Return => out.retcall(&inst.mnemonic),
            _ => out.plain(&inst.mnemonic),
        }

        if inst.operands.is_empty() {
            if !inst.op_str.is_empty() {
                out.plain(" ");
                out.plain(&inst.op_str);
            }
            return Ok(false);
        }

        out.plain(" ");
        let mut modified = false;
        for i in 0..inst.operands.len() {
            if i > 0 {
                out.plain(", ");
            }
            modified |= self.operand(out, inst, i, false, true)?;
        }

        if modified && out.config().comments {
            out.comment(&format!(" # {}", inst.text()));
        }
        Ok(modified)
    }

    fn operand(
        &self,
        out: &mut Renderer<'_>,
        inst: &Instruction,
        index: usize,
        hexa: bool,
        show_deref: bool,
    ) -> RenderResult<bool> {
        let Some(operand) = inst.operands.get(index) else {
            return Ok(false);
        };

        match operand {
            Operand::Register(name) => {
                out.plain(name);
                Ok(false)
            }
            Operand::Immediate { value, size } => {
                let opts = if inst.is_branch() {
                    ImmOptions { hexa, ..ImmOptions::branch_target() }
                } else {
                    ImmOptions { hexa, ..ImmOptions::default() }
                };
                out.immediate(*value, *size, None, opts);
                Ok(false)
            }
            Operand::Memory { base, index, scale, disp } => {
                if index.is_none() && base.is_some() {
                    if let Some(name) = out.variable_at(*disp) {
                        out.variable(name);
                        return Ok(true);
                    }
                }
                let text = Self::memory_text(base, index, *scale, *disp);
                if show_deref {
                    out.plain(&format!("[{}]", text));
                } else {
                    out.plain(&text);
                }
                Ok(false)
            }
        }
    }

    fn condition(&self, out: &mut Renderer<'_>, jump: &Instruction, fused: Option<&Instruction>) -> RenderResult<()> {
        out.keyword(&jump.mnemonic);
        out.plain("(");
        if let Some(fused) = fused {
            out.plain(&fused.text());
        }
        out.plain(")");
        Ok(())
    }
}
