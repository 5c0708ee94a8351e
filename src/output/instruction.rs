// Thu Oct 15 2026 - Alex

use crate::analysis::Instruction;
use crate::binary::Section;
use crate::output::error::RenderResult;
use crate::output::renderer::Renderer;

impl<'a> Renderer<'a> {
    /// Comments stored to appear above the instruction, internal ones first.
    pub fn previous_comments(&mut self, inst: &Instruction, tab: usize) {
        let db = self.db;
        let groups = [
            (db.internal_previous_comments(inst.address), true),
            (db.user_previous_comments(inst.address), false),
        ];

        for (comments, internal) in groups {
            if comments.is_empty() {
                continue;
            }
            if self.ctx.is_dump() && !self.is_last_two_lines_empty() {
                self.new_line();
            }
            for comment in comments {
                self.tabs(tab);
                let text = format!("; {}", comment);
                if internal {
                    self.internal_comment(&text);
                } else {
                    self.user_comment(&text);
                }
                self.new_line();
            }
        }
    }

    /// Marks where the instruction ends, then appends the stored inline
    /// comments.
    pub fn inline_comment(&mut self, inst: &Instruction) {
        self.mark_instruction_boundary();
        let db = self.db;

        if let Some(comment) = db.user_inline_comment(inst.address) {
            self.plain(" ");
            self.user_comment(&format!("; {}", comment));
        }
        if let Some(comment) = db.internal_inline_comment(inst.address) {
            self.plain(" ");
            self.internal_comment(&format!("; {}", comment));
        }
    }

    pub fn raw_bytes(&mut self, inst: &Instruction, commented: bool) {
        if !self.ctx.config.show_bytes {
            return;
        }
        if commented {
            if self.ctx.config.comments {
                for b in &inst.bytes {
                    self.comment(&format!("{:x} ", b));
                }
            }
        } else {
            for b in &inst.bytes {
                self.comment(&format!("{:02x} ", b));
            }
        }
    }

    fn commented_instruction(&mut self, inst: &Instruction, tab: usize, section: Option<&Section>) {
        self.label_and_address(inst.address, tab, section, true, true);
        self.set_line(inst.address);
        self.raw_bytes(inst, true);
        self.comment(&inst.text());
        self.inline_comment(inst);
        self.new_line();
    }

    /// Bare address of an instruction that is the target of a jump. Used in
    /// place of fused instructions when comments are off.
    pub fn address_if_needed(&mut self, inst: &Instruction, tab: usize, section: Option<&Section>) {
        if self.ctx.color_of(inst.address).is_some() {
            self.tabs(tab);
            self.address(inst.address, section, true, false);
        }
    }

    pub fn comment_fused(
        &mut self,
        jump: Option<&Instruction>,
        fused: Option<&Instruction>,
        tab: usize,
        section: Option<&Section>,
    ) -> RenderResult<()> {
        if self.ctx.config.comments {
            if let Some(fused) = fused {
                self.instruction(fused, tab, section, true)?;
            }
            if let Some(jump) = jump {
                self.instruction(jump, tab, section, true)?;
            }
        } else {
            if let Some(fused) = fused {
                self.address_if_needed(fused, tab, section);
            }
            if let Some(jump) = jump {
                self.address_if_needed(jump, tab, section);
            }
        }
        Ok(())
    }

    /// One instruction line. With `commented`, the instruction is echoed as a
    /// comment above the construct it was merged into.
    pub fn instruction(
        &mut self,
        inst: &Instruction,
        tab: usize,
        section: Option<&Section>,
        commented: bool,
    ) -> RenderResult<()> {
        self.previous_comments(inst, tab);

        if commented {
            self.commented_instruction(inst, tab, section);
            return Ok(());
        }

        if self.ctx.is_fused(inst.address) {
            return Ok(());
        }

        if self.ctx.config.print_labels {
            self.label_and_address(inst.address, tab, section, true, false);
            self.raw_bytes(inst, false);
        } else {
            self.tabs(tab);
            self.address(inst.address, section, true, false);
        }

        self.set_line(inst.address);

        let arch = self.arch;
        if let Err(e) = arch.instruction(self, inst, tab) {
            log::warn!("operand rendering failed at {}: {}", inst.address, e);
            return Err(e);
        }

        self.inline_comment(inst);
        self.new_line();
        Ok(())
    }

    /// Straight-line block. Without an explicit section each instruction's
    /// own section is looked up.
    pub fn block(&mut self, insts: &[Instruction], tab: usize, section: Option<&Section>) -> RenderResult<()> {
        let binary = self.binary;
        for inst in insts {
            let section = section.or_else(|| binary.section_of(inst.address));
            self.instruction(inst, tab, section, false)?;
        }
        Ok(())
    }

    pub fn if_condition(&mut self, jump: &Instruction, fused: Option<&Instruction>) -> RenderResult<()> {
        let arch = self.arch;
        arch.condition(self, jump, fused)
    }

    pub fn operand(&mut self, inst: &Instruction, index: usize, hexa: bool, show_deref: bool) -> RenderResult<bool> {
        let arch = self.arch;
        arch.operand(self, inst, index, hexa, show_deref)
    }
}
