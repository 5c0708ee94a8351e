// Thu Oct 15 2026 - Alex

use crate::binary::BinaryView;
use crate::memory::{Address, AnalysisDb};
use crate::output::context::RenderContext;
use crate::output::error::RenderResult;
use crate::output::hooks::{AstNode, OperandRenderer};
use crate::output::renderer::Renderer;
use crate::output::rendering::Rendering;

impl<'a> Renderer<'a> {
    /// One `int<bits>_t name` line per declared local.
    pub fn local_variables(&mut self) {
        let ctx = self.ctx;
        for var in ctx.locals() {
            self.tabs(1);
            self.type_name(&format!("int{}_t ", var.size * 8));
            self.variable(&var.name);
            self.new_line();
        }
    }

    /// Renders `function <name> (<section>) { ... }` around the tree and
    /// finalizes the pass.
    pub fn function(mut self, entry: Address, ast: &dyn AstNode) -> RenderResult<Rendering> {
        log::debug!("rendering function at {}", entry);
        self.ctx.config.validate()?;

        self.new_line();
        self.keyword("function ");
        if !self.label(entry, false, true) {
            self.plain(&entry.to_string());
        }

        let binary = self.binary;
        match binary.section_of(entry) {
            Some(section) => {
                self.plain(" (");
                self.section_name(&section.name);
                self.plain(") {");
            }
            None => self.plain(" {"),
        }
        self.new_line();

        self.local_variables();

        if let Err(e) = ast.dump(&mut self, 1) {
            log::warn!("tree dump failed in function {}: {}", entry, e);
            return Err(e);
        }

        self.plain("}");
        self.finish()
    }
}

/// Renders the function at `ctx.entry`.
pub fn render_function(
    ctx: &RenderContext,
    binary: &dyn BinaryView,
    db: &dyn AnalysisDb,
    arch: &dyn OperandRenderer,
    ast: &dyn AstNode,
) -> RenderResult<Rendering> {
    Renderer::new(ctx, binary, db, arch).function(ctx.entry, ast)
}
