// Thu Oct 15 2026 - Alex

use crate::binary::BinaryView;
use crate::memory::AnalysisDb;
use crate::output::context::RenderContext;
use crate::output::error::RenderResult;
use crate::output::hooks::{AstNode, OperandRenderer};
use crate::output::renderer::Renderer;
use crate::output::rendering::Rendering;
use crate::output::style::StyleRegistry;
use rayon::prelude::*;

pub struct FunctionJob<'a> {
    pub context: RenderContext,
    pub ast: &'a dyn AstNode,
}

impl<'a> FunctionJob<'a> {
    pub fn new(context: RenderContext, ast: &'a dyn AstNode) -> Self {
        Self { context, ast }
    }
}

/// Renders every job on the rayon pool. Each pass owns its buffer and index;
/// the collaborators and the style registry are shared read-only. Results
/// keep the order of `jobs`.
pub fn render_functions(
    jobs: &[FunctionJob<'_>],
    binary: &dyn BinaryView,
    db: &dyn AnalysisDb,
    arch: &dyn OperandRenderer,
    styles: &StyleRegistry,
) -> Vec<RenderResult<Rendering>> {
    log::debug!("rendering {} functions", jobs.len());
    jobs.par_iter()
        .map(|job| Renderer::with_styles(&job.context, binary, db, arch, styles).function(job.context.entry, job.ast))
        .collect()
}
