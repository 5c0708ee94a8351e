// Thu Oct 15 2026 - Alex

use crate::memory::{Address, FunctionFlags, MemoryKind};

/// Read-only view of the analysis database: memory kinds, cross-references,
/// function attributes and stored annotations.
pub trait AnalysisDb: Send + Sync {
    fn kind_of(&self, addr: Address) -> MemoryKind;
    fn is_xref(&self, addr: Address) -> bool;
    fn function_flags(&self, addr: Address) -> Option<FunctionFlags>;

    fn internal_previous_comments(&self, addr: Address) -> &[String];
    fn user_previous_comments(&self, addr: Address) -> &[String];
    fn internal_inline_comment(&self, addr: Address) -> Option<&str>;
    fn user_inline_comment(&self, addr: Address) -> Option<&str>;

    fn is_noreturn(&self, addr: Address) -> bool {
        self.function_flags(addr)
            .map(|flags| flags.contains(FunctionFlags::NORETURN))
            .unwrap_or(false)
    }
}
