// Thu Oct 15 2026 - Alex

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryKind {
    Function,
    Code,
    Unknown,
    Data,
    /// No type information is recorded for the address.
    Unmapped,
}

impl MemoryKind {
    pub fn is_function(&self) -> bool {
        matches!(self, MemoryKind::Function)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FunctionFlags: u32 {
        const NORETURN = 0b0001;
    }
}
