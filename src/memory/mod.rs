// Thu Oct 15 2026 - Alex

pub mod address;
pub mod kind;
pub mod traits;

pub use address::Address;
pub use kind::{FunctionFlags, MemoryKind};
pub use traits::AnalysisDb;
