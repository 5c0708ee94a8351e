// Thu Oct 15 2026 - Alex

pub mod section;

pub use section::{BinaryKind, Section};

use crate::memory::Address;

/// Read-only view of the loaded file: sections, symbols and string data.
pub trait BinaryView: Send + Sync {
    fn section_of(&self, addr: Address) -> Option<&Section>;
    fn symbol_at(&self, addr: Address) -> Option<&str>;
    /// Quoted string found at `addr`, at most `max_len` characters. An empty
    /// result, or `""`, means nothing printable was found.
    fn string_at(&self, addr: Address, max_len: usize) -> String;
    fn kind(&self) -> BinaryKind;
    fn raw_base(&self) -> u64;

    fn has_symbol(&self, addr: Address) -> bool {
        self.symbol_at(addr).is_some()
    }
}
