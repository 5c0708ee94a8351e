// Thu Oct 15 2026 - Alex

use crate::memory::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub start: Address,
    pub end: Address,
    pub is_data: bool,
}

impl Section {
    pub fn new(name: &str, start: Address, size: u64, is_data: bool) -> Self {
        Self {
            name: name.to_string(),
            start,
            end: start + size,
            is_data,
        }
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr.is_within_range(self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryKind {
    /// Headerless image loaded at a configured base.
    Raw,
    Elf,
    Pe,
    MachO,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_bounds() {
        let text = Section::new(".text", Address::new(0x1000), 0x100, false);
        assert!(text.contains(Address::new(0x1000)));
        assert!(text.contains(Address::new(0x10ff)));
        assert!(!text.contains(Address::new(0x1100)));
    }

    #[test]
    fn test_section_at_top_of_address_space() {
        let top = Section::new("top", Address::new(u64::MAX - 0xf), 0x100, true);
        assert_eq!(top.end, Address::new(u64::MAX));
        assert!(top.contains(Address::new(u64::MAX - 1)));
        assert!(!top.contains(Address::new(u64::MAX - 0x10)));
    }
}
