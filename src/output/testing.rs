// Thu Oct 15 2026 - Alex

use crate::analysis::{Instruction, InstructionCategory, Operand};
use crate::binary::{BinaryKind, BinaryView, Section};
use crate::memory::{Address, AnalysisDb, FunctionFlags, MemoryKind};
use crate::output::hooks::OperandRenderer;
use ahash::{AHashMap, AHashSet};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct FakeBinary {
    kind: BinaryKind,
    raw_base: u64,
    sections: Vec<Section>,
    symbols: AHashMap<Address, String>,
    strings: AHashMap<Address, String>,
}

impl FakeBinary {
    pub fn new(kind: BinaryKind) -> Self {
        init_logging();
        Self {
            kind,
            raw_base: 0,
            sections: Vec::new(),
            symbols: AHashMap::new(),
            strings: AHashMap::new(),
        }
    }

    pub fn with_raw_base(mut self, base: u64) -> Self {
        self.raw_base = base;
        self
    }

    pub fn with_section(mut self, name: &str, start: u64, size: u64, is_data: bool) -> Self {
        self.sections.push(Section::new(name, Address::new(start), size, is_data));
        self
    }

    pub fn with_symbol(mut self, addr: u64, name: &str) -> Self {
        self.symbols.insert(Address::new(addr), name.to_string());
        self
    }

    pub fn with_string(mut self, addr: u64, quoted: &str) -> Self {
        self.strings.insert(Address::new(addr), quoted.to_string());
        self
    }
}

impl BinaryView for FakeBinary {
    fn section_of(&self, addr: Address) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(addr))
    }

    fn symbol_at(&self, addr: Address) -> Option<&str> {
        self.symbols.get(&addr).map(|s| s.as_str())
    }

    fn string_at(&self, addr: Address, max_len: usize) -> String {
        self.strings
            .get(&addr)
            .map(|s| s.chars().take(max_len + 2).collect())
            .unwrap_or_default()
    }

    fn kind(&self) -> BinaryKind {
        self.kind
    }

    fn raw_base(&self) -> u64 {
        self.raw_base
    }
}

/// Analysis database where every address without an explicit kind is data.
#[derive(Default)]
pub struct FakeDb {
    kinds: AHashMap<Address, MemoryKind>,
    xrefs: AHashSet<Address>,
    flags: AHashMap<Address, FunctionFlags>,
    internal_previous: AHashMap<Address, Vec<String>>,
    user_previous: AHashMap<Address, Vec<String>>,
    internal_inline: AHashMap<Address, String>,
    user_inline: AHashMap<Address, String>,
}

impl FakeDb {
    pub fn new() -> Self {
        init_logging();
        Self::default()
    }

    pub fn with_kind(mut self, addr: u64, kind: MemoryKind) -> Self {
        self.kinds.insert(Address::new(addr), kind);
        self
    }

    pub fn with_xref(mut self, addr: u64) -> Self {
        self.xrefs.insert(Address::new(addr));
        self
    }

    pub fn with_flags(mut self, addr: u64, flags: FunctionFlags) -> Self {
        self.flags.insert(Address::new(addr), flags);
        self
    }

    pub fn with_internal_previous(mut self, addr: u64, comment: &str) -> Self {
        self.internal_previous.entry(Address::new(addr)).or_default().push(comment.to_string());
        self
    }

    pub fn with_user_previous(mut self, addr: u64, comment: &str) -> Self {
        self.user_previous.entry(Address::new(addr)).or_default().push(comment.to_string());
        self
    }

    pub fn with_internal_inline(mut self, addr: u64, comment: &str) -> Self {
        self.internal_inline.insert(Address::new(addr), comment.to_string());
        self
    }

    pub fn with_user_inline(mut self, addr: u64, comment: &str) -> Self {
        self.user_inline.insert(Address::new(addr), comment.to_string());
        self
    }
}

impl AnalysisDb for FakeDb {
    fn kind_of(&self, addr: Address) -> MemoryKind {
        self.kinds.get(&addr).copied().unwrap_or(MemoryKind::Data)
    }

    fn is_xref(&self, addr: Address) -> bool {
        self.xrefs.contains(&addr)
    }

    fn function_flags(&self, addr: Address) -> Option<FunctionFlags> {
        self.flags.get(&addr).copied()
    }

    fn internal_previous_comments(&self, addr: Address) -> &[String] {
        self.internal_previous.get(&addr).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn user_previous_comments(&self, addr: Address) -> &[String] {
        self.user_previous.get(&addr).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn internal_inline_comment(&self, addr: Address) -> Option<&str> {
        self.internal_inline.get(&addr).map(|s| s.as_str())
    }

    fn user_inline_comment(&self, addr: Address) -> Option<&str> {
        self.user_inline.get(&addr).map(|s| s.as_str())
    }
}

/// Backend with no hooks implemented.
pub struct NoArch;

impl OperandRenderer for NoArch {}

pub fn mov_eax_1(addr: u64) -> Instruction {
    Instruction::new(Address::new(addr), "mov", "eax, 1")
        .with_bytes(&[0xb8, 0x01, 0x00, 0x00, 0x00])
        .with_operands(vec![
            Operand::Register("eax".to_string()),
            Operand::Immediate { value: 1, size: 4 },
        ])
}

pub fn ret(addr: u64) -> Instruction {
    Instruction::new(Address::new(addr), "ret", "")
        .with_bytes(&[0xc3])
        .with_category(InstructionCategory::Return)
}
