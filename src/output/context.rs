// Thu Oct 15 2026 - Alex

use crate::config::RenderConfig;
use crate::memory::Address;
use crate::output::style::Style;
use ahash::{AHashMap, AHashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Address-oriented listing with every synthesized label.
    Dump,
    /// Reader-oriented pseudo-C; code labels only when a symbol exists.
    Decompiled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVariable {
    pub size: usize,
    pub name: String,
    pub stack_offset: Option<i64>,
}

/// Per-pass, read-only inputs of a render.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub mode: RenderMode,
    pub entry: Address,
    pub config: RenderConfig,
    addr_color: AHashMap<Address, Style>,
    fused: AHashSet<Address>,
    locals: Vec<LocalVariable>,
    locals_by_offset: AHashMap<i64, usize>,
}

impl RenderContext {
    pub fn new(mode: RenderMode, entry: Address, config: RenderConfig) -> Self {
        Self {
            mode,
            entry,
            config,
            addr_color: AHashMap::new(),
            fused: AHashSet::new(),
            locals: Vec::new(),
            locals_by_offset: AHashMap::new(),
        }
    }

    pub fn dump(entry: Address, config: RenderConfig) -> Self {
        Self::new(RenderMode::Dump, entry, config)
    }

    pub fn decompiled(entry: Address, config: RenderConfig) -> Self {
        Self::new(RenderMode::Decompiled, entry, config)
    }

    pub fn with_color(mut self, addr: Address, style: Style) -> Self {
        self.addr_color.insert(addr, style);
        self
    }

    pub fn with_fused(mut self, addr: Address) -> Self {
        self.fused.insert(addr);
        self
    }

    pub fn with_local(mut self, size: usize, name: &str, stack_offset: Option<i64>) -> Self {
        if let Some(offset) = stack_offset {
            self.locals_by_offset.insert(offset, self.locals.len());
        }
        self.locals.push(LocalVariable {
            size,
            name: name.to_string(),
            stack_offset,
        });
        self
    }

    /// Pairs byte widths with names in order; extra entries on either side
    /// are ignored.
    pub fn with_locals(mut self, sizes: &[usize], names: &[String]) -> Self {
        for (size, name) in sizes.iter().zip(names) {
            self = self.with_local(*size, name, None);
        }
        self
    }

    pub fn is_dump(&self) -> bool {
        self.mode == RenderMode::Dump
    }

    pub fn color_of(&self, addr: Address) -> Option<Style> {
        self.addr_color.get(&addr).copied()
    }

    pub fn is_fused(&self, addr: Address) -> bool {
        self.fused.contains(&addr)
    }

    pub fn locals(&self) -> &[LocalVariable] {
        &self.locals
    }

    pub fn variable_at(&self, stack_offset: i64) -> Option<&str> {
        self.locals_by_offset
            .get(&stack_offset)
            .and_then(|idx| self.locals.get(*idx))
            .map(|var| var.name.as_str())
    }
}
