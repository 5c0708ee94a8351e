// Thu Oct 15 2026 - Alex

use crate::binary::Section;
use crate::memory::{Address, MemoryKind};
use crate::output::renderer::Renderer;
use crate::output::style::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub style: Style,
    pub kind: MemoryKind,
    pub is_symbol: bool,
}

impl<'a> Renderer<'a> {
    /// Label text and style for `addr`, if one applies. A symbol always wins
    /// over a synthesized name; an override color is applied last.
    pub fn resolve_label(&self, addr: Address) -> Option<Label> {
        self.resolve(addr, false)
    }

    /// Like [`resolve_label`](Self::resolve_label), but a synthesized name
    /// other than `sub_` needs a cross-reference to `addr`.
    pub fn resolve_referenced_label(&self, addr: Address) -> Option<Label> {
        self.resolve(addr, true)
    }

    fn resolve(&self, addr: Address, require_xref: bool) -> Option<Label> {
        let kind = self.db.kind_of(addr);
        let dump = self.ctx.is_dump();

        let (text, mut style, is_symbol) = match self.binary.symbol_at(addr) {
            Some(name) => (name.to_string(), Style::Symbol, true),
            None if require_xref && !kind.is_function() && !self.db.is_xref(addr) => return None,
            None => match kind {
                MemoryKind::Function => (format!("sub_{:x}", addr), Style::Symbol, false),
                MemoryKind::Code if dump => (format!("loc_{:x}", addr), Style::CodeAddress, false),
                MemoryKind::Unknown => (format!("unk_{:x}", addr), Style::Unknown, false),
                _ => return None,
            },
        };

        if !dump {
            style = if is_symbol || kind.is_function() {
                if text.starts_with("loop_") || text.starts_with("ret_") {
                    Style::Address
                } else {
                    Style::Symbol
                }
            } else {
                Style::Default
            };
        }

        if let Some(color) = self.ctx.color_of(addr) {
            style = color;
        }

        if !is_symbol {
            log::trace!("synthesized label {} for {}", text, addr);
        }

        Some(Label {
            text,
            style,
            kind,
            is_symbol,
        })
    }

    /// Emits the label for `addr`. Returns false, emitting nothing, when no
    /// label applies.
    pub fn label(&mut self, addr: Address, print_colon: bool, nocolor: bool) -> bool {
        match self.resolve_label(addr) {
            Some(label) => self.emit_label(addr, label, print_colon, nocolor),
            None => false,
        }
    }

    /// Label of an address used as an operand value. Unreferenced locations
    /// stay numbers.
    pub fn operand_label(&mut self, addr: Address) -> bool {
        match self.resolve_referenced_label(addr) {
            Some(label) => self.emit_label(addr, label, false, false),
            None => false,
        }
    }

    fn emit_label(&mut self, addr: Address, label: Label, print_colon: bool, nocolor: bool) -> bool {
        if label.kind.is_function() && self.db.is_noreturn(addr) {
            self.comment("__noreturn__ ");
        }

        let mut text = label.text;
        if print_colon {
            text.push(':');
        }
        let style = if nocolor { Style::Default } else { label.style };
        self.buf.push(&text, style, false);
        true
    }

    pub fn label_or_address(&mut self, addr: Address, tab: usize, section: Option<&Section>, print_colon: bool) {
        self.tabs(tab);
        if !self.label(addr, print_colon, false) {
            self.address(addr, section, print_colon, false);
        }
    }

    /// Line prefix of an instruction. The entry point of a decompiled function
    /// never gets a label since the function header names it.
    pub fn label_and_address(
        &mut self,
        addr: Address,
        tab: usize,
        section: Option<&Section>,
        print_colon: bool,
        commented: bool,
    ) {
        let is_entry = !self.ctx.is_dump() && addr == self.ctx.entry;

        if !is_entry {
            if self.ctx.config.label_own_line {
                self.tabs(tab);
                if self.label(addr, print_colon, false) {
                    self.new_line();
                    self.tabs(tab);
                    if commented {
                        self.comment("# ");
                    }
                    self.address(addr, section, print_colon, true);
                    return;
                }
                if commented {
                    self.comment("# ");
                }
                self.address(addr, section, print_colon, false);
                return;
            }

            if self.resolve_label(addr).is_some() {
                self.tabs(tab);
                if commented {
                    self.comment("# ");
                }
                self.label(addr, print_colon, false);
                if print_colon {
                    self.plain(" ");
                }
                return;
            }
        }

        self.tabs(tab);
        if commented {
            self.comment("# ");
        }
        self.address(addr, section, print_colon, false);
    }
}
