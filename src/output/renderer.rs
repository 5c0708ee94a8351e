// Thu Oct 15 2026 - Alex

use crate::binary::{BinaryView, Section};
use crate::config::RenderConfig;
use crate::memory::{Address, AnalysisDb};
use crate::output::buffer::LineBuffer;
use crate::output::context::RenderContext;
use crate::output::error::RenderResult;
use crate::output::hooks::OperandRenderer;
use crate::output::index::AddressIndex;
use crate::output::rendering::Rendering;
use crate::output::style::{Style, StyleRegistry, DEFAULT_STYLES};

/// Builds the styled listing of one function or block. Every emitting method
/// appends to the current (last) line.
pub struct Renderer<'a> {
    pub(crate) ctx: &'a RenderContext,
    pub(crate) binary: &'a dyn BinaryView,
    pub(crate) db: &'a dyn AnalysisDb,
    pub(crate) arch: &'a dyn OperandRenderer,
    pub(crate) styles: &'a StyleRegistry,
    pub(crate) buf: LineBuffer,
    pub(crate) index: AddressIndex,
}

impl<'a> Renderer<'a> {
    pub fn new(
        ctx: &'a RenderContext,
        binary: &'a dyn BinaryView,
        db: &'a dyn AnalysisDb,
        arch: &'a dyn OperandRenderer,
    ) -> Self {
        Self::with_styles(ctx, binary, db, arch, &DEFAULT_STYLES)
    }

    pub fn with_styles(
        ctx: &'a RenderContext,
        binary: &'a dyn BinaryView,
        db: &'a dyn AnalysisDb,
        arch: &'a dyn OperandRenderer,
        styles: &'a StyleRegistry,
    ) -> Self {
        Self {
            ctx,
            binary,
            db,
            arch,
            styles,
            buf: LineBuffer::new(),
            index: AddressIndex::new(),
        }
    }

    pub fn context(&self) -> &'a RenderContext {
        self.ctx
    }

    pub fn config(&self) -> &'a RenderConfig {
        &self.ctx.config
    }

    pub fn binary(&self) -> &'a dyn BinaryView {
        self.binary
    }

    pub fn db(&self) -> &'a dyn AnalysisDb {
        self.db
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buf
    }

    pub fn index(&self) -> &AddressIndex {
        &self.index
    }

    pub fn new_line(&mut self) {
        self.buf.new_line();
    }

    pub fn pad_to(&mut self, column: usize) {
        self.buf.pad_to(column);
    }

    pub fn mark_instruction_boundary(&mut self) {
        self.buf.mark_instruction_boundary();
    }

    pub fn is_last_two_lines_empty(&self) -> bool {
        self.buf.is_last_two_lines_empty()
    }

    pub fn tabs(&mut self, level: usize) {
        if level > 0 {
            let indent = " ".repeat(level * self.ctx.config.indent_width);
            self.buf.push_plain(&indent);
        }
    }

    pub fn plain(&mut self, text: &str) {
        self.buf.push_plain(text);
    }

    pub fn styled(&mut self, text: &str, style: Style) {
        let bold = self.styles.is_bold(style);
        self.buf.push(text, style, bold);
    }

    pub fn comment(&mut self, text: &str) {
        self.styled(text, Style::Comment);
    }

    pub fn internal_comment(&mut self, text: &str) {
        self.styled(text, Style::InternalComment);
    }

    pub fn user_comment(&mut self, text: &str) {
        self.styled(text, Style::UserComment);
    }

    pub fn keyword(&mut self, text: &str) {
        self.styled(text, Style::Keyword);
    }

    pub fn type_name(&mut self, text: &str) {
        self.styled(text, Style::Type);
    }

    pub fn variable(&mut self, text: &str) {
        self.styled(text, Style::Variable);
    }

    pub fn string(&mut self, text: &str) {
        self.styled(text, Style::String);
    }

    pub fn section_name(&mut self, text: &str) {
        self.styled(text, Style::Section);
    }

    pub fn retcall(&mut self, text: &str) {
        self.styled(text, Style::RetCall);
    }

    /// Line address, optionally preceded by the section name when section
    /// prefixes are enabled. `normal_color` ignores the per-address override.
    pub fn address(&mut self, addr: Address, section: Option<&Section>, print_colon: bool, normal_color: bool) {
        if self.ctx.config.section_prefix {
            if let Some(section) = section {
                self.comment(&section.name);
                self.plain(" ");
            }
        }

        let text = if print_colon {
            format!("{}: ", addr)
        } else {
            addr.to_string()
        };

        let style = match self.ctx.color_of(addr) {
            Some(style) if !normal_color => style,
            _ => Style::Address,
        };
        self.buf.push(&text, style, false);
    }

    /// Address used as an operand value: no prefix, no colon, default style
    /// unless the address has an override.
    pub fn value_address(&mut self, addr: Address) {
        let style = self.ctx.color_of(addr).unwrap_or(Style::Default);
        self.buf.push(&addr.to_string(), style, false);
    }

    pub fn data_byte(&mut self, byte: Option<u8>) {
        self.retcall(".db");
        match byte {
            None => self.plain(" ?"),
            Some(b) => {
                self.plain(&format!(" {:02x}", b));
                if crate::utils::StringUtils::is_printable_byte(b) {
                    self.string(&format!("  '{}'", b as char));
                }
            }
        }
    }

    pub fn bad(&mut self, addr: Address, tab: usize, section: Option<&Section>) {
        self.tabs(tab);
        self.address(addr, section, true, false);
        self.plain("(bad)");
        self.new_line();
    }

    pub fn dash(&mut self) {
        self.user_comment("; ---------------------------------------------------------------------");
        self.new_line();
    }

    /// Tags the current line with `addr` in the address index.
    pub fn set_line(&mut self, addr: Address) {
        if self.buf.current_line().is_none() {
            self.buf.new_line();
        }
        if let Some(line) = self.buf.current_line() {
            self.index.record(addr, line);
        }
    }

    pub fn is_label(&self, addr: Address) -> bool {
        self.binary.has_symbol(addr) || self.db.is_xref(addr)
    }

    pub fn variable_at(&self, stack_offset: i64) -> Option<&'a str> {
        self.ctx.variable_at(stack_offset)
    }

    pub fn finish(self) -> RenderResult<Rendering> {
        log::debug!("render pass at {} finalized with {} lines", self.ctx.entry, self.buf.line_count());
        Rendering::new(self.buf, self.index, self.ctx.config.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::BinaryKind;
    use crate::output::testing::{FakeBinary, FakeDb, NoArch};

    fn ctx() -> RenderContext {
        RenderContext::dump(Address::new(0x1000), RenderConfig::default())
    }

    #[test]
    fn test_address_forms() {
        let ctx = ctx().with_color(Address::new(0x2000), Style::Highlight);
        let binary = FakeBinary::new(BinaryKind::Elf);
        let db = FakeDb::new();
        let mut r = Renderer::new(&ctx, &binary, &db, &NoArch);

        r.new_line();
        r.address(Address::new(0x1000), None, true, false);
        r.address(Address::new(0x2000), None, false, false);
        r.address(Address::new(0x2000), None, false, true);
        r.value_address(Address::new(0x3000));

        let tokens = &r.buffer().tokens()[0];
        assert_eq!(tokens[0].text, "0x1000: ");
        assert_eq!(tokens[0].style, Style::Address);
        assert_eq!(tokens[1].style, Style::Highlight);
        assert_eq!(tokens[2].style, Style::Address);
        assert_eq!(tokens[3].style, Style::Default);
    }

    #[test]
    fn test_section_prefix() {
        let mut config = RenderConfig::default();
        config.section_prefix = true;
        let ctx = RenderContext::dump(Address::new(0x1000), config);
        let binary = FakeBinary::new(BinaryKind::Elf);
        let db = FakeDb::new();
        let text = Section::new(".text", Address::new(0x1000), 0x100, false);
        let mut r = Renderer::new(&ctx, &binary, &db, &NoArch);

        r.new_line();
        r.address(Address::new(0x1000), Some(&text), true, false);
        assert_eq!(r.buffer().line_text(0).unwrap(), ".text 0x1000: ");
    }

    #[test]
    fn test_tabs_data_byte_and_bad() {
        let ctx = ctx();
        let binary = FakeBinary::new(BinaryKind::Elf);
        let db = FakeDb::new();
        let mut r = Renderer::new(&ctx, &binary, &db, &NoArch);

        r.new_line();
        r.tabs(2);
        r.data_byte(Some(0x41));
        r.new_line();
        r.data_byte(None);
        r.new_line();
        r.bad(Address::new(0x1010), 1, None);

        let rendering = r.finish().unwrap();
        assert_eq!(rendering.lines()[0], "        .db 41  'A'");
        assert_eq!(rendering.lines()[1], ".db ?");
        assert_eq!(rendering.lines()[2], "    0x1010: (bad)");
    }

    #[test]
    fn test_color_setting_reaches_rendering() {
        let binary = FakeBinary::new(BinaryKind::Elf);
        let db = FakeDb::new();
        let plain = RenderContext::dump(Address::new(0x1000), RenderConfig::default().with_color(false));
        let mut r = Renderer::new(&plain, &binary, &db, &NoArch);
        r.new_line();
        r.address(Address::new(0x1000), None, true, false);
        r.keyword("ret");

        let rendering = r.finish().unwrap();
        assert!(!rendering.color_enabled());
        let mut out = Vec::new();
        rendering.write_to(&mut out, &DEFAULT_STYLES).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0x1000: ret\n");

        let colored = ctx();
        let r = Renderer::new(&colored, &binary, &db, &NoArch);
        assert!(r.finish().unwrap().color_enabled());
    }

    #[test]
    fn test_set_line_without_lines() {
        let ctx = ctx();
        let binary = FakeBinary::new(BinaryKind::Elf);
        let db = FakeDb::new();
        let mut r = Renderer::new(&ctx, &binary, &db, &NoArch);

        r.set_line(Address::new(0x1000));
        assert_eq!(r.index().first_line_of(Address::new(0x1000)), Some(0));
    }

    #[test]
    fn test_is_label() {
        let ctx = ctx();
        let binary = FakeBinary::new(BinaryKind::Elf).with_symbol(0x1000, "main");
        let db = FakeDb::new().with_xref(0x1008);
        let r = Renderer::new(&ctx, &binary, &db, &NoArch);

        assert!(r.is_label(Address::new(0x1000)));
        assert!(r.is_label(Address::new(0x1008)));
        assert!(!r.is_label(Address::new(0x1004)));
    }
}
