// Thu Oct 15 2026 - Alex

use crate::memory::Address;
use crate::output::buffer::{InstructionBoundary, LineBuffer, StyledToken};
use crate::output::error::RenderResult;
use crate::output::index::AddressIndex;
use crate::output::style::{StyleRegistry, DEFAULT_STYLES};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Finalized output of a render pass.
#[derive(Debug)]
pub struct Rendering {
    lines: Vec<String>,
    tokens: Vec<Vec<StyledToken>>,
    index: AddressIndex,
    boundaries: BTreeMap<usize, InstructionBoundary>,
    color: bool,
}

impl Rendering {
    /// Joins `buf`. `color` is the pass's color setting, used by `print`.
    pub(crate) fn new(buf: LineBuffer, index: AddressIndex, color: bool) -> RenderResult<Self> {
        let (tokens, lines, boundaries) = buf.into_joined()?;
        Ok(Self {
            lines,
            tokens,
            index,
            boundaries,
            color,
        })
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn tokens(&self) -> &[Vec<StyledToken>] {
        &self.tokens
    }

    pub fn index(&self) -> &AddressIndex {
        &self.index
    }

    pub fn line_of_address(&self, addr: Address) -> Option<usize> {
        self.index.first_line_of(addr)
    }

    pub fn address_of_line(&self, line: usize) -> Option<Address> {
        self.index.address_of(line)
    }

    pub fn enclosing_address(&self, line: usize) -> Option<Address> {
        self.index.enclosing_address(line).map(|(_, addr)| addr)
    }

    pub fn boundary(&self, line: usize) -> Option<InstructionBoundary> {
        self.boundaries.get(&line).copied()
    }

    /// Line text without its trailing inline comments.
    pub fn strip_comments(&self, line: usize) -> Option<String> {
        let text = self.lines.get(line)?;
        let end = self
            .boundary(line)
            .map(|b| b.char_offset)
            .unwrap_or(usize::MAX);
        Some(text.chars().take(end).collect())
    }

    /// Writes every line, styled through `styles` when color is enabled.
    pub fn write_to<W: Write>(&self, out: &mut W, styles: &StyleRegistry) -> io::Result<()> {
        for line in &self.tokens {
            for token in line {
                if self.color {
                    write!(out, "{}", styles.apply(&token.text, token.style, token.bold))?;
                } else {
                    write!(out, "{}", token.text)?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, &DEFAULT_STYLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::style::Style;

    fn sample(color: bool) -> Rendering {
        let mut buf = LineBuffer::new();
        let mut index = AddressIndex::new();
        buf.new_line();
        buf.push("0x10: ", Style::Address, false);
        buf.push("nop", Style::Default, false);
        buf.mark_instruction_boundary();
        buf.push(" ; pad", Style::UserComment, false);
        index.record(Address::new(0x10), 0);
        buf.new_line();
        buf.push("}", Style::Default, false);
        Rendering::new(buf, index, color).unwrap()
    }

    #[test]
    fn test_plain_print() {
        let rendering = sample(false);
        let mut out = Vec::new();
        rendering.write_to(&mut out, &DEFAULT_STYLES).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0x10: nop ; pad\n}\n");
    }

    #[test]
    fn test_colored_print_keeps_text() {
        let rendering = sample(true);
        assert!(rendering.color_enabled());
        let mut out = Vec::new();
        rendering.write_to(&mut out, &DEFAULT_STYLES).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("nop"));
        assert!(text.contains("; pad"));
    }

    #[test]
    fn test_navigation() {
        let rendering = sample(true);
        assert_eq!(rendering.strip_comments(0).unwrap(), "0x10: nop");
        assert_eq!(rendering.strip_comments(1).unwrap(), "}");
        assert_eq!(rendering.strip_comments(5), None);
        assert_eq!(rendering.enclosing_address(1), Some(Address::new(0x10)));
        assert_eq!(rendering.address_of_line(1), None);
        assert_eq!(rendering.line_of_address(Address::new(0x10)), Some(0));
    }

    #[test]
    fn test_joined_buffer_is_rejected() {
        let mut buf = LineBuffer::new();
        buf.new_line();
        buf.push("nop", Style::Default, false);
        buf.join().unwrap();
        assert!(matches!(
            Rendering::new(buf, AddressIndex::new(), false),
            Err(crate::output::error::RenderError::AlreadyJoined)
        ));
    }
}
