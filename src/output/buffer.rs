// Thu Oct 15 2026 - Alex

use crate::output::error::{RenderError, RenderResult};
use crate::output::style::Style;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledToken {
    pub text: String,
    pub style: Style,
    pub bold: bool,
}

impl StyledToken {
    pub fn new(text: &str, style: Style, bold: bool) -> Self {
        Self {
            text: text.to_string(),
            style,
            bold,
        }
    }

    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// End of the instruction part of a line, before any inline comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionBoundary {
    pub char_offset: usize,
    pub token_index: usize,
}

/// Append-only accumulator of styled lines. Plain text is flattened once, by
/// `join`, from the token form.
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<Vec<StyledToken>>,
    cursor: usize,
    boundaries: BTreeMap<usize, InstructionBoundary>,
    joined: Option<Vec<String>>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_line(&mut self) {
        self.assert_open();
        self.lines.push(Vec::new());
        self.cursor = 0;
    }

    pub fn push(&mut self, text: &str, style: Style, bold: bool) {
        self.assert_open();
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        let token = StyledToken::new(text, style, bold);
        self.cursor += token.width();
        if let Some(line) = self.lines.last_mut() {
            line.push(token);
        }
    }

    pub fn push_plain(&mut self, text: &str) {
        self.push(text, Style::Default, false);
    }

    /// Pads with spaces up to `column`. Never shrinks.
    pub fn pad_to(&mut self, column: usize) {
        if self.cursor < column {
            let padding = " ".repeat(column - self.cursor);
            self.push_plain(&padding);
        }
    }

    pub fn mark_instruction_boundary(&mut self) {
        let Some(line) = self.current_line() else {
            return;
        };
        let token_index = self.lines[line].len();
        self.boundaries.insert(
            line,
            InstructionBoundary {
                char_offset: self.cursor,
                token_index,
            },
        );
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn current_line(&self) -> Option<usize> {
        self.lines.len().checked_sub(1)
    }

    pub fn tokens(&self) -> &[Vec<StyledToken>] {
        &self.lines
    }

    pub fn line_text(&self, line: usize) -> Option<String> {
        self.lines
            .get(line)
            .map(|tokens| tokens.iter().map(|t| t.text.as_str()).collect())
    }

    pub fn boundary(&self, line: usize) -> Option<InstructionBoundary> {
        self.boundaries.get(&line).copied()
    }

    pub fn is_last_two_lines_empty(&self) -> bool {
        match self.lines.as_slice() {
            [.., before, last] => before.is_empty() && last.is_empty(),
            _ => true,
        }
    }

    pub fn is_joined(&self) -> bool {
        self.joined.is_some()
    }

    /// Flattens every line to a string. Lines that never marked an instruction
    /// boundary get one just past their end.
    pub fn join(&mut self) -> RenderResult<&[String]> {
        if self.joined.is_some() {
            return Err(RenderError::AlreadyJoined);
        }
        let joined = self.flatten();
        Ok(self.joined.insert(joined).as_slice())
    }

    fn flatten(&mut self) -> Vec<String> {
        let mut joined = Vec::with_capacity(self.lines.len());
        for (i, tokens) in self.lines.iter().enumerate() {
            let text: String = tokens.iter().map(|t| t.text.as_str()).collect();
            let width = text.chars().count();
            self.boundaries.entry(i).or_insert(InstructionBoundary {
                char_offset: width + 1,
                token_index: tokens.len(),
            });
            joined.push(text);
        }
        joined
    }

    pub fn joined(&self) -> Option<&[String]> {
        self.joined.as_deref()
    }

    /// Joins the buffer and hands out its tokens, flattened lines and
    /// boundaries.
    pub(crate) fn into_joined(
        mut self,
    ) -> RenderResult<(Vec<Vec<StyledToken>>, Vec<String>, BTreeMap<usize, InstructionBoundary>)> {
        if self.joined.is_some() {
            return Err(RenderError::AlreadyJoined);
        }
        let joined = self.flatten();
        Ok((self.lines, joined, self.boundaries))
    }

    fn assert_open(&self) {
        assert!(self.joined.is_none(), "line buffer mutated after join");
    }
}
