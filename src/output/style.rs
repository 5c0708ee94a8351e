// Thu Oct 15 2026 - Alex

use ahash::AHashMap;
use colored::{Color, ColoredString, Colorize};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    Default,
    Address,
    CodeAddress,
    Symbol,
    Unknown,
    Type,
    Variable,
    Keyword,
    String,
    Section,
    Comment,
    InternalComment,
    UserComment,
    RetCall,
    /// Used by per-address overrides, e.g. jump targets.
    Highlight,
}

impl Style {
    pub const ALL: [Style; 15] = [
        Style::Default,
        Style::Address,
        Style::CodeAddress,
        Style::Symbol,
        Style::Unknown,
        Style::Type,
        Style::Variable,
        Style::Keyword,
        Style::String,
        Style::Section,
        Style::Comment,
        Style::InternalComment,
        Style::UserComment,
        Style::RetCall,
        Style::Highlight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Address => "address",
            Style::CodeAddress => "code_address",
            Style::Symbol => "symbol",
            Style::Unknown => "unknown",
            Style::Type => "type",
            Style::Variable => "variable",
            Style::Keyword => "keyword",
            Style::String => "string",
            Style::Section => "section",
            Style::Comment => "comment",
            Style::InternalComment => "internal_comment",
            Style::UserComment => "user_comment",
            Style::RetCall => "retcall",
            Style::Highlight => "highlight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleAttr {
    pub color: Option<Color>,
    pub bold: bool,
}

impl StyleAttr {
    pub fn new(color: Color, bold: bool) -> Self {
        Self { color: Some(color), bold }
    }

    pub fn plain() -> Self {
        Self { color: None, bold: false }
    }
}

pub static DEFAULT_STYLES: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::standard);

#[derive(Debug, Clone)]
pub struct StyleRegistry {
    attrs: AHashMap<Style, StyleAttr>,
}

impl StyleRegistry {
    pub fn standard() -> Self {
        let mut attrs = AHashMap::new();
        attrs.insert(Style::Default, StyleAttr::plain());
        attrs.insert(Style::Address, StyleAttr::new(Color::TrueColor { r: 78, g: 205, b: 196 }, false));
        attrs.insert(Style::CodeAddress, StyleAttr::new(Color::TrueColor { r: 100, g: 181, b: 246 }, false));
        attrs.insert(Style::Symbol, StyleAttr::new(Color::TrueColor { r: 255, g: 165, b: 0 }, true));
        attrs.insert(Style::Unknown, StyleAttr::new(Color::TrueColor { r: 128, g: 128, b: 128 }, false));
        attrs.insert(Style::Type, StyleAttr::new(Color::Green, false));
        attrs.insert(Style::Variable, StyleAttr::new(Color::Cyan, false));
        attrs.insert(Style::Keyword, StyleAttr::new(Color::TrueColor { r: 255, g: 107, b: 107 }, true));
        attrs.insert(Style::String, StyleAttr::new(Color::Yellow, false));
        attrs.insert(Style::Section, StyleAttr::new(Color::Magenta, false));
        attrs.insert(Style::Comment, StyleAttr::new(Color::BrightBlack, false));
        attrs.insert(Style::InternalComment, StyleAttr::new(Color::TrueColor { r: 108, g: 117, b: 125 }, false));
        attrs.insert(Style::UserComment, StyleAttr::new(Color::TrueColor { r: 150, g: 255, b: 150 }, false));
        attrs.insert(Style::RetCall, StyleAttr::new(Color::Red, true));
        attrs.insert(Style::Highlight, StyleAttr::new(Color::TrueColor { r: 255, g: 215, b: 0 }, false));
        Self { attrs }
    }

    pub fn with_style(mut self, style: Style, attr: StyleAttr) -> Self {
        log::debug!("style {} set to {:?}", style.name(), attr);
        self.attrs.insert(style, attr);
        self
    }

    pub fn attr(&self, style: Style) -> StyleAttr {
        self.attrs.get(&style).copied().unwrap_or_else(StyleAttr::plain)
    }

    pub fn is_bold(&self, style: Style) -> bool {
        self.attr(style).bold
    }

    /// Color the text for a terminal sink. `bold` comes from the token, not
    /// from the registry.
    pub fn apply(&self, text: &str, style: Style, bold: bool) -> ColoredString {
        let mut colored = match self.attr(style).color {
            Some(color) => text.color(color),
            None => text.normal(),
        };
        if bold {
            colored = colored.bold();
        }
        colored
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
