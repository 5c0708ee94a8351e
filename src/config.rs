// Thu Oct 15 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub show_bytes: bool,
    pub comments: bool,
    pub color: bool,
    pub max_data_size: usize,
    pub hex_immediates: bool,
    pub section_prefix: bool,
    pub print_labels: bool,
    pub label_own_line: bool,
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_bytes: false,
            comments: true,
            color: true,
            max_data_size: 30,
            hex_immediates: false,
            section_prefix: false,
            print_labels: true,
            label_own_line: false,
            indent_width: 4,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn with_bytes(mut self, show: bool) -> Self {
        self.show_bytes = show;
        self
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_max_data_size(mut self, size: usize) -> Self {
        self.max_data_size = size;
        self
    }

    pub fn with_hex_immediates(mut self, hex: bool) -> Self {
        self.hex_immediates = hex;
        self
    }

    pub fn with_section_prefix(mut self, prefix: bool) -> Self {
        self.section_prefix = prefix;
        self
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.print_labels = labels;
        self
    }

    pub fn with_label_own_line(mut self, own_line: bool) -> Self {
        self.label_own_line = own_line;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_data_size == 0 {
            return Err(ConfigError::Invalid("max_data_size must be greater than 0".to_string()));
        }
        if self.indent_width == 0 {
            return Err(ConfigError::Invalid("indent_width must be greater than 0".to_string()));
        }
        Ok(())
    }
}
