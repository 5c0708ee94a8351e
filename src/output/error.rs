// Thu Oct 15 2026 - Alex

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No implementation for the {hook} hook")]
    NotImplemented { hook: &'static str },
    #[error("Line buffer already joined")]
    AlreadyJoined,
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type RenderResult<T> = Result<T, RenderError>;
