// Thu Oct 15 2026 - Alex

pub mod batch;
pub mod buffer;
pub mod context;
pub mod error;
pub mod function;
pub mod hooks;
pub mod immediate;
pub mod index;
pub mod instruction;
pub mod label;
pub mod renderer;
pub mod rendering;
pub mod style;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::{render_functions, FunctionJob};
pub use buffer::{InstructionBoundary, LineBuffer, StyledToken};
pub use context::{LocalVariable, RenderContext, RenderMode};
pub use error::{RenderError, RenderResult};
pub use function::render_function;
pub use hooks::{AsmBlock, AstNode, OperandRenderer};
pub use immediate::ImmOptions;
pub use index::AddressIndex;
pub use label::Label;
pub use renderer::Renderer;
pub use rendering::Rendering;
pub use style::{Style, StyleAttr, StyleRegistry, DEFAULT_STYLES};
