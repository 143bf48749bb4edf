//! Output formats for inspecting a parsed presentation
//!
//! The real output renderers (HTML, LaTeX) live outside this crate and drive
//! the [Renderer](crate::mdc::ast::Renderer) contract. The formats here
//! serialize the tree itself, for debugging and tooling.

pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{outline, to_treeviz_str, OutlineNode, TreevizFormatter};
pub use yaml::YamlFormatter;
