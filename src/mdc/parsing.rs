//! Parsing module for the mdc format
//!
//! Turns classified lines into the document tree:
//! 1. **Classification**: every line outside a region gets a [LineKind](crate::mdc::lexing::LineKind)
//! 2. **Folding**: the [engine] state machine extends or closes the open
//!    region, block and lists and emits elements into the open slide
//! 3. **Finishing**: the last slide and chapter close, the table of contents
//!    is derived
//!
//! ## Testing
//!
//! Parser tests use the curated sources in [samples](crate::mdc::testing::samples)
//! and the fluent assertions of the [testing module](crate::mdc::testing).

pub mod engine;
pub mod parser;
mod state;

pub use engine::ParserOptions;
pub use parser::{parse_document, ParsedPresentation, Parser, DEFAULT_SOURCE_NAME};
