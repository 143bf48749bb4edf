//! mdc: lecture slides in a markdown dialect
//!
//! A lecture is a directory of `NN_name.md` files. They are parsed in order
//! into one [Presentation](ast::Presentation); chapter and slide numbering
//! runs across files. The tree is then handed to output formats.
//!
//! - [lexing] classifies single lines
//! - [parsing] folds lines into the tree and owns the open regions
//! - [includes] resolves `!INCLUDESRC` directives
//! - [toc] derives the table of contents
//! - [formats] serializes the tree for inspection
//! - [config] loads defaults, `metadata.properties` and message tables

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod includes;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod toc;

pub use ast::{Presentation, PresentationMetadata};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSeverity};
pub use error::{MdcError, MdcResult, RegionKind};
pub use parsing::{parse_document, ParsedPresentation, Parser, ParserOptions};
pub use toc::Toc;
