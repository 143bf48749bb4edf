//! Parser entry points
//!
//! A [Parser] is fed source files in order and finished once. Numbering of
//! chapters and slides runs across all files, so the caller decides the file
//! order (the CLI sorts lexicographically) and must not feed files
//! concurrently.

use super::engine::{Engine, ParserOptions};
use crate::mdc::ast::elements::{Presentation, PresentationMetadata};
use crate::mdc::diagnostics::Diagnostic;
use crate::mdc::error::{MdcError, MdcResult};
use crate::mdc::toc::Toc;
use std::fs;
use std::path::Path;

/// Name reported for sources parsed from a string without a file
pub const DEFAULT_SOURCE_NAME: &str = "<input>.md";

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct ParsedPresentation {
    pub presentation: Presentation,
    pub toc: Toc,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Parser {
    engine: Engine,
    files: usize,
}

impl Parser {
    pub fn new(metadata: PresentationMetadata) -> Self {
        Self::with_options(metadata, ParserOptions::default())
    }

    pub fn with_options(metadata: PresentationMetadata, options: ParserOptions) -> Self {
        Self {
            engine: Engine::new(metadata, options),
            files: 0,
        }
    }

    /// Parse source text. `file` is used for diagnostics, button line ids
    /// and as the anchor of relative include paths.
    pub fn parse_str(&mut self, source: &str, file: impl AsRef<Path>) -> MdcResult<()> {
        self.files += 1;
        self.engine.feed(source, file.as_ref())
    }

    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> MdcResult<()> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| MdcError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(&source, path)
    }

    /// Parse several files in the given order.
    pub fn parse_files<I, P>(&mut self, paths: I) -> MdcResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.parse_file(path)?;
        }
        Ok(())
    }

    pub fn finish(self) -> ParsedPresentation {
        log::debug!("finishing after {} source files", self.files);
        let (presentation, diagnostics) = self.engine.finish();
        let toc = Toc::build(&presentation);
        ParsedPresentation {
            presentation,
            toc,
            diagnostics,
        }
    }
}

/// Parse a single in-memory document.
pub fn parse_document(
    source: &str,
    metadata: PresentationMetadata,
) -> MdcResult<ParsedPresentation> {
    let mut parser = Parser::new(metadata);
    parser.parse_str(source, DEFAULT_SOURCE_NAME)?;
    Ok(parser.finish())
}
