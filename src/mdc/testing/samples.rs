//! Curated mdc sources
//!
//! The files under `docs/samples/` are the vetted inputs for parser tests.
//! They are embedded at compile time; [Sample::parse] still passes the real
//! path so that include directives resolve against `docs/samples/`.

use crate::mdc::ast::PresentationMetadata;
use crate::mdc::error::MdcResult;
use crate::mdc::parsing::{ParsedPresentation, Parser};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Two chapters touching every element kind
    Lecture,
    /// Alignment, ragged rows, separator columns
    Tables,
    /// Quotes, boxes, html and spacing
    Callouts,
    /// `!INCLUDESRC` against `docs/samples/src/Hello.java`
    Includes,
    /// A fence that is never closed
    Unbalanced,
}

impl Sample {
    pub const ALL: [Sample; 5] = [
        Sample::Lecture,
        Sample::Tables,
        Sample::Callouts,
        Sample::Includes,
        Sample::Unbalanced,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Sample::Lecture => "lecture.md",
            Sample::Tables => "tables.md",
            Sample::Callouts => "callouts.md",
            Sample::Includes => "includes.md",
            Sample::Unbalanced => "unbalanced.md",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Sample::Lecture => include_str!("../../../docs/samples/lecture.md"),
            Sample::Tables => include_str!("../../../docs/samples/tables.md"),
            Sample::Callouts => include_str!("../../../docs/samples/callouts.md"),
            Sample::Includes => include_str!("../../../docs/samples/includes.md"),
            Sample::Unbalanced => include_str!("../../../docs/samples/unbalanced.md"),
        }
    }

    /// Absolute path of the sample inside the crate
    pub fn path(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("docs")
            .join("samples")
            .join(self.file_name())
    }

    pub fn parse(&self) -> MdcResult<ParsedPresentation> {
        let mut parser = Parser::new(sample_metadata());
        parser.parse_str(self.source(), self.path())?;
        Ok(parser.finish())
    }
}

/// Metadata the samples are written against
pub fn sample_metadata() -> PresentationMetadata {
    PresentationMetadata {
        title_1: "Programmieren 1".to_string(),
        title_2: "Sample lecture".to_string(),
        section_number: 1,
        section_name: "Basics".to_string(),
        copyright: "mdc contributors".to_string(),
        author: "Jane Doe".to_string(),
        default_language: "java".to_string(),
        description: "Samples for the parser tests".to_string(),
        term: "Winter 2026".to_string(),
        slide_language: "DE".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_not_empty() {
        for sample in Sample::ALL {
            assert!(!sample.source().trim().is_empty(), "{:?}", sample);
            assert!(sample.path().is_file(), "{:?}", sample);
        }
    }
}
