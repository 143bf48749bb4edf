//! Diagnostics
//!
//! Recoverable problems found while parsing. The parser keeps going with a
//! documented recovery and records what it did, so authors can fix their
//! sources. Every diagnostic is also logged through `log::warn!` when it is
//! recorded.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticSeverity {
    Warning,
    Information,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Information => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// A directive that does not follow its grammar; kept as plain text
    MalformedDirective,
    /// List indentation that skips a level; clamped to the nearest level
    StructuralAmbiguity,
    /// A table row or separator with a different cell count than the header
    TableShapeMismatch,
    /// Non-blank content before the first slide heading; dropped
    ContentOutsideSlide,
    /// `>>` without a quote right before it
    OrphanQuoteSource,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedDirective => "malformed-directive",
            DiagnosticKind::StructuralAmbiguity => "structural-ambiguity",
            DiagnosticKind::TableShapeMismatch => "table-shape-mismatch",
            DiagnosticKind::ContentOutsideSlide => "content-outside-slide",
            DiagnosticKind::OrphanQuoteSource => "orphan-quote-source",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub kind: DiagnosticKind,
    pub file: PathBuf,
    /// 1-based
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(
        kind: DiagnosticKind,
        file: impl Into<PathBuf>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            kind,
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}]: {}",
            self.file.display(),
            self.line,
            self.severity,
            self.kind.code(),
            self.message
        )
    }
}
