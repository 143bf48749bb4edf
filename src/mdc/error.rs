//! Fatal errors
//!
//! Any of these aborts the whole conversion; there is no partial output.
//! Recoverable problems are reported as [diagnostics](crate::mdc::diagnostics)
//! instead.

use crate::mdc::formats::FormatError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A multi-line construct that needs an explicit terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    FencedCode,
    Script,
    Equation,
    Uml,
}

impl RegionKind {
    pub fn terminator(&self) -> &'static str {
        match self {
            RegionKind::FencedCode => "```",
            RegionKind::Script => "</script>",
            RegionKind::Equation => "\\]",
            RegionKind::Uml => "@enduml",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionKind::FencedCode => "fenced code block",
            RegionKind::Script => "script",
            RegionKind::Equation => "equation",
            RegionKind::Uml => "UML block",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum MdcError {
    #[error("{}:{line}: cannot resolve `{directive}`: {reason}", .file.display())]
    UnresolvedInclude {
        directive: String,
        file: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{}:{line}: {region} is never closed (expected `{}`)", .file.display(), .region.terminator())]
    UnbalancedRegion {
        region: RegionKind,
        file: PathBuf,
        line: usize,
    },

    #[error("cannot read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type MdcResult<T> = Result<T, MdcError>;
