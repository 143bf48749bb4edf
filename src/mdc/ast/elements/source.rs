//! Source code element
//!
//! Produced by fenced blocks, 4-space indented blocks and include directives.
//! The text keeps its internal newlines and leading whitespace; the fences or
//! the indentation prefix are not part of it.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    pub text: String,
    pub language: String,
    pub caption: Option<String>,
    /// `[N]` order tag of a fenced block or an include directive
    pub order: Option<u32>,
    pub origin: Option<SourceOrigin>,
}

/// Where included source text came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceOrigin {
    pub path: PathBuf,
    /// 1-based, inclusive
    pub first_line: usize,
    pub last_line: usize,
}

impl Source {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            caption: None,
            order: None,
            origin: None,
        }
    }

    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }

    pub fn with_order(mut self, order: Option<u32>) -> Self {
        self.order = order;
        self
    }

    pub fn with_origin(mut self, origin: SourceOrigin) -> Self {
        self.origin = Some(origin);
        self
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
