//! Parser state
//!
//! What the previous lines left open. At most one region and at most one
//! non-list block are open at any time; the list stack lives next to them
//! because blank lines close blocks but keep lists open.

use crate::mdc::ast::elements::{List, MultipleChoiceQuestions, Table};
use crate::mdc::error::RegionKind;
use crate::mdc::lexing::{FenceOpening, ListKind, QuoteKind, UmlOpening};

/// Opening line of a region, owned so it outlives the line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RegionHeader {
    Fence {
        language: Option<String>,
        order: Option<u32>,
        caption: Option<String>,
    },
    Script,
    Equation,
    Uml(UmlOpening),
}

impl RegionHeader {
    pub(crate) fn fence(opening: &FenceOpening<'_>) -> Self {
        RegionHeader::Fence {
            language: opening.language.map(str::to_string),
            order: opening.order,
            caption: opening.caption.map(str::to_string),
        }
    }

    pub(crate) fn kind(&self) -> RegionKind {
        match self {
            RegionHeader::Fence { .. } => RegionKind::FencedCode,
            RegionHeader::Script => RegionKind::Script,
            RegionHeader::Equation => RegionKind::Equation,
            RegionHeader::Uml(_) => RegionKind::Uml,
        }
    }
}

/// A region collecting raw lines until its terminator
#[derive(Debug, Clone)]
pub(crate) struct OpenRegion {
    pub header: RegionHeader,
    /// Line of the opening marker, reported when the region never closes
    pub start_line: usize,
    pub lines: Vec<String>,
}

impl OpenRegion {
    pub(crate) fn new(header: RegionHeader, start_line: usize) -> Self {
        Self {
            header,
            start_line,
            lines: Vec::new(),
        }
    }

    pub(crate) fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Non-list block accumulating consecutive lines
#[derive(Debug, Clone)]
pub(crate) enum OpenBlock {
    Text(String),
    IndentedCode(Vec<String>),
    Table { table: Table, body: bool },
    Quote {
        kind: QuoteKind,
        text: String,
        source: Option<String>,
    },
    Html(Vec<String>),
    MultipleChoice(MultipleChoiceQuestions),
}

/// Open lists, index 0 is level 1
#[derive(Debug, Clone, Default)]
pub(crate) struct ListStack {
    open: Vec<List>,
}

impl ListStack {
    pub(crate) fn depth(&self) -> usize {
        self.open.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Fold every list deeper than `level` into its parent. `level` 0
    /// folds everything and returns the level-1 list.
    pub(crate) fn close_to(&mut self, level: usize) -> Option<List> {
        while self.open.len() > level.max(1) {
            if let Some(list) = self.open.pop() {
                if let Some(parent) = self.open.last_mut() {
                    parent.push_nested(list);
                }
            }
        }
        if level == 0 {
            self.open.pop()
        } else {
            None
        }
    }

    /// Add an item at `level`, which the caller has already clamped to
    /// `1..=depth + 1`. Returns a finished level-1 list when the item starts
    /// a list of another kind at the top level.
    pub(crate) fn push_item(
        &mut self,
        kind: ListKind,
        level: usize,
        number: Option<u32>,
        content: &str,
    ) -> Option<List> {
        self.close_to(level);
        let mut finished = None;
        if self.open.len() == level && self.open.last().is_some_and(|top| top.kind != kind) {
            if level == 1 {
                finished = self.open.pop();
            } else if let Some(top) = self.open.pop() {
                if let Some(parent) = self.open.last_mut() {
                    parent.push_nested(top);
                }
            }
        }
        if self.open.len() < level {
            self.open.push(match kind {
                ListKind::Unordered => List::unordered(),
                ListKind::Ordered => List::ordered(number.unwrap_or(1)),
            });
        }
        if let Some(top) = self.open.last_mut() {
            top.push_item(content);
        }
        finished
    }

    /// Continuation line of the innermost item
    pub(crate) fn extend_last_item(&mut self, text: &str) -> bool {
        self.open
            .last_mut()
            .is_some_and(|top| top.extend_last_item(text))
    }
}
