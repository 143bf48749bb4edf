//! Table element
//!
//! Header cells, a per-column alignment and body rows. All rows are kept at
//! the same width as the header: short rows are padded with empty cells and a
//! row wider than the header widens the whole table (header and alignments
//! padded). Cells are never dropped.

use crate::mdc::lexing::Alignment;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub alignments: Vec<Alignment>,
    pub rows: Vec<Vec<String>>,
}

/// Outcome of adding a row, so the parser can report shape mismatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFit {
    Exact,
    /// The row was padded with this many empty cells
    Padded(usize),
    /// The table grew by this many columns
    Widened(usize),
}

impl RowFit {
    /// Human readable account of a mismatch, `None` when the shape fit
    pub fn describe(&self, what: &str) -> Option<String> {
        match self {
            RowFit::Exact => None,
            RowFit::Padded(missing) => Some(format!(
                "table {} has {} cells fewer than the header, padded with empty cells",
                what, missing
            )),
            RowFit::Widened(extra) => Some(format!(
                "table {} has {} cells more than the header, table widened",
                what, extra
            )),
        }
    }
}

impl Table {
    pub fn with_headers(headers: Vec<String>) -> Self {
        let alignments = vec![Alignment::Left; headers.len()];
        Self {
            headers,
            alignments,
            rows: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Fix the column alignment from a separator line
    pub fn set_alignments(&mut self, mut alignments: Vec<Alignment>) -> RowFit {
        let columns = self.column_count();
        if alignments.len() > columns {
            let extra = alignments.len() - columns;
            self.widen(alignments.len());
            self.alignments = alignments;
            return RowFit::Widened(extra);
        }
        let missing = columns - alignments.len();
        alignments.resize(columns, Alignment::Left);
        self.alignments = alignments;
        if missing > 0 {
            RowFit::Padded(missing)
        } else {
            RowFit::Exact
        }
    }

    pub fn push_row(&mut self, mut row: Vec<String>) -> RowFit {
        let columns = self.column_count();
        if row.len() > columns {
            let extra = row.len() - columns;
            self.widen(row.len());
            self.rows.push(row);
            return RowFit::Widened(extra);
        }
        let missing = columns - row.len();
        row.resize(columns, String::new());
        self.rows.push(row);
        if missing > 0 {
            RowFit::Padded(missing)
        } else {
            RowFit::Exact
        }
    }

    fn widen(&mut self, columns: usize) {
        self.headers.resize(columns, String::new());
        self.alignments.resize(columns, Alignment::Left);
        for row in &mut self.rows {
            row.resize(columns, String::new());
        }
    }

    pub fn digest(&self) -> String {
        let mut digest = self.headers.join(" ");
        for row in &self.rows {
            digest.push(' ');
            digest.push_str(&row.join(" "));
        }
        digest
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {} |", self.headers.join(" | "))?;
        for row in &self.rows {
            write!(f, "\n| {} |", row.join(" | "))?;
        }
        Ok(())
    }
}
