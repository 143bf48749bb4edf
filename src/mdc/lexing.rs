//! Line lexing
//!
//! mdc is line oriented: every construct is recognisable from a single line
//! (plus the knowledge of which region is open, which the parser owns). This
//! module turns a line into a [LineKind].

pub mod line_classification;
pub mod line_kind;

pub use line_classification::classify_line;
pub use line_kind::{
    Alignment, ButtonMacro, FenceOpening, ImageLine, IncludeDirective, LineKind, ListItemLine,
    ListKind, QuoteKind, UmlOpening,
};
