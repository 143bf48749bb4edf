//! Interactive buttons
//!
//! All button macros share one element carrying a kind. The line id ties a
//! button to the source line it was written on, renderers use it to wire the
//! button to the code it acts upon.

use crate::mdc::lexing::ButtonMacro;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ButtonKind {
    Plain,
    WithLog,
    WithLogPre,
    LinkPrevious,
    /// Carries the HTML fragment the CSS applies to
    LiveCss(String),
    LivePreview,
    LivePreviewFloat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub kind: ButtonKind,
    pub line_id: String,
}

impl Button {
    pub fn new(kind: ButtonKind, line_id: impl Into<String>) -> Self {
        Self {
            kind,
            line_id: line_id.into(),
        }
    }
}

impl From<ButtonMacro> for ButtonKind {
    fn from(value: ButtonMacro) -> Self {
        match value {
            ButtonMacro::Plain => ButtonKind::Plain,
            ButtonMacro::WithLog => ButtonKind::WithLog,
            ButtonMacro::WithLogPre => ButtonKind::WithLogPre,
            ButtonMacro::LinkPrevious => ButtonKind::LinkPrevious,
            ButtonMacro::LiveCss(fragment) => ButtonKind::LiveCss(fragment),
            ButtonMacro::LivePreview => ButtonKind::LivePreview,
            ButtonMacro::LivePreviewFloat => ButtonKind::LivePreviewFloat,
        }
    }
}
