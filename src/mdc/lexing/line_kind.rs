//! Line kinds
//!
//! The vocabulary produced by the line classifier. Every source line outside
//! an open region maps to exactly one `LineKind`; payload borrowed from the
//! line keeps the original text untouched.

use serde::Serialize;

/// Kind of an unordered/ordered list marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// A single list item line (`  * foo`, `    2. bar`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemLine<'a> {
    pub kind: ListKind,
    /// Nesting level 1-3, derived from an indent of 2/4/6 spaces
    pub level: usize,
    /// Literal number of an ordered item
    pub number: Option<u32>,
    pub content: &'a str,
}

/// The members of the `>`-prefixed family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuoteKind {
    /// `> `
    Quote,
    /// `>> `, the source of the preceding quote
    QuoteSource,
    /// `>! `
    Important,
    /// `>? `
    Question,
    /// `>: `
    Box,
}

/// Column alignment encoded in a table separator line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
    Left,
    Right,
    Center,
    /// An empty separator cell; the column renders without content
    Separator,
}

/// Opening line of a fenced code block: ```` ```java[2]{Caption} ````
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FenceOpening<'a> {
    pub language: Option<&'a str>,
    pub order: Option<u32>,
    pub caption: Option<&'a str>,
}

/// `!INCLUDESRC[order] "path" language`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    pub path: String,
    /// 0 means the whole file
    pub order: usize,
    pub language: Option<String>,
}

/// `@startuml[slide][plain]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UmlOpening {
    pub width_slide: Option<String>,
    pub width_plain: Option<String>,
}

/// `![alt](location "title")/slide//plain/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLine {
    pub location: String,
    pub alt: String,
    pub title: String,
    pub width_slide: Option<String>,
    pub width_plain: Option<String>,
}

/// The button macros, `((Live-CSS fragment))` and friends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonMacro {
    Plain,
    WithLog,
    WithLogPre,
    LinkPrevious,
    LiveCss(String),
    LivePreview,
    LivePreviewFloat,
}

/// What a single line expresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    ChapterTitle(&'a str),
    SlideTitle {
        title: String,
        skip: bool,
    },
    /// `###` and deeper
    Heading {
        level: usize,
        title: &'a str,
    },
    ListItem(ListItemLine<'a>),
    /// Content of a 4-space indented line, prefix removed
    IndentedCode(&'a str),
    FenceStart(FenceOpening<'a>),
    TableSeparator(Vec<Alignment>),
    TableRow(Vec<String>),
    Quote(QuoteKind, &'a str),
    Include(IncludeDirective),
    /// Starts like an include directive but does not follow its grammar
    MalformedInclude,
    SpacingComment(u32),
    HtmlComment,
    VerticalSpace,
    Separator,
    UmlStart(UmlOpening),
    EquationStart,
    ScriptStart,
    MultipleChoice {
        correct: bool,
        inline: bool,
        text: &'a str,
    },
    Image(ImageLine),
    Button(ButtonMacro),
    Html(&'a str),
    /// A line accepted by the plain-text predicate
    Text(&'a str),
    /// Anything else; still rendered as text
    Other(&'a str),
}

impl LineKind<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Blank => "blank",
            LineKind::ChapterTitle(_) => "chapter-title",
            LineKind::SlideTitle { .. } => "slide-title",
            LineKind::Heading { .. } => "heading",
            LineKind::ListItem(_) => "list-item",
            LineKind::IndentedCode(_) => "indented-code",
            LineKind::FenceStart(_) => "fence-start",
            LineKind::TableSeparator(_) => "table-separator",
            LineKind::TableRow(_) => "table-row",
            LineKind::Quote(..) => "quote",
            LineKind::Include(_) => "include",
            LineKind::MalformedInclude => "malformed-include",
            LineKind::SpacingComment(_) => "spacing-comment",
            LineKind::HtmlComment => "html-comment",
            LineKind::VerticalSpace => "vertical-space",
            LineKind::Separator => "separator",
            LineKind::UmlStart(_) => "uml-start",
            LineKind::EquationStart => "equation-start",
            LineKind::ScriptStart => "script-start",
            LineKind::MultipleChoice { .. } => "multiple-choice",
            LineKind::Image(_) => "image",
            LineKind::Button(_) => "button",
            LineKind::Html(_) => "html",
            LineKind::Text(_) => "text",
            LineKind::Other(_) => "other",
        }
    }
}
