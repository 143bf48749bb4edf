//! Slide elements
//!
//! The closed set of things a slide can contain. Every variant renders
//! through one arm of [`Element::render`], exposes a plain-text form through
//! `Display` and a digest through [`Element::digest`].
//!
//! Digests are the concatenated textual content of an element. They are used
//! to detect content that is unchanged between the steps of an animated
//! slide, so elements without text (images, buttons, spacing, raw HTML, UML)
//! digest to the empty string, and so does the trailing comment.

use super::button::{Button, ButtonKind};
use super::image::Image;
use super::list::{List, ListEntry};
use super::multiple_choice::MultipleChoiceQuestions;
use super::source::Source;
use super::table::Table;
use crate::mdc::ast::traits::Renderer;
use crate::mdc::lexing::ListKind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub text: String,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Uml {
    pub content: String,
    pub width_slide: Option<String>,
    pub width_plain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    Text(String),
    UnorderedList(List),
    OrderedList(List),
    Source(Source),
    Table(Table),
    Quote(Quote),
    Important(String),
    Question(String),
    Box(String),
    Script(String),
    Equation(String),
    Html(String),
    Image(Image),
    Uml(Uml),
    MultipleChoiceQuestions(MultipleChoiceQuestions),
    Heading { level: usize, title: String },
    Button(Button),
    /// `<br>` (no amount) or `<!-- Spacing: N -->`
    VerticalSpace(Option<u32>),
    /// Everything after the `---` separator of a slide
    Comment(Vec<Element>),
}

impl Element {
    /// Wrap a list into the variant matching its kind
    pub fn from_list(list: List) -> Self {
        match list.kind {
            ListKind::Unordered => Element::UnorderedList(list),
            ListKind::Ordered => Element::OrderedList(list),
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Element::Text(_) => "Text",
            Element::UnorderedList(_) => "UnorderedList",
            Element::OrderedList(_) => "OrderedList",
            Element::Source(_) => "Source",
            Element::Table(_) => "Table",
            Element::Quote(_) => "Quote",
            Element::Important(_) => "Important",
            Element::Question(_) => "Question",
            Element::Box(_) => "Box",
            Element::Script(_) => "Script",
            Element::Equation(_) => "Equation",
            Element::Html(_) => "HTML",
            Element::Image(_) => "Image",
            Element::Uml(_) => "UML",
            Element::MultipleChoiceQuestions(_) => "MultipleChoiceQuestions",
            Element::Heading { .. } => "Heading",
            Element::Button(_) => "Button",
            Element::VerticalSpace(_) => "VerticalSpace",
            Element::Comment(_) => "Comment",
        }
    }

    pub fn is_source(&self) -> bool {
        matches!(self, Element::Source(_))
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Element::UnorderedList(list) | Element::OrderedList(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_source(&self) -> Option<&Source> {
        match self {
            Element::Source(source) => Some(source),
            _ => None,
        }
    }

    pub fn digest(&self) -> String {
        match self {
            Element::Text(text)
            | Element::Important(text)
            | Element::Question(text)
            | Element::Box(text)
            | Element::Script(text)
            | Element::Equation(text) => text.clone(),
            Element::UnorderedList(list) | Element::OrderedList(list) => list.digest(),
            Element::Source(source) => source.text.clone(),
            Element::Table(table) => table.digest(),
            Element::Quote(quote) => quote.text.clone(),
            Element::MultipleChoiceQuestions(questions) => questions.digest(),
            Element::Heading { title, .. } => title.clone(),
            Element::Html(_)
            | Element::Image(_)
            | Element::Uml(_)
            | Element::Button(_)
            | Element::VerticalSpace(_)
            | Element::Comment(_) => String::new(),
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        match self {
            Element::Text(text) => renderer.text(text),
            Element::UnorderedList(list) | Element::OrderedList(list) => {
                render_list(list, renderer)
            }
            Element::Source(source) => {
                renderer.code_start(&source.language, source.caption.as_deref());
                renderer.code(&source.text);
                renderer.code_end(source.caption.as_deref());
            }
            Element::Table(table) => {
                renderer.table_start(table.column_count());
                renderer.table_header(&table.headers, &table.alignments);
                for row in &table.rows {
                    renderer.table_row(row, &table.alignments);
                }
                renderer.table_end();
            }
            Element::Quote(quote) => renderer.quote(&quote.text, quote.source.as_deref()),
            Element::Important(text) => renderer.important(text),
            Element::Question(text) => renderer.question(text),
            Element::Box(text) => renderer.callout_box(text),
            Element::Script(text) => renderer.script(text),
            Element::Equation(text) => renderer.equation(text),
            Element::Html(text) => renderer.html(text),
            Element::Image(image) => renderer.image(image),
            Element::Uml(uml) => renderer.uml(
                &uml.content,
                uml.width_slide.as_deref(),
                uml.width_plain.as_deref(),
            ),
            Element::MultipleChoiceQuestions(questions) => {
                renderer.multiple_choice_start(questions.inline);
                for question in &questions.questions {
                    renderer.multiple_choice(question, questions.inline);
                }
                renderer.multiple_choice_end(questions.inline);
            }
            Element::Heading { level, title } => renderer.heading(*level, title),
            Element::Button(button) => render_button(button, renderer),
            Element::VerticalSpace(spacing) => renderer.vertical_space(*spacing),
            Element::Comment(elements) => {
                renderer.comment_start();
                for element in elements {
                    element.render(renderer);
                }
                renderer.comment_end();
            }
        }
    }
}

fn render_list(list: &List, renderer: &mut dyn Renderer) {
    if list.is_ordered() {
        renderer.ol_start(list.start_number);
    } else {
        renderer.ul_start();
    }
    for entry in &list.entries {
        match entry {
            ListEntry::Item(text) if list.is_ordered() => renderer.ol_item(text),
            ListEntry::Item(text) => renderer.ul_item(text),
            ListEntry::Nested(nested) => render_list(nested, renderer),
        }
    }
    if list.is_ordered() {
        renderer.ol_end();
    } else {
        renderer.ul_end();
    }
}

fn render_button(button: &Button, renderer: &mut dyn Renderer) {
    let id = button.line_id.as_str();
    match &button.kind {
        ButtonKind::Plain => renderer.button(id),
        ButtonKind::WithLog => renderer.button_with_log(id),
        ButtonKind::WithLogPre => renderer.button_with_log_pre(id),
        ButtonKind::LinkPrevious => renderer.link_previous(id),
        ButtonKind::LiveCss(fragment) => renderer.live_css(id, fragment),
        ButtonKind::LivePreview => renderer.live_preview(id),
        ButtonKind::LivePreviewFloat => renderer.live_preview_float(id),
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Text(text)
            | Element::Important(text)
            | Element::Question(text)
            | Element::Box(text)
            | Element::Script(text)
            | Element::Equation(text)
            | Element::Html(text) => write!(f, "{}", text),
            Element::UnorderedList(list) | Element::OrderedList(list) => write!(f, "{}", list),
            Element::Source(source) => write!(f, "{}", source),
            Element::Table(table) => write!(f, "{}", table),
            Element::Quote(quote) => match &quote.source {
                Some(source) => write!(f, "{}\n-- {}", quote.text, source),
                None => write!(f, "{}", quote.text),
            },
            Element::Image(image) => write!(f, "{}", image.location),
            Element::Uml(uml) => write!(f, "{}", uml.content),
            Element::MultipleChoiceQuestions(questions) => write!(f, "{}", questions),
            Element::Heading { title, .. } => write!(f, "{}", title),
            Element::Button(_) | Element::VerticalSpace(_) => Ok(()),
            Element::Comment(elements) => {
                let parts: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "{}", parts.join("\n"))
            }
        }
    }
}
