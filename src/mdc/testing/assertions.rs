//! Fluent assertion API for parsed presentations
//!
//!     assert_presentation(&presentation)
//!         .chapter_count(2)
//!         .chapter(0, |c| {
//!             c.title("Chapter 1").slide(0, |s| {
//!                 s.title("Slide 1.1")
//!                     .element_types(&["Text", "UnorderedList", "Text"])
//!                     .element(1, |e| {
//!                         e.assert_list().item(0, "Item 1").nested(2, |n| {
//!                             n.item(0, "Item 2.1");
//!                         });
//!                     });
//!             });
//!         });
//!
//! Every assertion carries a context path (`chapters[0]:slides[3]:elements[1]`)
//! into its failure message.

use super::matchers::TextMatch;
use crate::mdc::ast::{
    Chapter, Element, Image, List, ListEntry, MultipleChoiceQuestions, Presentation, Slide,
    Source, Table,
};
use crate::mdc::lexing::Alignment;

/// Create an assertion builder for a presentation
pub fn assert_presentation(presentation: &Presentation) -> PresentationAssertion<'_> {
    PresentationAssertion { presentation }
}

fn summarize(elements: &[Element]) -> String {
    elements
        .iter()
        .map(Element::node_type)
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct PresentationAssertion<'a> {
    presentation: &'a Presentation,
}

impl<'a> PresentationAssertion<'a> {
    pub fn chapter_count(self, expected: usize) -> Self {
        let actual = self.presentation.chapters.len();
        assert_eq!(
            actual, expected,
            "Expected {} chapters, found {}",
            expected, actual
        );
        self
    }

    pub fn slide_count(self, expected: usize) -> Self {
        let actual = self.presentation.slide_count();
        assert_eq!(actual, expected, "Expected {} slides, found {}", expected, actual);
        self
    }

    pub fn chapter<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ChapterAssertion<'a>),
    {
        let chapters = &self.presentation.chapters;
        assert!(
            index < chapters.len(),
            "Chapter index {} out of bounds (presentation has {} chapters)",
            index,
            chapters.len()
        );
        assertion(ChapterAssertion {
            chapter: &chapters[index],
            context: format!("chapters[{}]", index),
        });
        self
    }
}

pub struct ChapterAssertion<'a> {
    chapter: &'a Chapter,
    context: String,
}

impl<'a> ChapterAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.chapter.title, &self.context);
        self
    }

    pub fn id(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.chapter.id, &self.context);
        self
    }

    pub fn slide_count(self, expected: usize) -> Self {
        let actual = self.chapter.slides.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} slides, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn slide<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SlideAssertion<'a>),
    {
        let slides = &self.chapter.slides;
        assert!(
            index < slides.len(),
            "{}: Slide index {} out of bounds (chapter has {} slides)",
            self.context,
            index,
            slides.len()
        );
        assertion(SlideAssertion {
            slide: &slides[index],
            context: format!("{}:slides[{}]", self.context, index),
        });
        self
    }
}

pub struct SlideAssertion<'a> {
    slide: &'a Slide,
    context: String,
}

impl<'a> SlideAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.slide.title, &self.context);
        self
    }

    pub fn number(self, expected: usize) -> Self {
        assert_eq!(
            self.slide.number, expected,
            "{}: Expected slide number {}",
            self.context, expected
        );
        self
    }

    pub fn contains_code(self, expected: bool) -> Self {
        assert_eq!(
            self.slide.contains_code, expected,
            "{}: Expected contains_code == {}",
            self.context, expected
        );
        self
    }

    pub fn skipped(self, expected: bool) -> Self {
        assert_eq!(
            self.slide.skip, expected,
            "{}: Expected skip == {}",
            self.context, expected
        );
        self
    }

    pub fn element_count(self, expected: usize) -> Self {
        let actual = self.slide.elements.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} elements, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.slide.elements)
        );
        self
    }

    /// Node types of all elements, in order
    pub fn element_types(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.slide.elements.iter().map(Element::node_type).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected element types",
            self.context
        );
        self
    }

    /// Trimmed plain text of the leading elements, in order
    pub fn element_texts(self, expected: &[&str]) -> Self {
        for (index, text) in expected.iter().enumerate() {
            let element = self.slide.elements.get(index).unwrap_or_else(|| {
                panic!(
                    "{}: Expected an element at index {}, found [{}]",
                    self.context,
                    index,
                    summarize(&self.slide.elements)
                )
            });
            TextMatch::Trimmed(text.to_string()).assert(
                &element.to_string(),
                &format!("{}:elements[{}]", self.context, index),
            );
        }
        self
    }

    pub fn element<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let elements = &self.slide.elements;
        assert!(
            index < elements.len(),
            "{}: Element index {} out of bounds (slide has [{}])",
            self.context,
            index,
            summarize(elements)
        );
        assertion(ElementAssertion {
            element: &elements[index],
            context: format!("{}:elements[{}]", self.context, index),
        });
        self
    }

    /// Elements after the `---` separator
    pub fn comment<F>(self, assertion: F) -> Self
    where
        F: FnOnce(&'a [Element]),
    {
        let comment = self
            .slide
            .comment()
            .unwrap_or_else(|| panic!("{}: Expected a comment", self.context));
        assertion(comment);
        self
    }

    pub fn digest(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.slide.digest(), &self.context);
        self
    }
}

pub struct ElementAssertion<'a> {
    element: &'a Element,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.element.node_type(),
            expected,
            "{}: Unexpected element type",
            self.context
        );
        self
    }

    /// Plain text of the element
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.element.to_string(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string())
            .assert(&self.element.to_string(), &self.context);
        self
    }

    fn expected(&self, node_type: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            node_type,
            self.element.node_type()
        )
    }

    pub fn assert_list(self) -> ListAssertion<'a> {
        match self.element {
            Element::UnorderedList(list) | Element::OrderedList(list) => ListAssertion {
                list,
                context: self.context,
            },
            _ => self.expected("a list"),
        }
    }

    pub fn assert_source(self) -> SourceAssertion<'a> {
        match self.element {
            Element::Source(source) => SourceAssertion {
                source,
                context: self.context,
            },
            _ => self.expected("Source"),
        }
    }

    pub fn assert_table(self) -> TableAssertion<'a> {
        match self.element {
            Element::Table(table) => TableAssertion {
                table,
                context: self.context,
            },
            _ => self.expected("Table"),
        }
    }

    pub fn assert_image(self) -> ImageAssertion<'a> {
        match self.element {
            Element::Image(image) => ImageAssertion {
                image,
                context: self.context,
            },
            _ => self.expected("Image"),
        }
    }

    pub fn assert_multiple_choice(self) -> MultipleChoiceAssertion<'a> {
        match self.element {
            Element::MultipleChoiceQuestions(questions) => MultipleChoiceAssertion {
                questions,
                context: self.context,
            },
            _ => self.expected("MultipleChoiceQuestions"),
        }
    }

    pub fn heading(self, level: usize, title: &str) -> Self {
        match self.element {
            Element::Heading {
                level: actual_level,
                title: actual_title,
            } => {
                assert_eq!(*actual_level, level, "{}: Unexpected heading level", self.context);
                TextMatch::Exact(title.to_string()).assert(actual_title, &self.context);
            }
            _ => self.expected("Heading"),
        }
        self
    }

    pub fn quote_source(self, expected: Option<&str>) -> Self {
        match self.element {
            Element::Quote(quote) => assert_eq!(
                quote.source.as_deref(),
                expected,
                "{}: Unexpected quote source",
                self.context
            ),
            _ => self.expected("Quote"),
        }
        self
    }
}

pub struct ListAssertion<'a> {
    list: &'a List,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn entry_count(self, expected: usize) -> Self {
        let actual = self.list.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} list entries, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn ordered(self, expected: bool) -> Self {
        assert_eq!(
            self.list.is_ordered(),
            expected,
            "{}: Expected ordered == {}",
            self.context,
            expected
        );
        self
    }

    pub fn start_number(self, expected: u32) -> Self {
        assert_eq!(
            self.list.start_number, expected,
            "{}: Unexpected start number",
            self.context
        );
        self
    }

    /// Literal entry at `index`
    pub fn item(self, index: usize, expected: &str) -> Self {
        match self.list.entries.get(index) {
            Some(ListEntry::Item(text)) => TextMatch::Exact(expected.to_string())
                .assert(text, &format!("{}:entries[{}]", self.context, index)),
            other => panic!(
                "{}: Expected item at index {}, found {:?}",
                self.context, index, other
            ),
        }
        self
    }

    /// Nested list at `index`
    pub fn nested<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListAssertion<'a>),
    {
        match self.list.entries.get(index) {
            Some(ListEntry::Nested(list)) => assertion(ListAssertion {
                list,
                context: format!("{}:entries[{}]", self.context, index),
            }),
            other => panic!(
                "{}: Expected nested list at index {}, found {:?}",
                self.context, index, other
            ),
        }
        self
    }
}

pub struct SourceAssertion<'a> {
    source: &'a Source,
    context: String,
}

impl SourceAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.source.text, &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.source.text, &self.context);
        self
    }

    pub fn language(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.source.language, &self.context);
        self
    }

    pub fn caption(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.source.caption.as_deref(),
            expected,
            "{}: Unexpected caption",
            self.context
        );
        self
    }

    pub fn order(self, expected: Option<u32>) -> Self {
        assert_eq!(self.source.order, expected, "{}: Unexpected order", self.context);
        self
    }

    /// Provenance line range of included source
    pub fn lines(self, first: usize, last: usize) -> Self {
        let origin = self
            .source
            .origin
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected included source", self.context));
        assert_eq!(
            (origin.first_line, origin.last_line),
            (first, last),
            "{}: Unexpected line range",
            self.context
        );
        self
    }
}

pub struct TableAssertion<'a> {
    table: &'a Table,
    context: String,
}

impl TableAssertion<'_> {
    pub fn headers(self, expected: &[&str]) -> Self {
        assert_eq!(self.table.headers, expected, "{}: Unexpected headers", self.context);
        self
    }

    pub fn alignments(self, expected: &[Alignment]) -> Self {
        assert_eq!(
            self.table.alignments, expected,
            "{}: Unexpected alignments",
            self.context
        );
        self
    }

    pub fn row(self, index: usize, expected: &[&str]) -> Self {
        let row = self.table.rows.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Row index {} out of bounds (table has {} rows)",
                self.context,
                index,
                self.table.rows.len()
            )
        });
        assert_eq!(row, expected, "{}: Unexpected row {}", self.context, index);
        self
    }

    pub fn row_count(self, expected: usize) -> Self {
        assert_eq!(
            self.table.rows.len(),
            expected,
            "{}: Unexpected row count",
            self.context
        );
        self
    }
}

pub struct ImageAssertion<'a> {
    image: &'a Image,
    context: String,
}

impl ImageAssertion<'_> {
    pub fn location(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.image.location, &self.context);
        self
    }

    pub fn alt(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.image.alt, &self.context);
        self
    }

    pub fn title(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.image.title, &self.context);
        self
    }

    pub fn widths(self, slide: Option<&str>, plain: Option<&str>) -> Self {
        assert_eq!(
            (
                self.image.width_slide.as_deref(),
                self.image.width_plain.as_deref()
            ),
            (slide, plain),
            "{}: Unexpected widths",
            self.context
        );
        self
    }
}

pub struct MultipleChoiceAssertion<'a> {
    questions: &'a MultipleChoiceQuestions,
    context: String,
}

impl MultipleChoiceAssertion<'_> {
    pub fn inline(self, expected: bool) -> Self {
        assert_eq!(
            self.questions.inline, expected,
            "{}: Expected inline == {}",
            self.context, expected
        );
        self
    }

    pub fn question(self, index: usize, text: &str, correct: bool) -> Self {
        let question = self.questions.questions.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Question index {} out of bounds",
                self.context, index
            )
        });
        TextMatch::Exact(text.to_string()).assert(&question.text, &self.context);
        assert_eq!(
            question.correct, correct,
            "{}: Unexpected correctness of question {}",
            self.context, index
        );
        self
    }

    pub fn correctness(self, expected: &[bool]) -> Self {
        let actual: Vec<bool> = self.questions.questions.iter().map(|q| q.correct).collect();
        assert_eq!(actual, expected, "{}: Unexpected correctness flags", self.context);
        self
    }
}
