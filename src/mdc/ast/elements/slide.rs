//! Slide
//!
//! A titled, numbered sequence of elements. `contains_code` is derived when
//! the slide closes; a skipped slide keeps its title and number but never
//! holds elements.

use super::element::Element;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub title: String,
    /// 1-based, counted across the whole run
    pub number: usize,
    pub id: String,
    pub contains_code: bool,
    pub skip: bool,
    pub elements: Vec<Element>,
}

impl Slide {
    pub fn new(title: impl Into<String>, number: usize, skip: bool) -> Self {
        Self {
            title: title.into(),
            number,
            id: format!("slide_{}", number),
            contains_code: false,
            skip,
            elements: Vec::new(),
        }
    }

    /// Derive the flags that depend on the complete element list.
    pub(crate) fn finalize(&mut self) {
        if self.skip {
            self.elements.clear();
        }
        self.contains_code = self.elements.iter().any(Element::is_source);
    }

    /// Elements before the `---` separator
    pub fn body(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(|e| !matches!(e, Element::Comment(_)))
    }

    pub fn comment(&self) -> Option<&[Element]> {
        self.elements.iter().find_map(|e| match e {
            Element::Comment(elements) => Some(elements.as_slice()),
            _ => None,
        })
    }

    pub fn digest(&self) -> String {
        self.body().map(Element::digest).collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdc::ast::elements::Source;

    #[test]
    fn test_comment_does_not_count_as_code() {
        let mut slide = Slide::new("Title", 7, false);
        slide.elements.push(Element::Text("body".into()));
        slide.elements.push(Element::Comment(vec![Element::Source(Source::new(
            "int i;", "java",
        ))]));
        slide.finalize();

        assert!(!slide.contains_code);
        assert_eq!(slide.id, "slide_7");
        assert_eq!(slide.digest(), "body");
        assert_eq!(slide.comment().map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_skipped_slide_drops_elements() {
        let mut slide = Slide::new("Hidden", 1, true);
        slide.elements.push(Element::Source(Source::new("x", "c")));
        slide.finalize();

        assert!(slide.elements.is_empty());
        assert!(!slide.contains_code);
    }
}
