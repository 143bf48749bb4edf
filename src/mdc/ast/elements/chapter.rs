//! Chapter

use super::slide::Slide;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chapter {
    pub title: String,
    /// 1-based, counted across the whole run
    pub number: usize,
    pub id: String,
    pub slides: Vec<Slide>,
}

impl Chapter {
    pub fn new(title: impl Into<String>, number: usize) -> Self {
        Self {
            title: title.into(),
            number,
            id: format!("chap_{}", number),
            slides: Vec::new(),
        }
    }

    /// Slides that take part in the output
    pub fn visible_slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter().filter(|s| !s.skip)
    }
}
