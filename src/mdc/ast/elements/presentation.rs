//! Presentation
//!
//! The root of the tree: presentation-wide metadata plus the chapters in
//! discovery order. Metadata comes from configuration; the chapters are
//! filled in by the parser.

use super::chapter::Chapter;
use crate::mdc::ast::traits::Renderer;
use crate::mdc::toc::Toc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresentationMetadata {
    pub title_1: String,
    pub title_2: String,
    pub section_number: u32,
    pub section_name: String,
    pub copyright: String,
    pub author: String,
    /// Language of code blocks that do not name one
    pub default_language: String,
    pub description: String,
    pub term: String,
    /// Language of the slide text (selects the localization table)
    pub slide_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub metadata: PresentationMetadata,
    pub chapters: Vec<Chapter>,
}

impl Presentation {
    pub fn new(metadata: PresentationMetadata) -> Self {
        Self {
            metadata,
            chapters: Vec::new(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.metadata.default_language
    }

    pub fn slide_count(&self) -> usize {
        self.chapters.iter().map(|c| c.slides.len()).sum()
    }

    /// Walk the tree through a renderer: presentation bracket, table of
    /// contents, then every chapter and every slide that is not skipped.
    pub fn render(&self, toc: &Toc, renderer: &mut dyn Renderer) {
        renderer.presentation_start(self);
        toc.render(renderer);
        for chapter in &self.chapters {
            renderer.chapter_start(&chapter.title, chapter.number, &chapter.id);
            for slide in chapter.visible_slides() {
                renderer.slide_start(&slide.title, slide.number, &slide.id, slide.contains_code);
                for element in &slide.elements {
                    element.render(renderer);
                }
                renderer.slide_end();
            }
            renderer.chapter_end();
        }
        renderer.presentation_end(self);
    }
}
