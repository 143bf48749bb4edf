//! Table of contents
//!
//! Derived from a finished presentation: one entry per chapter and one
//! sub-entry per slide that is not skipped. Animated slides repeat their
//! title on every step, so a run of sub-entries with the same name collapses
//! into its first occurrence.

use crate::mdc::ast::{Presentation, Renderer};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocSubEntry {
    pub name: String,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub name: String,
    pub anchor: String,
    pub sub_entries: Vec<TocSubEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Toc {
    pub entries: Vec<TocEntry>,
}

impl Toc {
    pub fn build(presentation: &Presentation) -> Self {
        let entries = presentation
            .chapters
            .iter()
            .map(|chapter| {
                let mut sub_entries: Vec<TocSubEntry> = Vec::new();
                for slide in chapter.visible_slides() {
                    if sub_entries.last().is_some_and(|last| last.name == slide.title) {
                        continue;
                    }
                    sub_entries.push(TocSubEntry {
                        name: slide.title.clone(),
                        anchor: slide.id.clone(),
                    });
                }
                TocEntry {
                    name: chapter.title.clone(),
                    anchor: chapter.id.clone(),
                    sub_entries,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.toc_start();
        for entry in &self.entries {
            renderer.toc_entry(&entry.name, &entry.anchor);
            renderer.toc_sub_entries_start();
            for sub in &entry.sub_entries {
                renderer.toc_sub_entry(&sub.name, &sub.anchor);
            }
            renderer.toc_sub_entries_end();
        }
        renderer.toc_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdc::ast::{Chapter, PresentationMetadata, Slide};

    fn presentation() -> Presentation {
        let mut chapter = Chapter::new("Basics", 1);
        chapter.slides.push(Slide::new("Intro", 1, false));
        chapter.slides.push(Slide::new("Loops", 2, false));
        chapter.slides.push(Slide::new("Loops", 3, false));
        chapter.slides.push(Slide::new("Hidden", 4, true));
        chapter.slides.push(Slide::new("Intro", 5, false));
        let mut p = Presentation::new(PresentationMetadata::default());
        p.chapters.push(chapter);
        p.chapters.push(Chapter::new("Empty", 2));
        p
    }

    #[test]
    fn test_consecutive_titles_collapse() {
        let toc = Toc::build(&presentation());
        let names: Vec<&str> = toc.entries[0]
            .sub_entries
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Intro", "Loops", "Intro"]);
        assert_eq!(toc.entries[0].sub_entries[1].anchor, "slide_2");
        assert_eq!(toc.entries[0].anchor, "chap_1");
        assert!(toc.entries[1].sub_entries.is_empty());
    }
}
