//! Renderer contract
//!
//! Output formats walk the finished tree through this trait. The tree calls
//! exactly one method (or one start/end bracket) per node, in document order;
//! it never produces target markup itself.
//!
//! Default implementations are empty, so a renderer only overrides the events
//! it cares about.
//!
//! # Example
//!
//! ```ignore
//! struct TitleCollector(Vec<String>);
//!
//! impl Renderer for TitleCollector {
//!     fn slide_start(&mut self, title: &str, _: usize, _: &str, _: bool) {
//!         self.0.push(title.to_string());
//!     }
//! }
//!
//! presentation.render(&toc, &mut TitleCollector(Vec::new()));
//! ```

use super::elements::{Image, MultipleChoice, Presentation};
use crate::mdc::lexing::Alignment;

pub trait Renderer {
    // Brackets
    fn presentation_start(&mut self, _presentation: &Presentation) {}
    fn presentation_end(&mut self, _presentation: &Presentation) {}
    fn chapter_start(&mut self, _title: &str, _number: usize, _id: &str) {}
    fn chapter_end(&mut self) {}
    fn slide_start(&mut self, _title: &str, _number: usize, _id: &str, _contains_code: bool) {}
    fn slide_end(&mut self) {}
    fn comment_start(&mut self) {}
    fn comment_end(&mut self) {}

    // Table of contents
    fn toc_start(&mut self) {}
    fn toc_entry(&mut self, _name: &str, _anchor: &str) {}
    fn toc_sub_entries_start(&mut self) {}
    fn toc_sub_entry(&mut self, _name: &str, _anchor: &str) {}
    fn toc_sub_entries_end(&mut self) {}
    fn toc_end(&mut self) {}

    // Text-like elements
    fn heading(&mut self, _level: usize, _title: &str) {}
    fn text(&mut self, _content: &str) {}
    fn quote(&mut self, _content: &str, _source: Option<&str>) {}
    fn important(&mut self, _content: &str) {}
    fn question(&mut self, _content: &str) {}
    fn callout_box(&mut self, _content: &str) {}

    // Lists
    fn ul_start(&mut self) {}
    fn ul_item(&mut self, _content: &str) {}
    fn ul_end(&mut self) {}
    fn ol_start(&mut self, _number: u32) {}
    fn ol_item(&mut self, _content: &str) {}
    fn ol_end(&mut self) {}

    // Tables
    fn table_start(&mut self, _columns: usize) {}
    fn table_header(&mut self, _headers: &[String], _alignments: &[Alignment]) {}
    fn table_row(&mut self, _row: &[String], _alignments: &[Alignment]) {}
    fn table_end(&mut self) {}

    // Code
    fn code_start(&mut self, _language: &str, _caption: Option<&str>) {}
    fn code(&mut self, _content: &str) {}
    fn code_end(&mut self, _caption: Option<&str>) {}

    // Raw regions
    fn equation(&mut self, _content: &str) {}
    fn script(&mut self, _content: &str) {}
    fn html(&mut self, _content: &str) {}
    fn uml(&mut self, _content: &str, _width_slide: Option<&str>, _width_plain: Option<&str>) {}

    fn image(&mut self, _image: &Image) {}

    fn multiple_choice_start(&mut self, _inline: bool) {}
    fn multiple_choice(&mut self, _question: &MultipleChoice, _inline: bool) {}
    fn multiple_choice_end(&mut self, _inline: bool) {}

    // Buttons
    fn button(&mut self, _line_id: &str) {}
    fn button_with_log(&mut self, _line_id: &str) {}
    fn button_with_log_pre(&mut self, _line_id: &str) {}
    fn link_previous(&mut self, _line_id: &str) {}
    fn live_css(&mut self, _line_id: &str, _fragment: &str) {}
    fn live_preview(&mut self, _line_id: &str) {}
    fn live_preview_float(&mut self, _line_id: &str) {}

    fn vertical_space(&mut self, _spacing: Option<u32>) {}
}
