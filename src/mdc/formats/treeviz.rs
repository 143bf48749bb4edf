//! Treeviz formatter for presentations
//!
//! A one line per node outline of a parsed presentation, for quick scanning of
//! what the parser made of a source. Nesting is drawn with box connectors and
//! every label is truncated to 30 characters.
//!
//! The outline is collected through the [Renderer] contract, so it shows
//! exactly what an output renderer would be handed: the table of contents,
//! then chapters and slides that are not skipped, in document order.
//!
//! Example:
//!
//!     ⧉ Programmieren 1
//!     ├─ ☷ Inhalt
//!     │ └─ # Basics
//!     │   └─ ▭ Intro
//!     └─ § Basics
//!       └─ ▤ Intro
//!         ├─ ¶ Hello
//!         └─ ☰ 2 items
//!
//! Icons
//!     Structure:
//!         Presentation: ⧉
//!         Toc: ☷   TocEntry: #   TocSubEntry: ▭
//!         Chapter: §
//!         Slide: ▤
//!         Comment: %
//!     Elements:
//!         Heading: ⊤   Text: ¶
//!         UnorderedList: ☰   OrderedList: №   ListItem: •
//!         Source: 𝒱   TextLine: ↵
//!         Table: ▦   TableHeader: ═   TableRow: ─
//!         Quote: "   Important: !   Question: ?   Box: □
//!         Script: ƒ   Equation: √   HTML: ‹›   UML: ◇   Image: ▣
//!         MultipleChoiceQuestions: ☑   MultipleChoice: ☐
//!         Button: ◉   VerticalSpace: ↕

use super::registry::{FormatError, Formatter};
use crate::mdc::ast::{Image, MultipleChoice, Presentation, Renderer};
use crate::mdc::config::Localization;
use crate::mdc::lexing::Alignment;
use crate::mdc::toc::Toc;

const MAX_LABEL: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    let flat = s.replace('\n', " ");
    if flat.chars().count() > max_chars {
        let mut truncated = flat.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        flat
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Presentation" => "⧉",
        "Toc" => "☷",
        "TocEntry" => "#",
        "TocSubEntry" => "▭",
        "Chapter" => "§",
        "Slide" => "▤",
        "Comment" => "%",
        "Heading" => "⊤",
        "Text" => "¶",
        "UnorderedList" => "☰",
        "OrderedList" => "№",
        "ListItem" => "•",
        "Source" => "𝒱",
        "TextLine" => "↵",
        "Table" => "▦",
        "TableHeader" => "═",
        "TableRow" => "─",
        "Quote" => "\"",
        "Important" => "!",
        "Question" => "?",
        "Box" => "□",
        "Script" => "ƒ",
        "Equation" => "√",
        "HTML" => "‹›",
        "UML" => "◇",
        "Image" => "▣",
        "MultipleChoiceQuestions" => "☑",
        "MultipleChoice" => "☐",
        "Button" => "◉",
        "VerticalSpace" => "↕",
        _ => "○",
    }
}

/// One node of the outline
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineNode {
    pub node_type: &'static str,
    pub label: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn new(node_type: &'static str, label: impl Into<String>) -> Self {
        Self {
            node_type,
            label: label.into(),
            children: Vec::new(),
        }
    }
}

/// Renderer assembling the outline from start/end events
struct OutlineBuilder<'a> {
    localization: &'a Localization,
    stack: Vec<OutlineNode>,
    root: Option<OutlineNode>,
}

impl<'a> OutlineBuilder<'a> {
    fn new(localization: &'a Localization) -> Self {
        Self {
            localization,
            stack: Vec::new(),
            root: None,
        }
    }

    fn open(&mut self, node_type: &'static str, label: impl Into<String>) {
        self.stack.push(OutlineNode::new(node_type, label));
    }

    fn close(&mut self) {
        let Some(mut node) = self.stack.pop() else {
            return;
        };
        // Counted containers carry a suffix until their size is known
        if matches!(
            node.node_type,
            "UnorderedList" | "OrderedList" | "MultipleChoiceQuestions"
        ) {
            node.label = format!("{} items{}", node.children.len(), node.label);
        }
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root = Some(node),
        }
    }

    fn leaf(&mut self, node_type: &'static str, label: impl Into<String>) {
        self.open(node_type, label);
        self.close();
    }

    /// Make the last closed child the open node again
    fn reopen_last_child(&mut self) {
        let child = self
            .stack
            .last_mut()
            .and_then(|parent| parent.children.pop())
            .unwrap_or_else(|| OutlineNode::new("TocEntry", ""));
        self.stack.push(child);
    }

    fn finish(mut self) -> Option<OutlineNode> {
        while !self.stack.is_empty() {
            self.close();
        }
        self.root
    }
}

impl Renderer for OutlineBuilder<'_> {
    fn presentation_start(&mut self, presentation: &Presentation) {
        let title = &presentation.metadata.title_1;
        let label = if title.is_empty() {
            self.localization.get("presentation").to_string()
        } else {
            title.clone()
        };
        self.open("Presentation", label);
    }

    fn presentation_end(&mut self, _presentation: &Presentation) {
        self.close();
    }

    fn chapter_start(&mut self, title: &str, _number: usize, _id: &str) {
        let label = if title.is_empty() {
            self.localization.get("untitled")
        } else {
            title
        };
        self.open("Chapter", label.to_string());
    }

    fn chapter_end(&mut self) {
        self.close();
    }

    fn slide_start(&mut self, title: &str, _number: usize, _id: &str, _contains_code: bool) {
        self.open("Slide", title);
    }

    fn slide_end(&mut self) {
        self.close();
    }

    fn comment_start(&mut self) {
        let label = self.localization.get("comment").to_string();
        self.open("Comment", label);
    }

    fn comment_end(&mut self) {
        self.close();
    }

    fn toc_start(&mut self) {
        let label = self.localization.get("toc").to_string();
        self.open("Toc", label);
    }

    fn toc_entry(&mut self, name: &str, _anchor: &str) {
        self.leaf("TocEntry", name);
    }

    fn toc_sub_entries_start(&mut self) {
        self.reopen_last_child();
    }

    fn toc_sub_entry(&mut self, name: &str, _anchor: &str) {
        self.leaf("TocSubEntry", name);
    }

    fn toc_sub_entries_end(&mut self) {
        self.close();
    }

    fn toc_end(&mut self) {
        self.close();
    }

    fn heading(&mut self, level: usize, title: &str) {
        self.leaf("Heading", format!("{} {}", "#".repeat(level), title));
    }

    fn text(&mut self, content: &str) {
        self.leaf("Text", content);
    }

    fn quote(&mut self, content: &str, source: Option<&str>) {
        match source {
            Some(source) => self.leaf("Quote", format!("{} -- {}", content, source)),
            None => self.leaf("Quote", content),
        }
    }

    fn important(&mut self, content: &str) {
        self.leaf("Important", content);
    }

    fn question(&mut self, content: &str) {
        self.leaf("Question", content);
    }

    fn callout_box(&mut self, content: &str) {
        self.leaf("Box", content);
    }

    fn ul_start(&mut self) {
        self.open("UnorderedList", "");
    }

    fn ul_item(&mut self, content: &str) {
        self.leaf("ListItem", content);
    }

    fn ul_end(&mut self) {
        self.close();
    }

    fn ol_start(&mut self, number: u32) {
        let suffix = if number == 1 {
            String::new()
        } else {
            format!(" from {}", number)
        };
        self.open("OrderedList", suffix);
    }

    fn ol_item(&mut self, content: &str) {
        self.leaf("ListItem", content);
    }

    fn ol_end(&mut self) {
        self.close();
    }

    fn table_start(&mut self, columns: usize) {
        self.open("Table", format!("{} columns", columns));
    }

    fn table_header(&mut self, headers: &[String], _alignments: &[Alignment]) {
        self.leaf("TableHeader", headers.join(" | "));
    }

    fn table_row(&mut self, row: &[String], _alignments: &[Alignment]) {
        self.leaf("TableRow", row.join(" | "));
    }

    fn table_end(&mut self) {
        self.close();
    }

    fn code_start(&mut self, language: &str, caption: Option<&str>) {
        match caption {
            Some(caption) => self.open("Source", format!("{} {}", language, caption)),
            None => self.open("Source", language),
        }
    }

    fn code(&mut self, content: &str) {
        for line in content.lines() {
            self.leaf("TextLine", line);
        }
    }

    fn code_end(&mut self, _caption: Option<&str>) {
        self.close();
    }

    fn equation(&mut self, content: &str) {
        self.leaf("Equation", content.trim());
    }

    fn script(&mut self, content: &str) {
        self.leaf("Script", content.trim());
    }

    fn html(&mut self, content: &str) {
        self.leaf("HTML", content);
    }

    fn uml(&mut self, content: &str, width_slide: Option<&str>, width_plain: Option<&str>) {
        let lines = content.lines().count();
        self.leaf(
            "UML",
            format!(
                "{} lines {}/{}",
                lines,
                width_slide.unwrap_or("-"),
                width_plain.unwrap_or("-")
            ),
        );
    }

    fn image(&mut self, image: &Image) {
        self.leaf("Image", image.location.as_str());
    }

    fn multiple_choice_start(&mut self, inline: bool) {
        self.open("MultipleChoiceQuestions", if inline { ", inline" } else { "" });
    }

    fn multiple_choice(&mut self, question: &MultipleChoice, _inline: bool) {
        let mark = if question.correct { "[x]" } else { "[ ]" };
        self.leaf("MultipleChoice", format!("{} {}", mark, question.text));
    }

    fn multiple_choice_end(&mut self, _inline: bool) {
        self.close();
    }

    fn button(&mut self, line_id: &str) {
        self.leaf("Button", format!("Button {}", line_id));
    }

    fn button_with_log(&mut self, line_id: &str) {
        self.leaf("Button", format!("Button-With-Log {}", line_id));
    }

    fn button_with_log_pre(&mut self, line_id: &str) {
        self.leaf("Button", format!("Button-With-Log-Pre {}", line_id));
    }

    fn link_previous(&mut self, line_id: &str) {
        self.leaf("Button", format!("Link-Previous {}", line_id));
    }

    fn live_css(&mut self, line_id: &str, fragment: &str) {
        self.leaf("Button", format!("Live-CSS {} {}", line_id, fragment));
    }

    fn live_preview(&mut self, line_id: &str) {
        self.leaf("Button", format!("Live-Preview {}", line_id));
    }

    fn live_preview_float(&mut self, line_id: &str) {
        self.leaf("Button", format!("Live-Preview-Float {}", line_id));
    }

    fn vertical_space(&mut self, spacing: Option<u32>) {
        match spacing {
            Some(amount) => self.leaf("VerticalSpace", amount.to_string()),
            None => self.leaf("VerticalSpace", ""),
        }
    }
}

fn format_node(node: &OutlineNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.node_type),
        truncate(&node.label, MAX_LABEL)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(child, &child_prefix, i == child_count - 1, output);
    }
}

/// Collect the outline of a presentation
pub fn outline(presentation: &Presentation, localization: &Localization) -> Option<OutlineNode> {
    let toc = Toc::build(presentation);
    let mut builder = OutlineBuilder::new(localization);
    presentation.render(&toc, &mut builder);
    builder.finish()
}

pub fn to_treeviz_str(presentation: &Presentation, localization: &Localization) -> String {
    let Some(root) = outline(presentation, localization) else {
        return String::new();
    };
    let mut output = format!(
        "{} {}\n",
        get_icon(root.node_type),
        truncate(&root.label, MAX_LABEL)
    );
    let child_count = root.children.len();
    for (i, child) in root.children.iter().enumerate() {
        format_node(child, "", i == child_count - 1, &mut output);
    }
    output
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Default)]
pub struct TreevizFormatter {
    localization: Localization,
}

impl TreevizFormatter {
    pub fn new(localization: Localization) -> Self {
        Self { localization }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, presentation: &Presentation) -> Result<String, FormatError> {
        Ok(to_treeviz_str(presentation, &self.localization))
    }
}
