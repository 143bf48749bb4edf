//! Parser Engine
//!
//!     The line-by-line state machine. Every line is first offered to the open
//!     region (fenced code, script, equation, UML); inside a region nothing is
//!     interpreted and only the matching terminator ends it. Outside a region
//!     the line is classified and folded into the tree:
//!
//!     - chapter and slide headings close everything and open a new node,
//!     - list items go to the list stack (levels by indentation),
//!     - table rows, quote-family lines, HTML lines, multiple choice lines and
//!       plain text extend the open block of the same kind or replace it,
//!     - everything else produces exactly one element.
//!
//!     A blank line closes the open block but keeps lists open, so a list may
//!     continue after an empty line. Any other non-list line closes the lists,
//!     except a line indented by fewer than four spaces directly after an item,
//!     which continues that item's text. Four-space lines are always code.
//!
//!     Elements land in the open slide, or in its comment once a `---` line
//!     was seen. Slides stay open across file boundaries; blocks and lists do
//!     not, and a region that is still open at the end of a file is fatal.

use super::state::{ListStack, OpenBlock, OpenRegion, RegionHeader};
use crate::mdc::ast::elements::{
    Button, Chapter, Element, Image, MultipleChoiceQuestions, Presentation, PresentationMetadata,
    Quote, Slide, Source, Table, Uml,
};
use crate::mdc::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSeverity};
use crate::mdc::error::{MdcError, MdcResult};
use crate::mdc::includes::{IncludeResolver, IncludeSite};
use crate::mdc::lexing::line_classification as lines;
use crate::mdc::lexing::{
    classify_line, Alignment, IncludeDirective, LineKind, ListItemLine, QuoteKind,
};
use std::path::{Path, PathBuf};

/// Settings that do not come from the presentation metadata
#[derive(Debug, Clone, Default)]
pub struct ParserOptions {
    /// Directory probed for image format variants and license sidecars
    pub image_dir: Option<PathBuf>,
    /// Base for include paths of sources that have no directory of their own
    pub include_base: Option<PathBuf>,
}

pub(crate) struct Engine {
    options: ParserOptions,
    resolver: IncludeResolver,
    presentation: Presentation,
    chapter: Option<Chapter>,
    slide: Option<Slide>,
    /// Elements after the `---` separator of the open slide
    comment: Option<Vec<Element>>,
    region: Option<OpenRegion>,
    block: Option<OpenBlock>,
    lists: ListStack,
    /// The previous line was a list item or its continuation
    after_list_item: bool,
    chapter_count: usize,
    slide_count: usize,
    diagnostics: Vec<Diagnostic>,
    file: PathBuf,
    file_stem: String,
    line: usize,
}

impl Engine {
    pub(crate) fn new(metadata: PresentationMetadata, options: ParserOptions) -> Self {
        let resolver = match &options.include_base {
            Some(base) => IncludeResolver::with_base_dir(base),
            None => IncludeResolver::new(),
        };
        Self {
            options,
            resolver,
            presentation: Presentation::new(metadata),
            chapter: None,
            slide: None,
            comment: None,
            region: None,
            block: None,
            lists: ListStack::default(),
            after_list_item: false,
            chapter_count: 0,
            slide_count: 0,
            diagnostics: Vec::new(),
            file: PathBuf::new(),
            file_stem: String::new(),
            line: 0,
        }
    }

    /// Fold all lines of one source file into the tree.
    pub(crate) fn feed(&mut self, source: &str, file: &Path) -> MdcResult<()> {
        self.file = file.to_path_buf();
        self.file_stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("parsing {}", file.display());

        for (index, line) in source.lines().enumerate() {
            self.line = index + 1;
            self.process_line(line)?;
        }

        if let Some(region) = self.region.take() {
            return Err(MdcError::UnbalancedRegion {
                region: region.header.kind(),
                file: self.file.clone(),
                line: region.start_line,
            });
        }
        self.close_all();
        self.after_list_item = false;
        Ok(())
    }

    /// Close the open slide and chapter and hand out the tree.
    pub(crate) fn finish(mut self) -> (Presentation, Vec<Diagnostic>) {
        self.close_chapter();
        log::debug!(
            "finished presentation: {} chapters, {} slides, {} diagnostics",
            self.presentation.chapters.len(),
            self.presentation.slide_count(),
            self.diagnostics.len()
        );
        (self.presentation, self.diagnostics)
    }

    fn process_line(&mut self, line: &str) -> MdcResult<()> {
        if let Some(region) = self.region.as_mut() {
            if terminates(&region.header, line) {
                if let Some(region) = self.region.take() {
                    self.close_region(region);
                }
            } else {
                region.lines.push(line.to_string());
            }
            return Ok(());
        }

        let kind = classify_line(line);
        log::trace!("{}:{}: {}", self.file.display(), self.line, kind.name());
        let continues_list = self.dispatch(kind, line)?;
        self.after_list_item = continues_list;
        Ok(())
    }

    /// Returns whether the line keeps a list item open for continuation.
    fn dispatch(&mut self, kind: LineKind<'_>, line: &str) -> MdcResult<bool> {
        match kind {
            LineKind::Blank => self.close_block(),
            LineKind::ChapterTitle(title) => {
                self.close_chapter();
                self.open_chapter(title);
            }
            LineKind::SlideTitle { title, skip } => {
                self.close_slide();
                self.open_slide(title, skip);
            }
            LineKind::Heading { level, title } => {
                self.close_all();
                self.emit(Element::Heading {
                    level,
                    title: title.to_string(),
                });
            }
            LineKind::ListItem(item) => {
                self.list_item(item);
                return Ok(true);
            }
            LineKind::IndentedCode(code) => {
                self.close_lists();
                match self.block.as_mut() {
                    Some(OpenBlock::IndentedCode(code_lines)) => code_lines.push(code.to_string()),
                    _ => {
                        self.close_block();
                        self.block = Some(OpenBlock::IndentedCode(vec![code.to_string()]));
                    }
                }
            }
            LineKind::FenceStart(opening) => self.open_region(RegionHeader::fence(&opening)),
            LineKind::ScriptStart => self.open_region(RegionHeader::Script),
            LineKind::EquationStart => self.open_region(RegionHeader::Equation),
            LineKind::UmlStart(opening) => self.open_region(RegionHeader::Uml(opening)),
            LineKind::TableSeparator(alignments) => self.table_separator(alignments, line),
            LineKind::TableRow(cells) => self.table_row(cells),
            LineKind::Quote(QuoteKind::QuoteSource, content) => self.quote_source(content),
            LineKind::Quote(kind, content) => self.quote_line(kind, content),
            LineKind::Include(directive) => self.include(&directive, line)?,
            LineKind::MalformedInclude => {
                self.warn(
                    DiagnosticKind::MalformedDirective,
                    format!("`{}` is not a valid include directive, kept as text", line.trim()),
                );
                self.text_line(line);
            }
            LineKind::SpacingComment(amount) => {
                self.close_all();
                self.emit(Element::VerticalSpace(Some(amount)));
            }
            LineKind::HtmlComment => {}
            LineKind::VerticalSpace => {
                self.close_all();
                self.emit(Element::VerticalSpace(None));
            }
            LineKind::Separator => self.separator(),
            LineKind::MultipleChoice {
                correct,
                inline,
                text,
            } => self.multiple_choice(correct, inline, text),
            LineKind::Image(image_line) => {
                self.close_all();
                let mut image = Image::from(image_line);
                if let Some(dir) = &self.options.image_dir {
                    image.detect_formats(dir);
                }
                self.emit(Element::Image(image));
            }
            LineKind::Button(button) => {
                self.close_all();
                let line_id = format!("{}_{}", self.file_stem, self.line);
                self.emit(Element::Button(Button::new(button.into(), line_id)));
            }
            LineKind::Html(html) => {
                self.close_lists();
                match self.block.as_mut() {
                    Some(OpenBlock::Html(html_lines)) => html_lines.push(html.to_string()),
                    _ => {
                        self.close_block();
                        self.block = Some(OpenBlock::Html(vec![html.to_string()]));
                    }
                }
            }
            LineKind::Other(text) if self.after_list_item && text.starts_with(char::is_whitespace) => {
                if self.lists.extend_last_item(text.trim()) {
                    return Ok(true);
                }
                self.text_line(text);
            }
            LineKind::Text(text) | LineKind::Other(text) => self.text_line(text),
        }
        Ok(false)
    }

    fn open_chapter(&mut self, title: &str) {
        self.chapter_count += 1;
        log::debug!("chapter {}: {}", self.chapter_count, title);
        self.chapter = Some(Chapter::new(title, self.chapter_count));
    }

    fn close_chapter(&mut self) {
        self.close_slide();
        if let Some(chapter) = self.chapter.take() {
            self.presentation.chapters.push(chapter);
        }
    }

    fn open_slide(&mut self, title: String, skip: bool) {
        if self.chapter.is_none() {
            let diagnostic = Diagnostic::warning(
                DiagnosticKind::StructuralAmbiguity,
                &self.file,
                self.line,
                format!("slide `{}` before any chapter, opened an untitled chapter", title),
            )
            .with_severity(DiagnosticSeverity::Information);
            log::info!("{}", diagnostic);
            self.diagnostics.push(diagnostic);
            self.open_chapter("");
        }
        self.slide_count += 1;
        self.slide = Some(Slide::new(title, self.slide_count, skip));
    }

    fn close_slide(&mut self) {
        self.close_all();
        let Some(mut slide) = self.slide.take() else {
            return;
        };
        if let Some(comment) = self.comment.take() {
            slide.elements.push(Element::Comment(comment));
        }
        slide.finalize();
        log::debug!(
            "slide {} `{}`: {} elements{}",
            slide.number,
            slide.title,
            slide.elements.len(),
            if slide.skip { " (skipped)" } else { "" }
        );
        if let Some(chapter) = self.chapter.as_mut() {
            chapter.slides.push(slide);
        }
    }

    fn separator(&mut self) {
        self.close_all();
        if self.slide.is_none() {
            self.warn(
                DiagnosticKind::ContentOutsideSlide,
                "separator outside of any slide ignored",
            );
        } else if self.comment.is_none() {
            self.comment = Some(Vec::new());
        }
    }

    fn open_region(&mut self, header: RegionHeader) {
        self.close_all();
        log::debug!(
            "{}:{}: {} opened",
            self.file.display(),
            self.line,
            header.kind()
        );
        self.region = Some(OpenRegion::new(header, self.line));
    }

    fn close_region(&mut self, region: OpenRegion) {
        log::debug!(
            "{}:{}: {} closed after {} lines",
            self.file.display(),
            self.line,
            region.header.kind(),
            region.lines.len()
        );
        let content = region.content();
        let element = match region.header {
            RegionHeader::Fence {
                language,
                order,
                caption,
            } => {
                let language = language.unwrap_or_else(|| self.default_language());
                Element::Source(
                    Source::new(content, language)
                        .with_caption(caption)
                        .with_order(order),
                )
            }
            RegionHeader::Script => Element::Script(content),
            RegionHeader::Equation => Element::Equation(content),
            RegionHeader::Uml(opening) => Element::Uml(Uml {
                content,
                width_slide: opening.width_slide,
                width_plain: opening.width_plain,
            }),
        };
        self.emit(element);
    }

    fn list_item(&mut self, item: ListItemLine<'_>) {
        self.close_block();
        let reachable = self.lists.depth() + 1;
        let level = if item.level > reachable {
            self.warn(
                DiagnosticKind::StructuralAmbiguity,
                format!(
                    "level {} list item without an open level {} list, treated as level {}",
                    item.level,
                    item.level - 1,
                    reachable
                ),
            );
            reachable
        } else {
            item.level
        };
        if let Some(finished) = self
            .lists
            .push_item(item.kind, level, item.number, item.content)
        {
            self.emit(Element::from_list(finished));
        }
    }

    fn table_row(&mut self, cells: Vec<String>) {
        self.close_lists();
        if let Some(OpenBlock::Table { table, body }) = self.block.as_mut() {
            let fit = table.push_row(cells);
            *body = true;
            self.report_fit(fit.describe("row"));
            return;
        }
        self.close_block();
        self.block = Some(OpenBlock::Table {
            table: Table::with_headers(cells),
            body: false,
        });
    }

    fn table_separator(&mut self, alignments: Vec<Alignment>, line: &str) {
        match self.block.as_mut() {
            Some(OpenBlock::Table { table, body }) if !*body => {
                let fit = table.set_alignments(alignments);
                *body = true;
                self.report_fit(fit.describe("separator"));
            }
            Some(OpenBlock::Table { .. }) => self.warn(
                DiagnosticKind::MalformedDirective,
                "table separator inside the table body ignored",
            ),
            _ => {
                self.warn(
                    DiagnosticKind::MalformedDirective,
                    "table separator without a header row, kept as text",
                );
                self.text_line(line);
            }
        }
    }

    fn report_fit(&mut self, message: Option<String>) {
        if let Some(message) = message {
            self.warn(DiagnosticKind::TableShapeMismatch, message);
        }
    }

    fn quote_line(&mut self, kind: QuoteKind, content: &str) {
        self.close_lists();
        if let Some(OpenBlock::Quote {
            kind: open_kind,
            text,
            source: None,
        }) = self.block.as_mut()
        {
            if *open_kind == kind {
                text.push('\n');
                text.push_str(content);
                return;
            }
        }
        self.close_block();
        self.block = Some(OpenBlock::Quote {
            kind,
            text: content.to_string(),
            source: None,
        });
    }

    /// `>>` names the source of the quote right before it.
    fn quote_source(&mut self, content: &str) {
        self.close_lists();
        if let Some(OpenBlock::Quote {
            kind: QuoteKind::Quote,
            source,
            ..
        }) = self.block.as_mut()
        {
            append_line(source, content);
            return;
        }
        self.close_block();
        if let Some(Element::Quote(quote)) = self.last_emitted_mut() {
            append_line(&mut quote.source, content);
            return;
        }
        self.warn(
            DiagnosticKind::OrphanQuoteSource,
            "quote source without a preceding quote",
        );
        self.emit(Element::Quote(Quote {
            text: String::new(),
            source: Some(content.to_string()),
        }));
    }

    fn multiple_choice(&mut self, correct: bool, inline: bool, text: &str) {
        self.close_lists();
        if let Some(OpenBlock::MultipleChoice(questions)) = self.block.as_mut() {
            if questions.inline == inline {
                questions.push(text, correct);
                return;
            }
        }
        self.close_block();
        let mut questions = MultipleChoiceQuestions::new(inline);
        questions.push(text, correct);
        self.block = Some(OpenBlock::MultipleChoice(questions));
    }

    fn include(&mut self, directive: &IncludeDirective, line: &str) -> MdcResult<()> {
        self.close_all();
        match self.slide.as_ref().map(|slide| slide.skip) {
            None => {
                self.warn(
                    DiagnosticKind::ContentOutsideSlide,
                    "include directive outside of any slide ignored",
                );
                return Ok(());
            }
            Some(true) => {
                log::debug!(
                    "{}:{}: include in skipped slide not resolved",
                    self.file.display(),
                    self.line
                );
                return Ok(());
            }
            Some(false) => {}
        }
        let language = self.default_language();
        let site = IncludeSite {
            file: &self.file,
            line: self.line,
            directive: line,
        };
        let source = self.resolver.resolve(directive, &site, &language)?;
        self.emit(Element::Source(source));
        Ok(())
    }

    fn text_line(&mut self, text: &str) {
        self.close_lists();
        if let Some(OpenBlock::Text(paragraph)) = self.block.as_mut() {
            paragraph.push('\n');
            paragraph.push_str(text);
            return;
        }
        self.close_block();
        self.block = Some(OpenBlock::Text(text.to_string()));
    }

    fn close_all(&mut self) {
        self.close_block();
        self.close_lists();
    }

    fn close_lists(&mut self) {
        if let Some(list) = self.lists.close_to(0) {
            self.emit(Element::from_list(list));
        }
    }

    fn close_block(&mut self) {
        let element = match self.block.take() {
            None => return,
            Some(OpenBlock::Text(text)) => Element::Text(text),
            Some(OpenBlock::IndentedCode(code_lines)) => {
                Element::Source(Source::new(code_lines.join("\n"), self.default_language()))
            }
            Some(OpenBlock::Table { table, .. }) => Element::Table(table),
            Some(OpenBlock::Quote { kind, text, source }) => match kind {
                QuoteKind::Quote | QuoteKind::QuoteSource => Element::Quote(Quote { text, source }),
                QuoteKind::Important => Element::Important(text),
                QuoteKind::Question => Element::Question(text),
                QuoteKind::Box => Element::Box(text),
            },
            Some(OpenBlock::Html(html_lines)) => Element::Html(html_lines.join("\n")),
            Some(OpenBlock::MultipleChoice(questions)) => {
                Element::MultipleChoiceQuestions(questions)
            }
        };
        self.emit(element);
    }

    fn emit(&mut self, element: Element) {
        if let Some(comment) = self.comment.as_mut() {
            comment.push(element);
            return;
        }
        match self.slide.as_mut() {
            Some(slide) => slide.elements.push(element),
            None => self.warn(
                DiagnosticKind::ContentOutsideSlide,
                format!("{} before the first slide dropped", element.node_type()),
            ),
        }
    }

    fn last_emitted_mut(&mut self) -> Option<&mut Element> {
        match self.comment.as_mut() {
            Some(comment) => comment.last_mut(),
            None => self.slide.as_mut().and_then(|s| s.elements.last_mut()),
        }
    }

    fn default_language(&self) -> String {
        self.presentation.default_language().to_string()
    }

    fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic::warning(kind, &self.file, self.line, message);
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

fn terminates(header: &RegionHeader, line: &str) -> bool {
    match header {
        RegionHeader::Fence { .. } => lines::is_fence_end(line),
        RegionHeader::Script => lines::is_script_end(line),
        RegionHeader::Equation => lines::is_equation_end(line),
        RegionHeader::Uml(_) => lines::is_uml_end(line),
    }
}

fn append_line(target: &mut Option<String>, text: &str) {
    match target {
        Some(existing) => {
            existing.push('\n');
            existing.push_str(text);
        }
        None => *target = Some(text.to_string()),
    }
}
