//! Line Classification
//!
//! Stateless predicates and extractors answering "what does this single line
//! express". No predicate looks at neighbouring lines and none fails: a line
//! nothing else claims is ordinary text.
//!
//! Indentation is significant and exact: list levels 1-3 sit at 2/4/6 spaces,
//! indented code at 4 spaces with a fifth character that is not a list bullet.
//! Headings are only recognised at column 0.
//!
//! [`classify_line`] applies the predicates in priority order for a line that
//! is not inside an open region. Region terminators are separate predicates,
//! the parser checks them first while a region is open.

use super::line_kind::{
    Alignment, ButtonMacro, FenceOpening, ImageLine, IncludeDirective, LineKind, ListItemLine,
    ListKind, QuoteKind, UmlOpening,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Annotation on a slide title excluding the slide from output
pub const SKIP_MARKER: &str = "--skip--";

static SLIDE_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^## (.*)$").unwrap());
static CHAPTER_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^# (.*)$").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{3,}) (.*)$").unwrap());

static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( +)[*\-] (.*)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( +)([0-9]+)\. (.*)$").unwrap());
static INDENTED_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ {4}[^*\-]").unwrap());

static FENCE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^```([a-zA-Z0-9]*)(?:\[([1-9])\])?(?:\{(.*?)\})?").unwrap()
});

static TABLE_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|(.*)\| *$").unwrap());
static TABLE_SEPARATOR_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(:?)-{2,}(:?)$").unwrap());

static INCLUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^!INCLUDESRC(?:\[([0-9]*)\])? "(.*?)"(?: (.*?))?$"#).unwrap()
});

static HTML_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--(.*)-->").unwrap());
static SPACING_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!-- Spacing: ([0-9]*) -->").unwrap());

static UML_TWO_WIDTHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@startuml\[(.*?)\]\[(.*?)\]$").unwrap());
static UML_ONE_WIDTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@startuml\[(.*)\]$").unwrap());

static MULTIPLE_CHOICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([ Xx*])\](\.?) (.*)$").unwrap());

static IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^!\[(.*?)\]\((.+?)(?: "(.*?)")?\)(?:/([^/]*)/)?(?:/([^/]*)/)?"#).unwrap()
});

static BUTTON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\(\((Button-With-Log-Pre|Button-With-Log|Button|Link-Previous|Live-CSS|Live-Preview-Float|Live-Preview)(?: (.*?))?\)\)\s*$",
    )
    .unwrap()
});

/// The plain-text predicate. The letter class is part of the input language
/// and must not be widened.
static PLAIN_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[=\-A-Za-z0-9_ÄÖÜäöüß`*"]"#).unwrap());

/// Classify a line that is not inside an open region.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if is_blank(line) {
        return LineKind::Blank;
    }
    if let Some((title, skip)) = slide_title(line) {
        return LineKind::SlideTitle { title, skip };
    }
    if let Some(title) = chapter_title(line) {
        return LineKind::ChapterTitle(title);
    }
    if let Some((level, title)) = heading(line) {
        return LineKind::Heading { level, title };
    }
    if let Some(item) = list_item(line) {
        return LineKind::ListItem(item);
    }
    if let Some(code) = indented_code(line) {
        return LineKind::IndentedCode(code);
    }
    if let Some(opening) = fence_start(line) {
        return LineKind::FenceStart(opening);
    }
    if is_script_start(line) {
        return LineKind::ScriptStart;
    }
    if is_equation_start(line) {
        return LineKind::EquationStart;
    }
    if let Some(opening) = uml_start(line) {
        return LineKind::UmlStart(opening);
    }
    if let Some(spacing) = spacing_comment(line) {
        return LineKind::SpacingComment(spacing);
    }
    if is_html_comment(line) {
        return LineKind::HtmlComment;
    }
    if is_vertical_space(line) {
        return LineKind::VerticalSpace;
    }
    if is_separator(line) {
        return LineKind::Separator;
    }
    if let Some(alignments) = table_separator(line) {
        return LineKind::TableSeparator(alignments);
    }
    if let Some(cells) = table_row(line) {
        return LineKind::TableRow(cells);
    }
    if let Some((kind, content)) = quote(line) {
        return LineKind::Quote(kind, content);
    }
    if looks_like_include(line) {
        return match include_directive(line) {
            Some(directive) => LineKind::Include(directive),
            None => LineKind::MalformedInclude,
        };
    }
    if let Some((correct, inline, text)) = multiple_choice(line) {
        return LineKind::MultipleChoice {
            correct,
            inline,
            text,
        };
    }
    if let Some(image) = image(line) {
        return LineKind::Image(image);
    }
    if let Some(button) = button(line) {
        return LineKind::Button(button);
    }
    if is_html(line) {
        return LineKind::Html(line);
    }
    if is_plain_text(line) {
        return LineKind::Text(line);
    }
    LineKind::Other(line)
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// `## Title`, optionally carrying the skip marker
pub fn slide_title(line: &str) -> Option<(String, bool)> {
    let caps = SLIDE_TITLE.captures(line)?;
    let raw = caps.get(1)?.as_str();
    let skip = raw.contains(SKIP_MARKER);
    let title = raw.replace(SKIP_MARKER, "").trim().to_string();
    Some((title, skip))
}

pub fn chapter_title(line: &str) -> Option<&str> {
    CHAPTER_TITLE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// In-slide heading of level 3 or deeper
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    Some((level, caps.get(2)?.as_str().trim()))
}

/// List item at one of the three exact indentation widths
pub fn list_item(line: &str) -> Option<ListItemLine<'_>> {
    if let Some(caps) = UNORDERED_ITEM.captures(line) {
        let level = level_for_indent(caps.get(1)?.as_str().len())?;
        return Some(ListItemLine {
            kind: ListKind::Unordered,
            level,
            number: None,
            content: caps.get(2)?.as_str(),
        });
    }
    let caps = ORDERED_ITEM.captures(line)?;
    let level = level_for_indent(caps.get(1)?.as_str().len())?;
    let number = caps.get(2)?.as_str().parse::<u32>().ok()?;
    Some(ListItemLine {
        kind: ListKind::Ordered,
        level,
        number: Some(number),
        content: caps.get(3)?.as_str(),
    })
}

fn level_for_indent(width: usize) -> Option<usize> {
    match width {
        2 => Some(1),
        4 => Some(2),
        6 => Some(3),
        _ => None,
    }
}

/// Source code indented by four blanks; returns the line without the prefix
pub fn indented_code(line: &str) -> Option<&str> {
    if INDENTED_CODE.is_match(line) {
        Some(&line[4..])
    } else {
        None
    }
}

pub fn fence_start(line: &str) -> Option<FenceOpening<'_>> {
    let caps = FENCE_START.captures(line.trim())?;
    let language = caps.get(1).map(|m| m.as_str()).filter(|s| !s.is_empty());
    let order = caps.get(2).and_then(|m| m.as_str().parse().ok());
    let caption = caps.get(3).map(|m| m.as_str());
    Some(FenceOpening {
        language,
        order,
        caption,
    })
}

pub fn is_fence_end(line: &str) -> bool {
    line.trim() == "```"
}

pub fn is_script_start(line: &str) -> bool {
    line.trim() == "<script>"
}

pub fn is_script_end(line: &str) -> bool {
    line.trim() == "</script>"
}

pub fn is_equation_start(line: &str) -> bool {
    line.trim() == "\\["
}

pub fn is_equation_end(line: &str) -> bool {
    line.trim() == "\\]"
}

/// `@startuml`, with up to two bracketed widths
pub fn uml_start(line: &str) -> Option<UmlOpening> {
    let trimmed = line.trim();
    if !trimmed.starts_with("@startuml") {
        return None;
    }
    if let Some(caps) = UML_TWO_WIDTHS.captures(trimmed) {
        return Some(UmlOpening {
            width_slide: caps.get(1).map(|m| m.as_str().to_string()),
            width_plain: caps.get(2).map(|m| m.as_str().to_string()),
        });
    }
    if let Some(caps) = UML_ONE_WIDTH.captures(trimmed) {
        let width = caps.get(1).map(|m| m.as_str().to_string());
        return Some(UmlOpening {
            width_slide: width.clone(),
            width_plain: width,
        });
    }
    Some(UmlOpening::default())
}

pub fn is_uml_end(line: &str) -> bool {
    line.trim() == "@enduml"
}

/// `<!-- Spacing: N -->`; an empty number counts as zero
pub fn spacing_comment(line: &str) -> Option<u32> {
    let caps = SPACING_COMMENT.captures(line.trim())?;
    Some(caps.get(1)?.as_str().parse().unwrap_or(0))
}

pub fn is_html_comment(line: &str) -> bool {
    HTML_COMMENT.is_match(line.trim())
}

pub fn is_vertical_space(line: &str) -> bool {
    line.trim() == "<br>"
}

/// Slide/comment separator
pub fn is_separator(line: &str) -> bool {
    line.starts_with("---")
}

/// Cells of a `|...|` row, trimmed
pub fn table_row(line: &str) -> Option<Vec<String>> {
    let caps = TABLE_ROW.captures(line)?;
    Some(
        caps.get(1)?
            .as_str()
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect(),
    )
}

/// Header/body boundary of a table. The first cell must be a dash run; every
/// other cell is either a dash run or empty.
pub fn table_separator(line: &str) -> Option<Vec<Alignment>> {
    let trimmed = line.trim();
    let cells = table_row(trimmed)?;
    let first = cells.first()?;
    if !TABLE_SEPARATOR_CELL.is_match(first) {
        return None;
    }
    cells.iter().map(|cell| alignment(cell)).collect()
}

fn alignment(cell: &str) -> Option<Alignment> {
    if cell.is_empty() {
        return Some(Alignment::Separator);
    }
    let caps = TABLE_SEPARATOR_CELL.captures(cell)?;
    let left = !caps.get(1)?.as_str().is_empty();
    let right = !caps.get(2)?.as_str().is_empty();
    Some(match (left, right) {
        (true, true) => Alignment::Center,
        (false, true) => Alignment::Right,
        _ => Alignment::Left,
    })
}

/// Member of the quote family and its content
pub fn quote(line: &str) -> Option<(QuoteKind, &str)> {
    const PREFIXES: [(&str, QuoteKind); 5] = [
        (">> ", QuoteKind::QuoteSource),
        (">! ", QuoteKind::Important),
        (">? ", QuoteKind::Question),
        (">: ", QuoteKind::Box),
        ("> ", QuoteKind::Quote),
    ];
    PREFIXES
        .iter()
        .find_map(|(prefix, kind)| line.strip_prefix(prefix).map(|rest| (*kind, rest)))
}

fn looks_like_include(line: &str) -> bool {
    line.trim().starts_with("!INCLUDESRC")
}

/// `!INCLUDESRC["["order"]"] "path" [language]`
pub fn include_directive(line: &str) -> Option<IncludeDirective> {
    let caps = INCLUDE.captures(line.trim())?;
    let order = caps
        .get(1)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>())
        .transpose()
        .ok()?
        .unwrap_or(0);
    let path = caps.get(2)?.as_str().to_string();
    let language = caps
        .get(3)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());
    Some(IncludeDirective {
        path,
        order,
        language,
    })
}

/// `[ ]`, `[x]`, `[X]` or `[*]`, an optional `.` and the question text.
/// Returns (correct, inline, text).
pub fn multiple_choice(line: &str) -> Option<(bool, bool, &str)> {
    let caps = MULTIPLE_CHOICE.captures(line)?;
    let correct = caps.get(1)?.as_str() != " ";
    let inline = caps.get(2)?.as_str() == ".";
    Some((correct, inline, caps.get(3)?.as_str()))
}

/// Image with optional title and slide/plain widths. The title falls back to
/// the alt text.
pub fn image(line: &str) -> Option<ImageLine> {
    let caps = IMAGE.captures(line.trim())?;
    let alt = caps.get(1).map_or("", |m| m.as_str()).to_string();
    let location = caps.get(2)?.as_str().trim().to_string();
    let title = caps
        .get(3)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| alt.clone());
    Some(ImageLine {
        location,
        alt,
        title,
        width_slide: caps.get(4).map(|m| m.as_str().to_string()),
        width_plain: caps.get(5).map(|m| m.as_str().to_string()),
    })
}

pub fn button(line: &str) -> Option<ButtonMacro> {
    let caps = BUTTON.captures(line.trim())?;
    let argument = caps.get(2).map_or("", |m| m.as_str()).trim();
    let button = match caps.get(1)?.as_str() {
        "Button" => ButtonMacro::Plain,
        "Button-With-Log" => ButtonMacro::WithLog,
        "Button-With-Log-Pre" => ButtonMacro::WithLogPre,
        "Link-Previous" => ButtonMacro::LinkPrevious,
        "Live-CSS" => ButtonMacro::LiveCss(argument.to_string()),
        "Live-Preview" => ButtonMacro::LivePreview,
        "Live-Preview-Float" => ButtonMacro::LivePreviewFloat,
        _ => return None,
    };
    Some(button)
}

pub fn is_html(line: &str) -> bool {
    line.starts_with('<')
}

pub fn is_plain_text(line: &str) -> bool {
    PLAIN_TEXT.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_levels_by_indent() {
        let item = list_item("  * Item 1").unwrap();
        assert_eq!(item.kind, ListKind::Unordered);
        assert_eq!(item.level, 1);
        assert_eq!(item.content, "Item 1");

        let item = list_item("    - Item 2.1").unwrap();
        assert_eq!(item.level, 2);

        let item = list_item("      12. Deep").unwrap();
        assert_eq!(item.kind, ListKind::Ordered);
        assert_eq!(item.level, 3);
        assert_eq!(item.number, Some(12));
        assert_eq!(item.content, "Deep");

        assert!(list_item("   * three spaces").is_none());
        assert!(list_item("* no indent").is_none());
    }

    #[test]
    fn test_ordered_item_wins_over_indented_code() {
        assert!(matches!(
            classify_line("    1. Item 2.1"),
            LineKind::ListItem(ListItemLine { level: 2, .. })
        ));
        assert_eq!(classify_line("    int k = 9;"), LineKind::IndentedCode("int k = 9;"));
    }

    #[test]
    fn test_titles() {
        assert_eq!(chapter_title("# Chapter 1"), Some("Chapter 1"));
        assert_eq!(chapter_title("## Slide"), None);
        assert_eq!(
            slide_title("## Slide 1.4 --skip--"),
            Some(("Slide 1.4".to_string(), true))
        );
        assert_eq!(heading("#### Heading 4"), Some((4, "Heading 4")));
        assert_eq!(heading("## Slide"), None);
    }

    #[test]
    fn test_fence_opening() {
        let opening = fence_start("```java[2]{Listing one}").unwrap();
        assert_eq!(opening.language, Some("java"));
        assert_eq!(opening.order, Some(2));
        assert_eq!(opening.caption, Some("Listing one"));

        let bare = fence_start("```").unwrap();
        assert_eq!(bare, FenceOpening::default());
        assert!(is_fence_end("```  "));
    }

    #[test]
    fn test_indented_backticks_are_code() {
        assert_eq!(classify_line("    ```"), LineKind::IndentedCode("```"));
        assert!(matches!(classify_line("  ```java"), LineKind::FenceStart(_)));
    }

    #[test]
    fn test_table_separator_alignment() {
        assert_eq!(
            table_separator("|---|:--|--:|:--:||"),
            Some(vec![
                Alignment::Left,
                Alignment::Left,
                Alignment::Right,
                Alignment::Center,
                Alignment::Separator,
            ])
        );
        assert_eq!(table_separator("| a | b |"), None);
        assert_eq!(
            table_row("| a | b |"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_quote_family() {
        assert_eq!(quote("> A"), Some((QuoteKind::Quote, "A")));
        assert_eq!(quote(">> Source"), Some((QuoteKind::QuoteSource, "Source")));
        assert_eq!(quote(">! Mind"), Some((QuoteKind::Important, "Mind")));
        assert_eq!(quote(">? Why"), Some((QuoteKind::Question, "Why")));
        assert_eq!(quote(">: Box"), Some((QuoteKind::Box, "Box")));
        assert_eq!(quote(">no space"), None);
    }

    #[test]
    fn test_include_variants() {
        let d = include_directive(r#"!INCLUDESRC[2] "src/Main.java" Java"#).unwrap();
        assert_eq!(d.path, "src/Main.java");
        assert_eq!(d.order, 2);
        assert_eq!(d.language.as_deref(), Some("Java"));

        let d = include_directive(r#"!INCLUDESRC "a.c""#).unwrap();
        assert_eq!(d.order, 0);
        assert_eq!(d.language, None);

        assert_eq!(
            classify_line("!INCLUDESRC a.c"),
            LineKind::MalformedInclude
        );
    }

    #[test]
    fn test_multiple_choice() {
        assert_eq!(multiple_choice("[ ] A"), Some((false, false, "A")));
        assert_eq!(multiple_choice("[*]. B"), Some((true, true, "B")));
        assert_eq!(multiple_choice("[X] C"), Some((true, false, "C")));
        assert_eq!(multiple_choice("[-] D"), None);
    }

    #[test]
    fn test_image_widths_and_title() {
        let img = image(r#"![Alt](img/file.png "Title")/10%//30%/"#).unwrap();
        assert_eq!(img.location, "img/file.png");
        assert_eq!(img.alt, "Alt");
        assert_eq!(img.title, "Title");
        assert_eq!(img.width_slide.as_deref(), Some("10%"));
        assert_eq!(img.width_plain.as_deref(), Some("30%"));

        let img = image("![Alt](img/file.png)/10%/").unwrap();
        assert_eq!(img.title, "Alt");
        assert_eq!(img.width_plain, None);

        let img = image("![](img/file.png)").unwrap();
        assert_eq!(img.title, "");
        assert_eq!(img.width_slide, None);
    }

    #[test]
    fn test_buttons() {
        assert_eq!(button("((Button))"), Some(ButtonMacro::Plain));
        assert_eq!(button("((Button-With-Log-Pre))"), Some(ButtonMacro::WithLogPre));
        assert_eq!(
            button("((Live-CSS Hugo))"),
            Some(ButtonMacro::LiveCss("Hugo".to_string()))
        );
        assert_eq!(button("((Live-Preview-Float))"), Some(ButtonMacro::LivePreviewFloat));
        assert_eq!(button("((Unknown))"), None);
    }

    #[test]
    fn test_markers() {
        assert_eq!(classify_line("<!-- Spacing: 3 -->"), LineKind::SpacingComment(3));
        assert_eq!(classify_line("<!-- note -->"), LineKind::HtmlComment);
        assert_eq!(classify_line("<br>"), LineKind::VerticalSpace);
        assert_eq!(classify_line("---"), LineKind::Separator);
        assert_eq!(classify_line("<b>Bold</b>"), LineKind::Html("<b>Bold</b>"));
        assert_eq!(
            uml_start("@startuml[100%][70%]"),
            Some(UmlOpening {
                width_slide: Some("100%".to_string()),
                width_plain: Some("70%".to_string()),
            })
        );
        assert_eq!(
            uml_start("@startuml[50%]").unwrap().width_plain.as_deref(),
            Some("50%")
        );
    }

    #[test]
    fn test_plain_text_letter_class() {
        assert!(is_plain_text("Übung"));
        assert!(is_plain_text("\"quoted\""));
        assert!(!is_plain_text("(aside)"));
        assert_eq!(classify_line("(aside)"), LineKind::Other("(aside)"));
    }
}
