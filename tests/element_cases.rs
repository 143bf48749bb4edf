//! Single-slide documents, one construct each

use mdc::mdc::ast::{Element, List};
use mdc::mdc::diagnostics::{DiagnosticKind, DiagnosticSeverity};
use mdc::mdc::testing::sample_metadata;
use mdc::mdc::ParsedPresentation;
use rstest::rstest;

fn parse_slide(body: &str) -> ParsedPresentation {
    let source = format!("# Chapter\n## Slide\n{}\n", body);
    mdc::mdc::parse_document(&source, sample_metadata()).expect("document to parse")
}

fn node_types(parsed: &ParsedPresentation) -> Vec<&'static str> {
    parsed.presentation.chapters[0].slides[0]
        .elements
        .iter()
        .map(Element::node_type)
        .collect()
}

#[rstest]
#[case::paragraph_lines_join("First line\nsecond line", &["Text"])]
#[case::blank_splits_paragraphs("First\n\nSecond", &["Text", "Text"])]
#[case::list_survives_blank_line("  * a\n\n  * b", &["UnorderedList"])]
#[case::kind_change_splits_lists("  * a\n  1. b", &["UnorderedList", "OrderedList"])]
#[case::indented_code("    int i;\n    i++;", &["Source"])]
#[case::html_run("<ul>\n<li>x</li>\n</ul>", &["HTML"])]
#[case::html_comment_dropped("<!-- nothing -->", &[])]
#[case::spacing("<!-- Spacing: 2 -->", &["VerticalSpace"])]
#[case::inline_group_ends_at_kind_change("[ ] a\n[ ]. b", &["MultipleChoiceQuestions", "MultipleChoiceQuestions"])]
#[case::image_then_text("![x](y.png)\nCaption", &["Image", "Text"])]
#[case::uml("@startuml\nA -> B\n@enduml", &["UML"])]
#[case::heading_closes_list("  * a\n### Sub", &["UnorderedList", "Heading"])]
#[case::indented_backticks_stay_code("    a\n    ```\n    b", &["Source"])]
#[case::code_after_list_item("  1. Item\n    int x = 5;", &["OrderedList", "Source"])]
#[case::paragraph_after_list_and_blank("  * A\n\n   Note paragraph", &["UnorderedList", "Text"])]
#[case::comment_keeps_paragraph("First\n<!-- note -->\nSecond", &["Text"])]
#[case::blank_splits_indented_code("    a;\n\n    b;", &["Source", "Source"])]
fn test_element_sequence(#[case] body: &str, #[case] expected: &[&str]) {
    let parsed = parse_slide(body);
    assert_eq!(node_types(&parsed), expected, "body: {:?}", body);
}

#[test]
fn test_list_item_continuation() {
    let parsed = parse_slide("  * Item that\n   continues here\n  * next");
    let slide = &parsed.presentation.chapters[0].slides[0];
    let list = slide.elements[0].as_list().unwrap();
    assert_eq!(list.to_string(), "Item that continues here\nnext");
}

#[test]
fn test_three_level_nesting_keeps_placement() {
    let parsed = parse_slide("  * A\n    * B\n      * C\n  * D");
    let slide = &parsed.presentation.chapters[0].slides[0];
    assert_eq!(slide.elements.len(), 1);

    let mut level_three = List::unordered();
    level_three.push_item("C");
    let mut level_two = List::unordered();
    level_two.push_item("B");
    level_two.push_nested(level_three);
    let mut expected = List::unordered();
    expected.push_item("A");
    expected.push_nested(level_two);
    expected.push_item("D");

    assert_eq!(slide.elements[0].as_list(), Some(&expected));
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn test_indented_code_after_list_item_is_source() {
    let parsed = parse_slide("  1. Item\n    int x = 5;\n    x++;");
    let slide = &parsed.presentation.chapters[0].slides[0];

    assert_eq!(slide.elements[0].as_list().unwrap().to_string(), "Item");
    match &slide.elements[1] {
        Element::Source(source) => assert_eq!(source.text, "int x = 5;\nx++;"),
        other => panic!("Expected Source, found {other:?}"),
    }
    assert!(slide.contains_code);
}

#[test]
fn test_indented_fence_line_does_not_open_region() {
    let parsed = parse_slide("    a\n    ```\n    b");
    match &parsed.presentation.chapters[0].slides[0].elements[0] {
        Element::Source(source) => assert_eq!(source.text, "a\n```\nb"),
        other => panic!("Expected Source, found {other:?}"),
    }
}

#[test]
fn test_level_skip_is_clamped_with_warning() {
    let parsed = parse_slide("  * a\n      - deep");
    let list = parsed.presentation.chapters[0].slides[0].elements[0]
        .as_list()
        .unwrap();
    let nested = list.entries[1].as_list().unwrap();

    assert_eq!(nested.to_string(), "deep");
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].kind, DiagnosticKind::StructuralAmbiguity);
    assert_eq!(parsed.diagnostics[0].line, 4);
}

#[test]
fn test_uml_single_width_applies_to_both() {
    let parsed = parse_slide("@startuml[40%]\nA -> B\n@enduml");
    match &parsed.presentation.chapters[0].slides[0].elements[0] {
        Element::Uml(uml) => {
            assert_eq!(uml.width_slide.as_deref(), Some("40%"));
            assert_eq!(uml.width_plain.as_deref(), Some("40%"));
            assert_eq!(uml.content, "A -> B");
        }
        other => panic!("Expected UML, found {other:?}"),
    }
}

#[test]
fn test_content_before_first_slide_is_dropped() {
    let parsed = mdc::mdc::parse_document("Preamble\n# C\n## S\nBody\n", sample_metadata()).unwrap();

    assert_eq!(parsed.presentation.chapters[0].slides[0].elements.len(), 1);
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].kind, DiagnosticKind::ContentOutsideSlide);
}

#[test]
fn test_slide_without_chapter_opens_untitled_chapter() {
    let parsed = mdc::mdc::parse_document("## Lonely\nText\n", sample_metadata()).unwrap();

    let chapter = &parsed.presentation.chapters[0];
    assert_eq!(chapter.title, "");
    assert_eq!(chapter.slides[0].title, "Lonely");
    assert_eq!(parsed.diagnostics[0].severity, DiagnosticSeverity::Information);
}

#[test]
fn test_table_separator_without_header_stays_text() {
    let parsed = parse_slide("|---|---|");
    assert_eq!(node_types(&parsed), ["Text"]);
    assert_eq!(parsed.diagnostics[0].kind, DiagnosticKind::MalformedDirective);
}

#[test]
fn test_skip_marker_anywhere_in_title() {
    let parsed = mdc::mdc::parse_document(
        "# C\n## Draft --skip-- slide\n    code\n## Next\n",
        sample_metadata(),
    )
    .unwrap();
    let slides = &parsed.presentation.chapters[0].slides;

    assert_eq!(slides[0].title, "Draft  slide");
    assert!(slides[0].skip);
    assert!(slides[0].elements.is_empty());
    assert_eq!(parsed.toc.entries[0].sub_entries.len(), 1);
}
