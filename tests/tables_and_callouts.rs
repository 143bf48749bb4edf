//! Tables, call-out boxes and HTML spacing from the curated samples

use mdc::mdc::ast::Element;
use mdc::mdc::diagnostics::{DiagnosticKind, DiagnosticSeverity};
use mdc::mdc::lexing::Alignment;
use mdc::mdc::testing::{assert_presentation, Sample};

#[test]
fn test_table_alignment_from_separator() {
    let parsed = Sample::Tables.parse().unwrap();
    assert_presentation(&parsed.presentation)
        .chapter_count(1)
        .chapter(0, |c| {
            c.title("Tables").slide(0, |s| {
                s.title("Aligned columns")
                    .element_types(&["Table"])
                    .element(0, |e| {
                        e.assert_table()
                            .headers(&["Operator", "Meaning", "Example"])
                            .alignments(&[Alignment::Left, Alignment::Center, Alignment::Right])
                            .row_count(2)
                            .row(0, &["`+`", "Addition", "1 + 2"])
                            .row(1, &["`-`", "Subtraction", "3 - 1"]);
                    });
            });
        });
}

#[test]
fn test_ragged_rows_are_padded_never_truncated() {
    let parsed = Sample::Tables.parse().unwrap();
    assert_presentation(&parsed.presentation).chapter(0, |c| {
        c.slide(1, |s| {
            s.title("Ragged rows").element(0, |e| {
                e.assert_table()
                    .headers(&["A", "B", "C", ""])
                    .alignments(&[
                        Alignment::Left,
                        Alignment::Left,
                        Alignment::Left,
                        Alignment::Left,
                    ])
                    .row(0, &["1", "", "", ""])
                    .row(1, &["1", "2", "3", "4"]);
            });
        });
    });

    let mismatches: Vec<usize> = parsed
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::TableShapeMismatch)
        .map(|d| d.line)
        .collect();
    assert_eq!(mismatches, vec![14, 15]);
    assert!(parsed
        .diagnostics
        .iter()
        .all(|d| d.severity == DiagnosticSeverity::Warning));
}

#[test]
fn test_empty_separator_cell_marks_separator_column() {
    let parsed = Sample::Tables.parse().unwrap();
    assert_presentation(&parsed.presentation).chapter(0, |c| {
        c.slide(2, |s| {
            s.title("Separator column").element(0, |e| {
                e.assert_table()
                    .headers(&["Left", "", "Right"])
                    .alignments(&[Alignment::Left, Alignment::Separator, Alignment::Left])
                    .row(0, &["a", "", "b"]);
            });
        });
    });
}

#[test]
fn test_quote_source_attaches_to_quote() {
    let parsed = Sample::Callouts.parse().unwrap();
    assert_presentation(&parsed.presentation).chapter(0, |c| {
        c.title("Call-outs").slide(0, |s| {
            s.element_types(&["Quote"]).element(0, |e| {
                e.quote_source(Some("Donald E. Knuth"))
                    .text("Premature optimization is\nthe root of all evil\n-- Donald E. Knuth");
            });
        });
    });
}

#[test]
fn test_box_kinds_do_not_merge() {
    let parsed = Sample::Callouts.parse().unwrap();
    assert_presentation(&parsed.presentation).chapter(0, |c| {
        c.slide(1, |s| {
            s.element_types(&["Box", "Important", "Question"]).element_texts(&[
                "Remember to close the stream",
                "Never catch Throwable",
                "What happens on overflow?",
            ]);
        });
    });
}

#[test]
fn test_orphan_quote_source_opens_empty_quote() {
    let parsed = Sample::Callouts.parse().unwrap();
    assert_presentation(&parsed.presentation).chapter(0, |c| {
        c.slide(2, |s| {
            s.element_types(&["Text", "Quote"]).element(1, |e| {
                e.quote_source(Some("Nobody"));
            });
        });
    });

    let orphans: Vec<_> = parsed
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::OrphanQuoteSource)
        .collect();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].line, 19);
}

#[test]
fn test_html_runs_spacing_and_comments() {
    let parsed = Sample::Callouts.parse().unwrap();
    let slide = &parsed.presentation.chapters[0].slides[3];
    assert_eq!(slide.title, "Spacing and markup");
    assert_eq!(
        slide.elements,
        vec![
            Element::Html("<div class=\"left\">\n<p>Column</p>\n</div>".into()),
            Element::VerticalSpace(Some(3)),
            Element::VerticalSpace(None),
            Element::Text("Text".into()),
        ]
    );
}
