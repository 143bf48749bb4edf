//! A lecture directory with metadata.properties and an image directory

use mdc::mdc::config::{properties_path, Loader};
use mdc::mdc::parsing::Parser;
use mdc::mdc::testing::assert_presentation;
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_properties_and_image_detection() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "metadata.properties",
        "title_1=Programmieren 2\nchapter_no=4\ndefault_language=cpp\nimage_dir=assets/\nslide_language=EN\n",
    );
    write(dir.path(), "assets/diagram.svg", "<svg/>");
    write(dir.path(), "assets/diagram.pdf", "%PDF");
    write(dir.path(), "assets/diagram.license", "CC-BY 4.0, Jane Doe\nsecond line\n");
    write(
        dir.path(),
        "01_intro.md",
        "# Pointers\n## Memory\n![Heap](diagram.png)/50%/\n    int* p;\n",
    );

    let properties = properties_path(dir.path()).expect("properties file to be found");
    let config = Loader::new()
        .with_properties_file(properties)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.localization().get("toc"), "Table of Contents");

    let mut parser = Parser::with_options(config.metadata(), config.parser_options(dir.path()));
    parser.parse_file(dir.path().join("01_intro.md")).unwrap();
    let parsed = parser.finish();

    assert_eq!(parsed.presentation.metadata.title_1, "Programmieren 2");
    assert_eq!(parsed.presentation.metadata.section_number, 4);

    let slide = &parsed.presentation.chapters[0].slides[0];
    match &slide.elements[0] {
        mdc::mdc::ast::Element::Image(image) => {
            assert_eq!(image.formats, vec!["svg", "pdf"]);
            assert_eq!(image.license.as_deref(), Some("CC-BY 4.0, Jane Doe"));
            assert_eq!(image.title, "Heap");
            assert_eq!(image.width_slide.as_deref(), Some("50%"));
        }
        other => panic!("Expected Image, found {other:?}"),
    }

    assert_presentation(&parsed.presentation).chapter(0, |c| {
        c.slide(0, |s| {
            s.contains_code(true).element(1, |e| {
                e.assert_source().language("cpp").text("int* p;");
            });
        });
    });
}

#[test]
fn test_directory_without_properties_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert!(properties_path(dir.path()).is_none());

    let config = Loader::new().build().unwrap();
    let options = config.parser_options(dir.path());
    assert!(options.image_dir.is_none());
    assert_eq!(options.include_base.as_deref(), Some(dir.path()));
}
