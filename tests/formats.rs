//! Inspection formats over a parsed presentation

use mdc::mdc::config::load_defaults;
use mdc::mdc::error::MdcError;
use mdc::mdc::formats::{FormatError, FormatRegistry};
use mdc::mdc::testing::sample_metadata;
use mdc::mdc::ParsedPresentation;

const SOURCE: &str = "# Kontrollfluss
## Schleifen
```java{Zählschleife}
for (;;) {}
```
  3. drei
  4. vier

[*]. ja
[ ]. nein
---
Nur für Dozenten
";

fn parsed() -> ParsedPresentation {
    mdc::mdc::parse_document(SOURCE, sample_metadata()).unwrap()
}

fn registry() -> FormatRegistry {
    FormatRegistry::with_localization(load_defaults().unwrap().localization())
}

#[test]
fn test_treeviz_outline() {
    let output = registry()
        .serialize(&parsed().presentation, "treeviz")
        .unwrap();

    insta::assert_snapshot!(output, @r"
⧉ Programmieren 1
├─ ☷ Inhalt
│ └─ # Kontrollfluss
│   └─ ▭ Schleifen
└─ § Kontrollfluss
  └─ ▤ Schleifen
    ├─ 𝒱 java Zählschleife
    │ └─ ↵ for (;;) {}
    ├─ № 2 items from 3
    │ ├─ • drei
    │ └─ • vier
    ├─ ☑ 2 items, inline
    │ ├─ ☐ [x] ja
    │ └─ ☐ [ ] nein
    └─ % Notizen
      └─ ¶ Nur für Dozenten
");
}

#[test]
fn test_json_is_externally_tagged() {
    let output = registry().serialize(&parsed().presentation, "json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let slide = &value["chapters"][0]["slides"][0];
    assert_eq!(slide["title"], "Schleifen");
    assert_eq!(slide["contains_code"], true);
    assert_eq!(slide["elements"][0]["Source"]["caption"], "Zählschleife");
    assert_eq!(slide["elements"][1]["OrderedList"]["start_number"], 3);
    assert_eq!(value["metadata"]["default_language"], "java");
}

#[test]
fn test_yaml_names_chapter_and_slide() {
    let output = registry().serialize(&parsed().presentation, "yaml").unwrap();
    assert!(output.contains("title: Kontrollfluss"), "{output}");
    assert!(output.contains("title: Schleifen"), "{output}");
}

#[test]
fn test_unknown_format_becomes_fatal_error() {
    let err: MdcError = registry()
        .serialize(&parsed().presentation, "html")
        .unwrap_err()
        .into();
    assert!(matches!(err, MdcError::Format(FormatError::FormatNotFound(_))));
    assert_eq!(err.to_string(), "Format 'html' not found");
}
