//! JSON formatter
//!
//! The serde view of the tree, pretty printed. Useful for diffing parser
//! output and for feeding other tools.

use super::registry::{FormatError, Formatter};
use crate::mdc::ast::Presentation;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, presentation: &Presentation) -> Result<String, FormatError> {
        serde_json::to_string_pretty(presentation)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdc::ast::PresentationMetadata;
    use crate::mdc::parsing::parse_document;

    #[test]
    fn test_elements_are_tagged_by_variant() {
        let parsed =
            parse_document("# C\n## S\n```java\nint i;\n```\n", PresentationMetadata::default())
                .unwrap();
        let json = JsonFormatter.serialize(&parsed.presentation).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let element = &value["chapters"][0]["slides"][0]["elements"][0];
        assert_eq!(element["Source"]["text"], "int i;");
        assert_eq!(element["Source"]["language"], "java");
        assert_eq!(value["chapters"][0]["slides"][0]["contains_code"], true);
    }
}
