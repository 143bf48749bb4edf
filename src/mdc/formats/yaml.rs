//! YAML formatter

use super::registry::{FormatError, Formatter};
use crate::mdc::ast::Presentation;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, presentation: &Presentation) -> Result<String, FormatError> {
        serde_yaml::to_string(presentation).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdc::ast::PresentationMetadata;
    use crate::mdc::parsing::parse_document;

    #[test]
    fn test_titles_in_output() {
        let parsed =
            parse_document("# Chapter 1\n## Slide 1.1\nText\n", PresentationMetadata::default())
                .unwrap();
        let yaml = YamlFormatter.serialize(&parsed.presentation).unwrap();
        assert!(yaml.contains("title: Chapter 1"));
        assert!(yaml.contains("title: Slide 1.1"));
    }
}
