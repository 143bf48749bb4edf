//! Named output formats for `mdc inspect`
//!
//! A [Formatter] turns a finished presentation into a string. The registry
//! maps format names to formatters; the built-in ones are the treeviz outline,
//! JSON and YAML.

use crate::mdc::ast::Presentation;
use crate::mdc::config::Localization;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub trait Formatter: Send + Sync {
    fn name(&self) -> &str;

    fn serialize(&self, presentation: &Presentation) -> Result<String, FormatError>;
}

/// Registry of presentation formatters, looked up by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Fails with `FormatNotFound` for a name nobody registered
    pub fn serialize(
        &self,
        presentation: &Presentation,
        format: &str,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(presentation)
    }

    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry with the built-in formats, outline labels in `localization`
    pub fn with_localization(localization: Localization) -> Self {
        let mut registry = Self::new();
        registry.register(super::TreevizFormatter::new(localization));
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_localization(Localization::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
