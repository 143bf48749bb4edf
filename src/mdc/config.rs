//! Configuration loader for mdc.
//!
//! `defaults/mdc.default.toml` is embedded into the crate so the documented
//! defaults and the runtime behavior stay in sync. Callers layer TOML files,
//! the `metadata.properties` file of a lecture directory and single overrides
//! on top of those defaults via [`Loader`] before deserializing into
//! [`MdcConfig`].

use crate::mdc::ast::PresentationMetadata;
use crate::mdc::parsing::ParserOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/mdc.default.toml");

/// Message table used when the slide language has no entry for a key
pub const FALLBACK_LANGUAGE: &str = "en";

/// Keys understood in `metadata.properties` and where they land
const PROPERTY_KEYS: &[(&str, &str)] = &[
    ("title_1", "metadata.title_1"),
    ("title_2", "metadata.title_2"),
    ("chapter_no", "metadata.chapter_no"),
    ("chapter_name", "metadata.chapter_name"),
    ("copyright", "metadata.copyright"),
    ("author", "metadata.author"),
    ("default_language", "metadata.default_language"),
    ("description", "metadata.description"),
    ("term", "metadata.term"),
    ("slide_language", "metadata.slide_language"),
    ("image_dir", "parser.image_dir"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct MdcConfig {
    pub metadata: MetadataConfig,
    pub parser: ParserConfig,
    pub inspect: InspectConfig,
    /// language -> message key -> text
    pub messages: HashMap<String, HashMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataConfig {
    pub title_1: String,
    pub title_2: String,
    pub chapter_no: u32,
    pub chapter_name: String,
    pub copyright: String,
    pub author: String,
    pub default_language: String,
    pub description: String,
    pub term: String,
    pub slide_language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub image_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: String,
}

impl MdcConfig {
    pub fn metadata(&self) -> PresentationMetadata {
        let m = &self.metadata;
        PresentationMetadata {
            title_1: m.title_1.clone(),
            title_2: m.title_2.clone(),
            section_number: m.chapter_no,
            section_name: m.chapter_name.clone(),
            copyright: m.copyright.clone(),
            author: m.author.clone(),
            default_language: m.default_language.clone(),
            description: m.description.clone(),
            term: m.term.clone(),
            slide_language: m.slide_language.clone(),
        }
    }

    /// Parser options for sources living in `base_dir`. A relative image
    /// directory is taken relative to it.
    pub fn parser_options(&self, base_dir: &Path) -> ParserOptions {
        let image_dir = self.parser.image_dir.trim_end_matches('/');
        let image_dir = if image_dir.is_empty() {
            None
        } else {
            Some(base_dir.join(image_dir))
        };
        ParserOptions {
            image_dir,
            include_base: Some(base_dir.to_path_buf()),
        }
    }

    /// Message table for the configured slide language
    pub fn localization(&self) -> Localization {
        let language = self.metadata.slide_language.to_lowercase();
        Localization {
            messages: self.messages.get(&language).cloned().unwrap_or_default(),
            fallback: self
                .messages
                .get(FALLBACK_LANGUAGE)
                .cloned()
                .unwrap_or_default(),
            language,
        }
    }
}

/// Injected message key -> localized string mapping.
///
/// Lookups fall back to English and finally to the key itself, so a missing
/// translation never fails a conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Localization {
    language: String,
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Localization {
    pub fn new(language: impl Into<String>, messages: HashMap<String, String>) -> Self {
        Self {
            language: language.into(),
            messages,
            fallback: HashMap::new(),
        }
    }

    pub fn with_fallback(mut self, fallback: HashMap<String, String>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional TOML configuration file (ignored if absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a `metadata.properties` file (`key=value` lines). Only the known
    /// keys are taken over; everything else in the file is ignored.
    pub fn with_properties_file(mut self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let properties = Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Ini).required(true))
            .build()?;
        for (property, key) in PROPERTY_KEYS {
            if let Ok(value) = properties.get_string(property) {
                self.builder = self.builder.set_override(*key, value.trim())?;
            }
        }
        Ok(self)
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdcConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdcConfig, ConfigError> {
    Loader::new().build()
}

/// Metadata file of a lecture directory, if it has one
pub fn properties_path(directory: &Path) -> Option<PathBuf> {
    let path = directory.join("metadata.properties");
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.metadata.default_language, "java");
        assert_eq!(config.inspect.format, "treeviz");
        assert_eq!(config.localization().get("toc"), "Inhalt");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("metadata.slide_language", "EN")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.localization().get("toc"), "Table of Contents");
    }

    #[test]
    fn reads_properties_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".properties")
            .tempfile()
            .unwrap();
        writeln!(file, "title_1=Programmieren 1").unwrap();
        writeln!(file, "chapter_no=3").unwrap();
        writeln!(file, "chapter_name=Section 3").unwrap();
        writeln!(file, "default_language=cpp").unwrap();
        writeln!(file, "resultfile=out.html").unwrap();

        let config = Loader::new()
            .with_properties_file(file.path())
            .expect("properties to load")
            .build()
            .expect("config to build");
        let metadata = config.metadata();
        assert_eq!(metadata.title_1, "Programmieren 1");
        assert_eq!(metadata.section_number, 3);
        assert_eq!(metadata.section_name, "Section 3");
        assert_eq!(metadata.default_language, "cpp");
    }

    #[test]
    fn localization_falls_back_to_english_then_key() {
        let english = HashMap::from([("toc".to_string(), "Table of Contents".to_string())]);
        let localization =
            Localization::new("fr", HashMap::new()).with_fallback(english);
        assert_eq!(localization.get("toc"), "Table of Contents");
        assert_eq!(localization.get("index"), "index");
    }

    #[test]
    fn image_dir_is_relative_to_lecture() {
        let config = Loader::new()
            .set_override("parser.image_dir", "img/")
            .unwrap()
            .build()
            .unwrap();
        let options = config.parser_options(Path::new("lectures/pr1"));
        assert_eq!(options.image_dir, Some(PathBuf::from("lectures/pr1/img")));
        assert!(load_defaults()
            .unwrap()
            .parser_options(Path::new("x"))
            .image_dir
            .is_none());
    }
}
