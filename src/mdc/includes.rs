//! Include resolution
//!
//! Resolves `!INCLUDESRC` directives into [Source] elements. The directive
//! path is taken relative to the directory of the including file unless it is
//! absolute. Order 0 includes the whole file; order N includes the N-th line
//! (1-based) and records that line as the provenance range.
//!
//! A missing file or an order past the end of the file is fatal: the error
//! names the directive, the including file and its line.

use crate::mdc::ast::elements::{Source, SourceOrigin};
use crate::mdc::error::{MdcError, MdcResult};
use crate::mdc::lexing::IncludeDirective;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a directive was written, for error reporting and relative paths
#[derive(Debug, Clone, Copy)]
pub struct IncludeSite<'a> {
    pub file: &'a Path,
    pub line: usize,
    /// The directive line as written
    pub directive: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct IncludeResolver {
    /// Base directory used when the including file has no parent
    base_dir: Option<PathBuf>,
}

impl IncludeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    pub fn target_path(&self, directive: &IncludeDirective, site: &IncludeSite) -> PathBuf {
        let path = Path::new(&directive.path);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match site.file.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.join(path),
            None => match &self.base_dir {
                Some(base) => base.join(path),
                None => path.to_path_buf(),
            },
        }
    }

    /// Read the directive's target and turn it into a source element.
    /// `default_language` applies when the directive names none.
    pub fn resolve(
        &self,
        directive: &IncludeDirective,
        site: &IncludeSite,
        default_language: &str,
    ) -> MdcResult<Source> {
        let path = self.target_path(directive, site);
        let content = fs::read_to_string(&path)
            .map_err(|e| unresolved(site, format!("cannot read `{}`: {}", path.display(), e)))?;
        let lines: Vec<&str> = content.lines().collect();

        let (text, first_line, last_line) = if directive.order == 0 {
            (lines.join("\n"), 1, lines.len())
        } else {
            let line = lines.get(directive.order - 1).ok_or_else(|| {
                unresolved(
                    site,
                    format!(
                        "section {} is out of range, `{}` has {} lines",
                        directive.order,
                        path.display(),
                        lines.len()
                    ),
                )
            })?;
            (line.to_string(), directive.order, directive.order)
        };

        log::debug!(
            "included {} lines {}-{}",
            path.display(),
            first_line,
            last_line
        );

        let language = directive
            .language
            .clone()
            .unwrap_or_else(|| default_language.to_string());
        let order = u32::try_from(directive.order).ok().filter(|o| *o > 0);
        Ok(Source::new(text, language)
            .with_order(order)
            .with_origin(SourceOrigin {
                path,
                first_line,
                last_line,
            }))
    }
}

fn unresolved(site: &IncludeSite, reason: String) -> MdcError {
    MdcError::UnresolvedInclude {
        directive: site.directive.trim().to_string(),
        file: site.file.to_path_buf(),
        line: site.line,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn directive(path: &str, order: usize, language: Option<&str>) -> IncludeDirective {
        IncludeDirective {
            path: path.to_string(),
            order,
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_whole_file_and_single_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "THIS IS SOURCE CODE\nAT LEAST SOME").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let site = IncludeSite {
            file: Path::new("slides.md"),
            line: 1,
            directive: "!INCLUDESRC",
        };
        let resolver = IncludeResolver::new();

        let whole = resolver.resolve(&directive(&path, 0, None), &site, "java").unwrap();
        assert_eq!(whole.text, "THIS IS SOURCE CODE\nAT LEAST SOME");
        assert_eq!(whole.language, "java");
        assert_eq!(whole.order, None);
        let origin = whole.origin.unwrap();
        assert_eq!((origin.first_line, origin.last_line), (1, 2));

        let second = resolver
            .resolve(&directive(&path, 2, Some("Java")), &site, "java")
            .unwrap();
        assert_eq!(second.text, "AT LEAST SOME");
        assert_eq!(second.language, "Java");
        assert_eq!(second.order, Some(2));
    }

    #[test]
    fn test_out_of_range_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one line").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let site = IncludeSite {
            file: Path::new("deck/03_code.md"),
            line: 9,
            directive: "!INCLUDESRC[4] \"x\"",
        };

        let err = IncludeResolver::new()
            .resolve(&directive(&path, 4, None), &site, "c")
            .unwrap_err();
        match err {
            MdcError::UnresolvedInclude { file, line, .. } => {
                assert_eq!(file, PathBuf::from("deck/03_code.md"));
                assert_eq!(line, 9);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_relative_path_follows_including_file() {
        let site = IncludeSite {
            file: Path::new("lectures/01_intro.md"),
            line: 1,
            directive: "",
        };
        let resolver = IncludeResolver::with_base_dir("/base");
        assert_eq!(
            resolver.target_path(&directive("src/A.java", 0, None), &site),
            PathBuf::from("lectures/src/A.java")
        );

        let bare = IncludeSite {
            file: Path::new("01_intro.md"),
            ..site
        };
        assert_eq!(
            resolver.target_path(&directive("src/A.java", 0, None), &bare),
            PathBuf::from("/base/src/A.java")
        );
    }
}
