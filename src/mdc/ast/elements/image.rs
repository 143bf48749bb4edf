//! Image element
//!
//! `![alt](location "title")/slide-width//plain-width/`. Both widths are
//! optional and independent. With an image directory at hand the available
//! format variants of the image are looked up on disk, together with an
//! optional `<stem>.license` file whose first line names the license/source.

use crate::mdc::lexing::ImageLine;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Extensions probed when detecting format variants, in preference order
pub const IMAGE_FORMATS: &[&str] = &["svg", "png", "jpg", "gif", "pdf", "eps"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub location: String,
    pub alt: String,
    pub title: String,
    pub width_slide: Option<String>,
    pub width_plain: Option<String>,
    pub formats: Vec<String>,
    pub license: Option<String>,
}

impl Image {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            alt: String::new(),
            title: String::new(),
            width_slide: None,
            width_plain: None,
            formats: Vec::new(),
            license: None,
        }
    }

    /// File stem of the location, i.e. `img/file.png` -> `img/file`
    fn stem(&self) -> &str {
        match self.location.rfind('.') {
            Some(dot) if !self.location[dot..].contains('/') => &self.location[..dot],
            _ => &self.location,
        }
    }

    /// Probe `image_dir` for format variants and a license sidecar.
    pub fn detect_formats(&mut self, image_dir: &Path) {
        let stem = self.stem().to_string();
        self.formats = IMAGE_FORMATS
            .iter()
            .filter(|ext| image_dir.join(format!("{}.{}", stem, ext)).is_file())
            .map(|ext| ext.to_string())
            .collect();

        let license_path = image_dir.join(format!("{}.license", stem));
        self.license = fs::read_to_string(license_path).ok().and_then(|content| {
            content
                .lines()
                .next()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
        });
    }
}

impl From<ImageLine> for Image {
    fn from(line: ImageLine) -> Self {
        Self {
            location: line.location,
            alt: line.alt,
            title: line.title,
            width_slide: line.width_slide,
            width_plain: line.width_plain,
            formats: Vec::new(),
            license: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_formats_and_license() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img/file.png"), b"png").unwrap();
        fs::write(dir.path().join("img/file.svg"), b"svg").unwrap();
        fs::write(dir.path().join("img/file.license"), "CC-BY 4.0, Jane Doe\n").unwrap();

        let mut image = Image::new("img/file.png");
        image.detect_formats(dir.path());

        assert_eq!(image.formats, vec!["svg".to_string(), "png".to_string()]);
        assert_eq!(image.license.as_deref(), Some("CC-BY 4.0, Jane Doe"));
    }

    #[test]
    fn test_missing_directory_detects_nothing() {
        let mut image = Image::new("nowhere.png");
        image.detect_formats(Path::new("/definitely/not/here"));
        assert!(image.formats.is_empty());
        assert_eq!(image.license, None);
    }
}
