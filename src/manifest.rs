//! Gallery sources: either a directory of images or a TOML manifest.
//!
//! A manifest lists `images` and `titles` as parallel arrays, plus optional
//! artist credit and About / Contact page texts:
//!
//! ```toml
//! artist = "Jane Doe"
//! images = ["art/01.jpg", "art/02.jpg"]
//! titles = ["SCROLL", "EXPLORE"]
//!
//! [about]
//! heading = "About the Artist"
//! paragraphs = ["..."]
//!
//! [contact]
//! heading = "Get in Touch"
//! details = ["Email: jane@example.com"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use log::info;
use serde::Deserialize;
use crate::error::{GalleryError, Result};
use crate::slide::SlideSet;
use crate::text_page::PageText;
use crate::texture_loader::load_sorted_image_paths;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    artist: Option<String>,
    images: Vec<PathBuf>,
    titles: Vec<String>,
    #[serde(default)]
    about: Option<PageSection>,
    #[serde(default)]
    contact: Option<PageSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageSection {
    heading: String,
    #[serde(default)]
    paragraphs: Vec<String>,
    #[serde(default)]
    details: Vec<String>,
}

impl From<PageSection> for PageText {
    fn from(section: PageSection) -> Self {
        PageText {
            heading: section.heading,
            paragraphs: section.paragraphs,
            details: section.details,
        }
    }
}

/// Everything the window needs to show one gallery.
#[derive(Debug, Clone)]
pub struct Gallery {
    pub slides: SlideSet,
    pub artist: Option<String>,
    pub about: PageText,
    pub contact: PageText,
}

impl Gallery {
    /// Line shown next to the image in the detail viewer.
    pub fn describe(&self, title: &str) -> String {
        match &self.artist {
            Some(artist) => format!("{title} - Art by {artist}"),
            None => title.to_string(),
        }
    }
}

pub fn default_about() -> PageText {
    PageText {
        heading: "About the Artist".into(),
        paragraphs: vec![
            "Each piece in this gallery reflects its own perspective, bringing together color, form and emotion.".into(),
        ],
        details: Vec::new(),
    }
}

pub fn default_contact() -> PageText {
    PageText {
        heading: "Get in Touch".into(),
        paragraphs: vec![
            "Interested in commissioning a piece or learning more about the available artwork? Feel free to reach out!".into(),
        ],
        details: Vec::new(),
    }
}

/// Loads `source`, which may be an image directory or a `.toml` manifest.
pub fn load(source: &Path) -> Result<Gallery> {
    if source.is_dir() {
        load_directory(source)
    } else {
        load_manifest(source)
    }
}

pub fn load_directory(dir: &Path) -> Result<Gallery> {
    let paths = load_sorted_image_paths(dir)?;
    info!("found {} images in {:?}", paths.len(), dir);
    Ok(Gallery {
        slides: SlideSet::from_paths(paths)?,
        artist: None,
        about: default_about(),
        contact: default_contact(),
    })
}

pub fn load_manifest(path: &Path) -> Result<Gallery> {
    let text = fs::read_to_string(path).map_err(|e| GalleryError::io(path, e))?;
    let manifest: Manifest = toml::from_str(&text).map_err(|source| GalleryError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let images = manifest
        .images
        .into_iter()
        .map(|image| if image.is_absolute() { image } else { base.join(image) })
        .collect();

    let slides = SlideSet::from_parallel(images, manifest.titles)?;
    info!("manifest {:?} lists {} slides", path, slides.len());
    Ok(Gallery {
        slides,
        artist: manifest.artist,
        about: manifest.about.map(PageText::from).unwrap_or_else(default_about),
        contact: manifest.contact.map(PageText::from).unwrap_or_else(default_contact),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    #[test]
    fn manifest_paths_are_relative_to_the_manifest() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write(
            dir.path(),
            "gallery.toml",
            r#"
artist = "Jane Doe"
images = ["art/01.jpg", "/abs/02.jpg"]
titles = ["SCROLL", "EXPLORE"]

[contact]
heading = "Write"
details = ["Email: jane@example.com"]
"#,
        );

        let gallery = load(&path).expect("valid manifest");
        assert_eq!(gallery.slides.len(), 2);
        let first = gallery.slides.get(0).expect("first slide");
        assert_eq!(first.image, dir.path().join("art/01.jpg"));
        assert_eq!(first.title, "SCROLL");
        assert_eq!(gallery.slides.get(1).map(|s| s.image.clone()), Some(PathBuf::from("/abs/02.jpg")));
        assert_eq!(gallery.contact.heading, "Write");
        assert_eq!(gallery.contact.details, vec!["Email: jane@example.com"]);
        assert_eq!(gallery.about, default_about());
        assert_eq!(gallery.describe("SCROLL"), "SCROLL - Art by Jane Doe");
    }

    #[test]
    fn mismatched_titles_are_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write(
            dir.path(),
            "gallery.toml",
            "images = [\"a.jpg\", \"b.jpg\"]\ntitles = [\"A\"]\n",
        );
        let err = load(&path).expect_err("mismatch should fail");
        assert!(matches!(err, GalleryError::LengthMismatch { images: 2, titles: 1 }));
    }

    #[test]
    fn malformed_manifest_reports_its_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write(dir.path(), "gallery.toml", "images = 3\n");
        match load(&path) {
            Err(GalleryError::Manifest { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected manifest error, got {other:?}"),
        }
    }

    #[test]
    fn missing_manifest_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load(&dir.path().join("nope.toml")).expect_err("missing file");
        assert!(matches!(err, GalleryError::Io { .. }));
    }

    #[test]
    fn directory_source_uses_file_stems() {
        let dir = tempdir().expect("failed to create temp dir");
        write(dir.path(), "b_dusk.png", "x");
        write(dir.path(), "a_dawn.jpg", "x");
        let gallery = load(dir.path()).expect("directory with images");
        let titles: Vec<_> = gallery.slides.iter().map(|s| s.title.clone()).collect();
        assert_eq!(titles, vec!["A DAWN", "B DUSK"]);
        assert_eq!(gallery.artist, None);
        assert_eq!(gallery.describe("A DAWN"), "A DAWN");
    }
}
