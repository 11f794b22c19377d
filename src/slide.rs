use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use crate::error::{GalleryError, Result};

static NEXT_SET_ID: AtomicU64 = AtomicU64::new(1);

/// One gallery entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub image: PathBuf,
    pub title: String,
}

/// Ordered, cyclic, non-empty list of slides.
///
/// Every constructed set gets a fresh identity so owners of navigation state
/// can tell a reloaded gallery apart from the one they were built for, even
/// when the contents are equal.
#[derive(Debug, Clone)]
pub struct SlideSet {
    id: u64,
    slides: Vec<Slide>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(GalleryError::EmptySlideSet);
        }
        Ok(Self {
            id: NEXT_SET_ID.fetch_add(1, Ordering::Relaxed),
            slides,
        })
    }

    /// Zips parallel image and title lists.
    pub fn from_parallel(images: Vec<PathBuf>, titles: Vec<String>) -> Result<Self> {
        if images.len() != titles.len() {
            return Err(GalleryError::LengthMismatch {
                images: images.len(),
                titles: titles.len(),
            });
        }
        let slides = images
            .into_iter()
            .zip(titles)
            .map(|(image, title)| Slide { image, title })
            .collect();
        Self::new(slides)
    }

    /// Titles derived from file stems, upper-cased.
    pub fn from_paths(images: Vec<PathBuf>) -> Result<Self> {
        let titles = images.iter().map(|p| title_from_path(p)).collect();
        Self::from_parallel(images, titles)
    }

    /// Copy of this set keeping only the slides `keep` accepts. The result is
    /// a new set with its own identity.
    pub fn retain(&self, mut keep: impl FnMut(usize, &Slide) -> bool) -> Result<Self> {
        let slides = self
            .slides
            .iter()
            .enumerate()
            .filter(|(i, s)| keep(*i, s))
            .map(|(_, s)| s.clone())
            .collect();
        Self::new(slides)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}

fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace(['_', '-'], " ").to_uppercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(SlideSet::new(Vec::new()), Err(GalleryError::EmptySlideSet)));
    }

    #[test]
    fn parallel_lists_must_match() {
        let err = SlideSet::from_parallel(paths(&["a.jpg", "b.jpg"]), vec!["A".into()])
            .expect_err("mismatch should fail");
        assert!(matches!(err, GalleryError::LengthMismatch { images: 2, titles: 1 }));
    }

    #[test]
    fn parallel_lists_are_zipped_in_order() {
        let set = SlideSet::from_parallel(
            paths(&["a.jpg", "b.jpg"]),
            vec!["SCROLL".into(), "EXPLORE".into()],
        )
        .expect("valid set");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).map(|s| s.title.as_str()), Some("EXPLORE"));
        assert_eq!(set.get(0).map(|s| s.image.as_path()), Some(Path::new("a.jpg")));
    }

    #[test]
    fn titles_come_from_file_stems() {
        let set = SlideSet::from_paths(paths(&["/art/blue_hour.jpg", "dusk-light.png"]))
            .expect("valid set");
        let titles: Vec<_> = set.iter().map(|s| s.title.clone()).collect();
        assert_eq!(titles, vec!["BLUE HOUR", "DUSK LIGHT"]);
    }

    #[test]
    fn every_set_has_its_own_identity() {
        let a = SlideSet::from_paths(paths(&["a.jpg"])).expect("valid set");
        let b = SlideSet::from_paths(paths(&["a.jpg"])).expect("valid set");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn retain_builds_a_new_set() {
        let set = SlideSet::from_paths(paths(&["a.jpg", "b.jpg", "c.jpg"])).expect("valid set");
        let kept = set.retain(|i, _| i != 1).expect("non-empty");
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.get(1).map(|s| s.title.as_str()), Some("C"));
        assert_ne!(kept.id(), set.id());
        assert!(set.retain(|_, _| false).is_err());
    }
}
