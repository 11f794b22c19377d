use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path:?}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// `images` and `titles` are parallel arrays and must line up.
    #[error("{images} images but {titles} titles")]
    LengthMismatch { images: usize, titles: usize },

    #[error("no image files found in directory: {0:?}")]
    NoImages(PathBuf),

    #[error("a gallery needs at least one slide")]
    EmptySlideSet,

    #[error("failed to decode image {path:?}: {reason}")]
    Image { path: PathBuf, reason: String },
}

impl GalleryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GalleryError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
