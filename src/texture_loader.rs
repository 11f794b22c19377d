use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;
use crate::error::{GalleryError, Result};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path).map_err(|e| GalleryError::io(dir_path, e))?;

    for entry in entries {
        let path = entry.map_err(|e| GalleryError::io(dir_path, e))?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(GalleryError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    let extension = extension_of(image_path);
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            warn!("could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).map_err(|e| GalleryError::io(image_path, e))?;
    let orientation = exif_orientation(image_path, &file_bytes);
    let extension = extension_of(image_path);

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes).map_err(|e| {
        GalleryError::Image {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are left as they are.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    let texture = rl.load_texture_from_image(thread, &image).map_err(|e| GalleryError::Image {
        path: image_path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn keeps_only_images_sorted_by_name() {
        let dir = tempdir().expect("failed to create temp dir");
        for name in ["c.GIF", "a.jpg", "notes.txt", "b.PNG", "d.jpeg"] {
            fs::write(dir.path().join(name), b"fake image data").expect("failed to write fixture");
        }
        fs::create_dir(dir.path().join("e.jpg")).expect("failed to create subdir");

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .expect("images present")
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.GIF", "d.jpeg"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("readme.md"), b"hi").expect("failed to write fixture");
        assert!(matches!(
            load_sorted_image_paths(dir.path()),
            Err(GalleryError::NoImages(_))
        ));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(matches!(
            load_sorted_image_paths(&dir.path().join("missing")),
            Err(GalleryError::Io { .. })
        ));
    }

    #[test]
    fn non_jpeg_and_unreadable_exif_default_to_upright() {
        assert_eq!(exif_orientation(Path::new("a.png"), b"whatever"), 1);
        assert_eq!(exif_orientation(Path::new("a.jpg"), b"not a jpeg"), 1);
    }
}
