use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_supported_image(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension_of(path).as_str())
}

// --- Collect image files, sorted by file name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    Ok(paths)
}

/// Quarter turns needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    // 1 = normal, 3 = 180°, 6 = 90° CW, 8 = 90° CCW. Flipped orientations are
    // left as they are.
    pub fn from_exif_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }

    fn apply(self, image: &mut Image) {
        match self {
            Rotation::None => {}
            Rotation::Half => {
                image.rotate_cw();
                image.rotate_cw();
            }
            Rotation::Clockwise => image.rotate_cw(),
            Rotation::CounterClockwise => image.rotate_ccw(),
        }
    }
}

fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> Option<u16> {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => {
            let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
            match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            }
        }
        Err(e) => {
            // Not fatal: the image is shown unrotated.
            warn!("Could not read EXIF data for {}: {}", image_path.display(), e);
            None
        }
    }
}

// --- Load image, apply EXIF rotation, create texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes).unwrap_or(1)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("Failed to load image data for {}: {}", image_path.display(), e))?;

    let rotation = Rotation::from_exif_orientation(orientation);
    if rotation != Rotation::None {
        debug!("Rotating {} ({:?})", image_path.display(), rotation);
    }
    rotation.apply(&mut image);

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    // Free the CPU-side copy as soon as the texture lives on the GPU
    drop(image);

    Ok(texture)
}
