//! Asset loading and PNG frame export

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::io::error::{Result, SketchError, invalid_parameter, invalid_source_data};

/// File extensions recognized as loadable illustrations
const ASSET_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// A loaded source illustration
#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// File stem the asset was loaded from
    pub name: String,
    /// Decoded RGBA pixel data
    pub image: RgbaImage,
}

impl ImageAsset {
    /// Wrap a decoded image with its display name
    pub const fn new(name: String, image: RgbaImage) -> Self {
        Self { name, image }
    }

    /// Whether the asset can be drawn at all
    ///
    /// Zero-dimension assets are tolerated in the pool and skipped per
    /// placement instead of failing the whole frame.
    pub fn is_drawable(&self) -> bool {
        self.image.width() > 0 && self.image.height() > 0
    }
}

/// Load every recognized image in a directory, sorted by filename
///
/// Sorting gives each asset a stable index across runs, which is what ties a
/// seed to a reproducible frame sequence. All assets are decoded to RGBA8
/// once, up front; rendering never touches the filesystem.
///
/// # Errors
///
/// Returns an error if the path is not a directory, the directory cannot be
/// read, no recognized images are found, or any image fails to decode.
pub fn load_assets(dir: &Path) -> Result<Vec<ImageAsset>> {
    if !dir.is_dir() {
        return Err(invalid_parameter(
            "assets",
            &dir.display(),
            &"assets path must be a directory",
        ));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| SketchError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })? {
        let path = entry?.path();
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ASSET_EXTENSIONS
                    .iter()
                    .any(|candidate| ext.eq_ignore_ascii_case(candidate))
            });
        if recognized {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(invalid_source_data(&format!(
            "no loadable images found in '{}'",
            dir.display()
        )));
    }

    let mut assets = Vec::with_capacity(paths.len());
    for path in paths {
        let decoded = image::open(&path)
            .map_err(|e| SketchError::AssetLoad {
                path: path.clone(),
                source: e,
            })?
            .to_rgba8();
        let name = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        assets.push(ImageAsset::new(name, decoded));
    }

    Ok(assets)
}

/// Save a rendered frame as a PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the given path.
pub fn export_frame_png(frame: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    frame
        .save(output_path)
        .map_err(|e| SketchError::FrameExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
