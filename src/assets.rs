//! Content-addressed export of raster assets.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};

use crate::error::{NexpError, Result};
use crate::types::document::ImageData;

/// Writes image resources into the export directory under names derived
/// from a SHA-1 of their bytes, so identical content always maps to the
/// same file and re-exports are no-ops.
#[derive(Debug)]
pub struct AssetStore {
    dir: PathBuf,
    written: HashSet<String>,
}

impl AssetStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            written: HashSet::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of distinct assets referenced so far.
    pub fn asset_count(&self) -> usize {
        self.written.len()
    }

    /// Write the image into the export directory and return its filename.
    ///
    /// The write is skipped when a file with the same content hash already
    /// exists.
    pub fn store(&mut self, image: &ImageData) -> Result<String> {
        let filename = asset_filename(&image.data);
        let path = self.dir.join(&filename);
        if !path.exists() {
            fs::write(&path, &image.data).map_err(|e| {
                NexpError::asset(format!("failed to write {}: {e}", path.display()))
            })?;
        }
        self.written.insert(filename.clone());
        Ok(filename)
    }
}

/// `<hex sha1>.png` for the given bytes.
pub fn asset_filename(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    format!("{}.png", hex::encode(digest))
}
