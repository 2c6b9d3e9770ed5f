use anyhow::Result;
use fieldedit_types::IMAGE_SIZE_LIMIT;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temp directory of real media files for finalize tests.
pub struct MediaDir {
    dir: TempDir,
}

impl MediaDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Write a file of exactly `len` bytes and return its path.
    pub fn file(&self, name: &str, len: u64) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, vec![0u8; len as usize])?;
        Ok(path)
    }

    /// An image exactly at the finalize size limit.
    pub fn image_at_limit(&self, name: &str) -> Result<PathBuf> {
        self.file(name, IMAGE_SIZE_LIMIT)
    }

    /// An image one byte over the finalize size limit.
    pub fn oversize_image(&self, name: &str) -> Result<PathBuf> {
        self.file(name, IMAGE_SIZE_LIMIT + 1)
    }

    /// A path inside the directory that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
