/// Test utilities for the CSV storage layer.
///
/// Provides an RAII temporary directory so test data disappears even when
/// a test panics.
use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment holding a temporary directory for dataset files.
pub struct TestEnvironment {
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        Ok(Self {
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// Write a CSV file under the temp directory and return its path.
    pub fn write_dataset(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.base_path.join(file_name);
        std::fs::write(&path, contents).expect("failed to write test dataset");
        path
    }
}
