//! Test double for the extractor seam.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::Extractor;
use crate::error::{Error, Result};
use crate::media::Track;

/// In-memory extractor keyed by path; unknown paths fail like a corrupt
/// file would.
#[derive(Default)]
pub struct FakeExtractor {
    files: Mutex<HashMap<PathBuf, Vec<Track>>>,
}

impl FakeExtractor {
    pub fn with_file(self, path: &str, tracks: Vec<Track>) -> Self {
        if let Ok(mut files) = self.files.lock() {
            files.insert(PathBuf::from(path), tracks);
        }
        self
    }
}

impl Extractor for FakeExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<Track>> {
        let files = self.files.lock().map_err(|_| Error::Extract {
            path: path.to_path_buf(),
            message: "poisoned".to_string(),
        })?;
        files.get(path).cloned().ok_or_else(|| Error::Extract {
            path: path.to_path_buf(),
            message: "unsupported file".to_string(),
        })
    }
}
