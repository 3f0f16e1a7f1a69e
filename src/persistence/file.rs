use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::PoseStore;
use crate::error::BodymapError;

/// Pose store backed by a TOML file.
///
/// Writes only touch memory; [`flush`](Self::flush) saves them. Hosts call
/// it at lifecycle points (backgrounding, teardown) rather than per frame.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
    values: BTreeMap<String, f32>,
    dirty: bool,
}

impl TomlFileStore {
    /// Open the store at `path`, loading existing values if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BodymapError> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)
                .map_err(|e| BodymapError::StoreParse(e.to_string()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    /// File the store saves to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are unsaved writes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save pending writes to disk.
    pub fn flush(&mut self) -> Result<(), BodymapError> {
        if !self.dirty {
            return Ok(());
        }
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| BodymapError::StoreParse(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        self.dirty = false;
        Ok(())
    }
}

impl PoseStore for TomlFileStore {
    fn set(&mut self, key: &str, value: f32) {
        let _ = self.values.insert(key.to_owned(), value);
        self.dirty = true;
    }

    fn get(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }
}
