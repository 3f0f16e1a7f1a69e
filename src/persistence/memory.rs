use rustc_hash::FxHashMap;

use super::PoseStore;

/// Pose store kept in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: FxHashMap<String, f32>,
}

impl MemoryStore {
    /// Number of keys written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<f32> {
        self.values.remove(key)
    }

    /// All entries sorted by key.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, f32)> {
        let mut entries: Vec<(&str, f32)> = self
            .values
            .iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl PoseStore for MemoryStore {
    fn set(&mut self, key: &str, value: f32) {
        let _ = self.values.insert(key.to_owned(), value);
    }

    fn get(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_sorted_and_last_write_wins() {
        let mut store = MemoryStore::default();
        store.set("scene_fov_y", 60.0);
        store.set("scene_fov_x", 35.0);
        store.set("scene_fov_y", 45.0);
        assert_eq!(
            store.entries(),
            vec![("scene_fov_x", 35.0), ("scene_fov_y", 45.0)]
        );
        assert_eq!(store.remove("scene_fov_x"), Some(35.0));
        assert_eq!(store.len(), 1);
    }
}
