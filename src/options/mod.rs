//! Tweakable interaction constants with TOML support.
//!
//! Camera limits, tap timing, highlight appearance and persistence
//! switches are consolidated here. Options serialize to/from TOML so a
//! host can ship tuned presets next to its model assets.

mod camera;
mod selection;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
pub use selection::{PersistenceOptions, SelectionOptions};
use serde::{Deserialize, Serialize};

use crate::error::BodymapError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[selection]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit, pan and zoom parameters.
    pub camera: CameraOptions,
    /// Tap debounce and highlight parameters.
    pub selection: SelectionOptions,
    /// Point-of-view persistence.
    pub persistence: PersistenceOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, BodymapError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| BodymapError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BodymapError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BodymapError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BodymapError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject ranges that would make clamping meaningless.
    pub fn validate(&self) -> Result<(), BodymapError> {
        let camera = &self.camera;
        let checks = [
            (camera.zoom_min <= camera.zoom_max, "camera.zoom_min > zoom_max"),
            (
                camera.pitch_min <= camera.pitch_max,
                "camera.pitch_min > pitch_max",
            ),
            (camera.pan_down <= camera.pan_up, "camera.pan_down > pan_up"),
            (
                camera.pan_left <= camera.pan_right,
                "camera.pan_left > pan_right",
            ),
            (
                camera.pinch_attenuation > 0.0,
                "camera.pinch_attenuation must be positive",
            ),
            (
                (0.0..=1.0).contains(&self.selection.dimmed_opacity),
                "selection.dimmed_opacity outside [0, 1]",
            ),
        ];
        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, msg)) => Err(BodymapError::OptionsParse((*msg).to_owned())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_str = r"
[selection]
dimmed_opacity = 0.35
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.selection.dimmed_opacity, 0.35);
        assert_eq!(opts.selection.single_tap_delay_ms, 333);
        assert_eq!(opts.camera.zoom_max, 0.8);
        assert_eq!(opts.camera.pinch_attenuation, 70.0);
        assert!(opts.persistence.enabled);
    }

    #[test]
    fn test_inverted_zoom_range_is_rejected() {
        let toml_str = r"
[camera]
zoom_min = 0.9
zoom_max = 0.2
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, BodymapError::OptionsParse(_)));
    }

    #[test]
    fn test_permanent_and_hidden_nodes() {
        let selection = SelectionOptions::default();
        assert!(selection.is_permanent("Skeletal"));
        assert!(selection.is_permanent("Spot"));
        assert!(!selection.is_permanent("Liver"));
        assert!(selection.is_hidden("SkeletalArm"));
        assert!(!selection.is_hidden("Heart"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("bodymap-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.camera.zoom_step = 0.05;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.camera.zoom_step, 0.05);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("selection"));
        assert!(props.contains_key("persistence"));
    }
}
