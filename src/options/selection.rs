use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
/// Tap debounce timing and highlight appearance.
pub struct SelectionOptions {
    /// How long a single tap waits for a following tap before selecting.
    #[schemars(title = "Single Tap Delay (ms)", range(min = 100, max = 1000))]
    pub single_tap_delay_ms: u64,
    /// How long a double tap waits for a following tap before zooming in.
    #[schemars(title = "Double Tap Delay (ms)", range(min = 50, max = 1000))]
    pub double_tap_delay_ms: u64,
    /// Opacity of nodes that are not part of the selection.
    #[schemars(title = "Dimmed Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub dimmed_opacity: f32,
    /// Duration of the opacity fade in milliseconds.
    #[schemars(title = "Fade (ms)", range(min = 0, max = 2000))]
    pub fade_ms: u64,
    /// Node names that always stay fully opaque (reference geometry,
    /// light markers).
    #[schemars(skip)]
    pub permanent_nodes: Vec<String>,
    /// Nodes whose name contains this marker are hidden every frame.
    #[schemars(skip)]
    pub hidden_marker: String,
}

impl SelectionOptions {
    /// Delay before a single tap resolves.
    #[must_use]
    pub fn single_tap_delay(&self) -> Duration {
        Duration::from_millis(self.single_tap_delay_ms)
    }

    /// Delay before a double tap resolves.
    #[must_use]
    pub fn double_tap_delay(&self) -> Duration {
        Duration::from_millis(self.double_tap_delay_ms)
    }

    /// Opacity fade duration.
    #[must_use]
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Whether `node` is a permanent overlay that is never dimmed.
    #[must_use]
    pub fn is_permanent(&self, node: &str) -> bool {
        self.permanent_nodes.iter().any(|name| name == node)
    }

    /// Whether `node` should be hidden by the per-frame visibility pass.
    #[must_use]
    pub fn is_hidden(&self, node: &str) -> bool {
        !self.hidden_marker.is_empty() && node.contains(&self.hidden_marker)
    }
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            single_tap_delay_ms: 333,
            double_tap_delay_ms: 200,
            dimmed_opacity: 0.2,
            fade_ms: 330,
            permanent_nodes: vec!["Skeletal".to_owned(), "Spot".to_owned()],
            hidden_marker: "Skeletal".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Persistence", inline)]
#[serde(default)]
/// Point-of-view persistence switches.
pub struct PersistenceOptions {
    /// Write the point of view to the pose store after every frame.
    #[schemars(title = "Remember Camera")]
    pub enabled: bool,
}

impl Default for PersistenceOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}
