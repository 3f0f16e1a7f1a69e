//! `bodymap-replay`: drive an [`OrbitController`] from a TOML script.
//!
//! ```text
//! bodymap-replay <script.toml> [options.toml]
//! bodymap-replay --schema
//! ```
//!
//! The script describes a scene of named nodes with rectangular hit
//! regions and a timed list of gesture events. The replay renders virtual
//! 16 ms frames, ticks the controller between them and logs every
//! callback, then the final pose and persisted store as JSON.

use std::path::{Path, PathBuf};

use bodymap::controller::OrbitController;
use bodymap::error::BodymapError;
use bodymap::input::{GestureEvent, Viewport};
use bodymap::options::Options;
use bodymap::persistence::{
    MemoryStore, PersistedPose, PoseStore, TomlFileStore,
};
use bodymap::scene::memory::HitRegion;
use bodymap::scene::{InteractionObserver, MemoryScene};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Deserialize)]
struct Script {
    viewport: Viewport,
    #[serde(default)]
    nodes: Vec<String>,
    #[serde(default)]
    regions: Vec<HitRegion>,
    #[serde(default)]
    events: Vec<ScriptedEvent>,
    /// How long to keep rendering after the last event.
    #[serde(default = "default_settle_ms")]
    settle_ms: u64,
    /// Persist to this TOML file instead of memory.
    store: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ScriptedEvent {
    at_ms: u64,
    gesture: GestureEvent,
}

const fn default_settle_ms() -> u64 {
    1000
}

impl Script {
    fn load(path: &Path) -> Result<Self, BodymapError> {
        let content = std::fs::read_to_string(path)?;
        let mut script: Self = toml::from_str(&content)
            .map_err(|e| BodymapError::Script(e.to_string()))?;
        if !script.viewport.is_usable() {
            return Err(BodymapError::Script(format!(
                "unusable viewport {:?}",
                script.viewport
            )));
        }
        script.events.sort_by_key(|e| e.at_ms);
        log::info!(
            "Loaded script {} ({} nodes, {} events)",
            path.display(),
            script.nodes.len(),
            script.events.len()
        );
        Ok(script)
    }

    fn scene(&self) -> MemoryScene {
        self.regions
            .iter()
            .cloned()
            .fold(MemoryScene::new(self.nodes.iter().cloned()), |scene, r| {
                scene.with_region(r)
            })
    }

    fn duration(&self) -> Duration {
        let last = self.events.last().map_or(0, |e| e.at_ms);
        Duration::from_millis(last + self.settle_ms)
    }
}

/// Logs callbacks as they arrive and keeps them for the report.
#[derive(Default)]
struct LoggingObserver {
    callbacks: Vec<String>,
}

impl InteractionObserver for LoggingObserver {
    fn began_moving(&mut self, position: Vec3) {
        log::info!("began moving at {position}");
        self.callbacks.push(format!("began_moving {position}"));
    }

    fn item_selected(&mut self, node: &str) {
        log::info!("selected {node}");
        self.callbacks.push(format!("selected {node}"));
    }

    fn item_deselected(&mut self) {
        log::info!("deselected");
        self.callbacks.push("deselected".to_owned());
    }
}

#[derive(Serialize)]
struct Report {
    callbacks: Vec<String>,
    yaw_ratio: f32,
    pitch_ratio: f32,
    pan: [f32; 2],
    zoom: f32,
    persisted: Option<[f32; 9]>,
}

type Replay<K> = OrbitController<MemoryScene, LoggingObserver, K>;

fn run<K: PoseStore>(
    script: &Script,
    options: Options,
    store: K,
) -> Replay<K> {
    let mut controller = OrbitController::new(
        options,
        script.viewport,
        LoggingObserver::default(),
        store,
    );
    controller.attach_scene(script.scene());

    let start = Instant::now();
    let end = start + script.duration();
    let mut pending = script.events.iter().peekable();
    let mut frame = start;
    while frame <= end {
        while let Some(event) =
            pending.next_if(|e| start + Duration::from_millis(e.at_ms) <= frame)
        {
            let at = start + Duration::from_millis(event.at_ms);
            let status = controller.handle_gesture(event.gesture, at);
            log::debug!(
                "{} ms: {:?} -> {status:?}",
                event.at_ms,
                event.gesture
            );
        }
        let _ = controller.tick(frame);
        let pov = controller.point_of_view();
        let _ = controller.frame_rendered(&pov);
        frame += FRAME;
    }
    controller
}

fn report<K: PoseStore>(controller: &Replay<K>) -> Report {
    let pose = controller.pose();
    Report {
        persisted: PersistedPose::read(controller.store())
            .map(|p| p.fields()),
        yaw_ratio: pose.yaw_ratio,
        pitch_ratio: pose.pitch_ratio,
        pan: pose.pan.to_array(),
        zoom: pose.zoom,
        callbacks: controller.observer().callbacks.clone(),
    }
}

fn log_report(report: &Report) -> Result<(), BodymapError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| BodymapError::Script(e.to_string()))?;
    log::info!("replay finished:\n{json}");
    Ok(())
}

fn replay(
    script_path: &Path,
    options_path: Option<&Path>,
) -> Result<(), BodymapError> {
    let script = Script::load(script_path)?;
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    match &script.store {
        Some(path) => {
            let store = TomlFileStore::open(path)?;
            if let Some(previous) = PersistedPose::read(&store) {
                log::info!(
                    "restoring persisted position {}",
                    previous.position
                );
            }
            let mut controller = run(&script, options, store);
            match controller.store_mut().flush() {
                Ok(()) => log::info!(
                    "saved pose store to {}",
                    controller.store().path().display()
                ),
                Err(e) => log::warn!("failed to save pose store: {e}"),
            }
            log_report(&report(&controller))
        }
        None => {
            let controller = run(&script, options, MemoryStore::default());
            for (key, value) in controller.store().entries() {
                log::debug!("{key} = {value}");
            }
            log_report(&report(&controller))
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--schema") {
        match serde_json::to_string_pretty(&Options::json_schema()) {
            Ok(schema) => log::info!("options schema:\n{schema}"),
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let Some(script) = args.first() else {
        log::error!("Usage: bodymap-replay <script.toml> [options.toml]");
        std::process::exit(1);
    };
    let options = args.get(1).map(Path::new);

    if let Err(e) = replay(Path::new(script), options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
