// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Touch-driven orbit camera and tap selection for 3D anatomy viewers.
//!
//! Bodymap turns raw gesture recognizer output (drags, pinches, long
//! presses, single/double/triple taps) into an orbit camera pose, debounced
//! node selection with opacity highlighting, and a persisted point of view.
//! The renderer stays outside the crate: it is reached through the
//! [`scene::SceneGraph`] trait.
//!
//! # Key entry points
//!
//! - [`controller::OrbitController`] - the component hosts talk to
//! - [`camera::OrbitCamera`] - rotate / pan / zoom state machine
//! - [`selection::TapDebouncer`] - cancelable delayed tap actions
//! - [`persistence::PoseRecorder`] - per-frame point-of-view persistence
//! - [`options::Options`] - TOML-configurable limits and timings
//!
//! # Threading
//!
//! Everything is single-threaded and deterministic. Time only moves when
//! the host passes an `Instant` into
//! [`handle_gesture`](controller::OrbitController::handle_gesture) or
//! [`tick`](controller::OrbitController::tick).

pub mod animation;
pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod options;
pub mod persistence;
pub mod scene;
pub mod selection;
pub mod util;
