//! Debounced tap selection and highlight fades.

pub mod debouncer;
pub mod highlight;

pub use debouncer::{TapAction, TapDebouncer};
pub use highlight::{apply_highlight, highlight_plan};
