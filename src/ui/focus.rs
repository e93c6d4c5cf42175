pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use pipelines::{FocusScope, Navigator};
pub use types::{FocusId, FocusState, FocusSurface, KeyOutcome, NavConfig, NavDirection, NavInput};
