pub mod highlight;
pub mod targets;

// Re-exports
pub use highlight::{draw_focus_ring_styled, FocusRingStyle};
pub use targets::{FocusTargets, TargetRequests};
