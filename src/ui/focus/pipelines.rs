pub mod handle_input;
pub mod navigator;
pub mod scope;

// Re-exports
pub use handle_input::{dispatch_key_events, handle_key, handle_nav_input};
pub use navigator::Navigator;
pub use scope::FocusScope;
