pub mod io;

// Re-exports
pub use io::{load_cfg, load_cfg_from, save_cfg, save_cfg_to};
