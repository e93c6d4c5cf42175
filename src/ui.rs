pub mod components;
pub mod focus;
pub mod theme;

/// Application page/view
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum MenuPage {
    Home,
    /// Detail view of one catalog item, by id
    Detail(String),
    Watchlist,
}

// =============================================================================
// Re-exports
// =============================================================================

pub use focus::{FocusId, FocusScope, NavConfig};
