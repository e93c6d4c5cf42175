use crate::ui::focus::NavConfig;
use serde::{Deserialize, Serialize};

/// Bounds of the fallback scans used by grid navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavBounds {
    /// Columns scanned when moving right past a gap
    #[serde(default = "default_max_cols")]
    pub max_cols: usize,
    /// Rows scanned when moving down past a gap
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

fn default_max_cols() -> usize {
    10
}

fn default_max_rows() -> usize {
    15
}

impl Default for NavBounds {
    fn default() -> Self {
        Self {
            max_cols: default_max_cols(),
            max_rows: default_max_rows(),
        }
    }
}

impl NavBounds {
    pub fn apply(self, config: NavConfig) -> NavConfig {
        config.with_bounds(self.max_cols, self.max_rows)
    }
}

/// Main application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CinegridConfig {
    #[serde(default)]
    pub nav: NavBounds,
    #[serde(default)]
    pub fullscreen: bool,
    /// egui zoom factor applied at startup
    #[serde(default = "default_zoom")]
    pub zoom: f32,
    /// Pick a random featured title for the hero banner on each start
    #[serde(default = "default_shuffle_hero")]
    pub shuffle_hero: bool,
    /// Start with the genre sidebar open
    #[serde(default)]
    pub sidebar_open: bool,
}

fn default_zoom() -> f32 {
    1.2
}

fn default_shuffle_hero() -> bool {
    true
}

impl Default for CinegridConfig {
    fn default() -> Self {
        CinegridConfig {
            nav: NavBounds::default(),
            fullscreen: false,
            zoom: default_zoom(),
            shuffle_hero: default_shuffle_hero(),
            sidebar_open: false,
        }
    }
}
