//! Focus and navigation types for keyboard navigation

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Focus identifiers
// =============================================================================

/// Identifier of a focusable element.
///
/// Grid tiles use `<section>-<row>-<col>`; chrome controls use opaque ids
/// such as `hero-play-0`. Uniqueness per page is by convention only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FocusId(String);

impl FocusId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FocusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FocusId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FocusId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The single "current" focus of one navigation context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    current: Option<FocusId>,
}

impl FocusState {
    pub fn new(initial: Option<FocusId>) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Option<&FocusId> {
        self.current.as_ref()
    }

    pub fn set(&mut self, id: FocusId) {
        self.current = Some(id);
    }

    pub fn is_focused(&self, id: &FocusId) -> bool {
        self.current.as_ref() == Some(id)
    }
}

// =============================================================================
// Navigation types
// =============================================================================

/// Direction of navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NavDirection {
    #[cfg(test)]
    pub const ALL: [NavDirection; 4] = [
        NavDirection::Up,
        NavDirection::Down,
        NavDirection::Left,
        NavDirection::Right,
    ];
}

/// Navigation input after key mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    Direction(NavDirection),
    /// Enter / Space: click the focused element
    Activate,
}

/// What a key press ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Focus moved to a new element
    Moved(FocusId),
    /// A synthetic click was queued on the focused element
    Activated(FocusId),
    /// Navigation key, but nothing to move to or click
    Absorbed,
    /// Not a navigation key
    Ignored,
}

impl KeyOutcome {
    /// Whether the key event should be removed from the input stream
    pub fn consumed(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Bounds and fallbacks for one navigation context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Only this section moves vertically by coordinate arithmetic
    pub grid_section: String,
    /// Upper bound for the rightward column scan
    pub max_cols: usize,
    /// Number of rows scanned forward when moving down
    pub max_rows: usize,
    /// Chrome targets tried when moving left out of column 0
    pub left_fallback: Vec<FocusId>,
    /// Chrome targets tried when moving up out of the grid
    pub up_fallback: Vec<FocusId>,
    /// Focus assigned when the context is mounted
    pub default_focus: Option<FocusId>,
}

impl NavConfig {
    /// Largest scan bound honoured by the resolver. Each scan step is a
    /// lookup on the key handling path.
    pub const MAX_SCAN: usize = 256;

    pub fn for_section(section: impl Into<String>) -> Self {
        Self {
            grid_section: section.into(),
            ..Default::default()
        }
    }

    pub fn with_bounds(mut self, max_cols: usize, max_rows: usize) -> Self {
        self.max_cols = max_cols;
        self.max_rows = max_rows;
        self
    }

    pub fn with_left_fallback<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FocusId>,
    {
        self.left_fallback = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_up_fallback<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FocusId>,
    {
        self.up_fallback = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_focus(mut self, id: impl Into<FocusId>) -> Self {
        self.default_focus = Some(id.into());
        self
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            grid_section: "home".to_string(),
            max_cols: 10,
            max_rows: 15,
            left_fallback: vec!["hero-play-0".into(), "sidebar-toggle-0".into()],
            up_fallback: vec!["hero-play-0".into(), "nav-home-0".into()],
            default_focus: Some("hero-play-0".into()),
        }
    }
}

// =============================================================================
// Rendering capability
// =============================================================================

/// What the navigator needs from whatever renders the focusable elements
pub trait FocusSurface {
    /// Whether `id` is currently rendered
    fn exists(&self, id: &FocusId) -> bool;

    /// Bring `id` into view after focus moved to it
    fn focus(&mut self, id: &FocusId);

    /// Click `id`; returns false when nothing was dispatched
    fn activate(&mut self, id: &FocusId) -> bool;
}
