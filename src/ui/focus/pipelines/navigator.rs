// Navigator: the focus state of one page plus the rules to move it

use crate::ui::focus::pure::{resolve_traced, AdjacencyTable};
use crate::ui::focus::types::{FocusId, FocusState, FocusSurface, NavConfig, NavDirection};

/// Owns the focus of a single navigation context.
///
/// One navigator is built per page mount and handed to whatever renders that
/// page; there is no process-wide focus.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: FocusState,
    table: AdjacencyTable,
    config: NavConfig,
}

impl Navigator {
    pub fn new(table: AdjacencyTable, config: NavConfig) -> Self {
        let state = FocusState::new(config.default_focus.clone());
        Self {
            state,
            table,
            config,
        }
    }

    pub fn current(&self) -> Option<&FocusId> {
        self.state.current()
    }

    pub fn is_focused(&self, id: &FocusId) -> bool {
        self.state.is_focused(id)
    }

    /// Explicit focus change, e.g. from a mouse click
    pub fn set_focus(&mut self, id: FocusId) {
        self.state.set(id);
    }

    /// Move focus in `direction`. On a miss the state is left untouched.
    pub fn navigate<S: FocusSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        direction: NavDirection,
    ) -> Option<FocusId> {
        let Some(resolved) =
            resolve_traced(self.state.current(), direction, &*surface, &self.table, &self.config)
        else {
            tracing::trace!(
                target: "cinegrid::focus",
                from = ?self.state.current(),
                ?direction,
                "no target"
            );
            return None;
        };

        tracing::debug!(
            target: "cinegrid::focus",
            from = ?self.state.current(),
            to = %resolved.target,
            via = ?resolved.via,
            "focus moved"
        );

        self.state.set(resolved.target.clone());
        surface.focus(&resolved.target);
        Some(resolved.target)
    }

    /// Click the focused element, if it is rendered
    pub fn activate<S: FocusSurface + ?Sized>(&self, surface: &mut S) -> Option<FocusId> {
        let current = self.state.current()?;
        surface.activate(current).then(|| current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::pure::home_table;
    use std::collections::HashSet;

    /// Surface that records what the navigator asked of it
    #[derive(Default)]
    struct RecordingSurface {
        rendered: HashSet<FocusId>,
        focused: Vec<FocusId>,
        clicked: Vec<FocusId>,
    }

    impl RecordingSurface {
        fn with(ids: &[&str]) -> Self {
            Self {
                rendered: ids.iter().map(|id| FocusId::from(*id)).collect(),
                ..Default::default()
            }
        }
    }

    impl FocusSurface for RecordingSurface {
        fn exists(&self, id: &FocusId) -> bool {
            self.rendered.contains(id)
        }

        fn focus(&mut self, id: &FocusId) {
            self.focused.push(id.clone());
        }

        fn activate(&mut self, id: &FocusId) -> bool {
            if !self.exists(id) {
                return false;
            }
            self.clicked.push(id.clone());
            true
        }
    }

    fn home_nav() -> Navigator {
        Navigator::new(home_table(), NavConfig::default())
    }

    #[test]
    fn test_mount_focuses_default() {
        let nav = home_nav();
        assert_eq!(nav.current(), Some(&FocusId::from("hero-play-0")));
    }

    #[test]
    fn test_navigate_updates_state_and_scrolls() {
        let mut nav = home_nav();
        let mut surface = RecordingSurface::with(&["hero-play-0", "hero-info-0"]);

        let moved = nav.navigate(&mut surface, NavDirection::Right);
        assert_eq!(moved, Some("hero-info-0".into()));
        assert!(nav.is_focused(&"hero-info-0".into()));
        assert_eq!(surface.focused, vec![FocusId::from("hero-info-0")]);
    }

    #[test]
    fn test_miss_leaves_state_unchanged() {
        let mut nav = home_nav();
        let mut surface = RecordingSurface::with(&["hero-play-0"]);
        let before = nav.current().cloned();

        for dir in NavDirection::ALL {
            assert_eq!(nav.navigate(&mut surface, dir), None);
        }
        assert_eq!(nav.current().cloned(), before);
        assert!(surface.focused.is_empty());
    }

    #[test]
    fn test_activate_absent_target_is_noop() {
        let mut nav = home_nav();
        nav.set_focus("home-4-4".into());
        let mut surface = RecordingSurface::with(&["hero-play-0"]);

        assert_eq!(nav.activate(&mut surface), None);
        assert!(surface.clicked.is_empty());
    }

    #[test]
    fn test_activate_present_target() {
        let nav = home_nav();
        let mut surface = RecordingSurface::with(&["hero-play-0"]);
        assert_eq!(nav.activate(&mut surface), Some("hero-play-0".into()));
        assert_eq!(surface.clicked, vec![FocusId::from("hero-play-0")]);
    }

    #[test]
    fn test_no_default_focus_never_moves() {
        let config = NavConfig {
            default_focus: None,
            ..NavConfig::default()
        };
        let mut nav = Navigator::new(home_table(), config);
        let mut surface = RecordingSurface::with(&["hero-play-0", "hero-info-0"]);
        assert_eq!(nav.navigate(&mut surface, NavDirection::Right), None);
        assert_eq!(nav.current(), None);
    }
}
