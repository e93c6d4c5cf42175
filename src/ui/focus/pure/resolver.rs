// Directional focus resolution (pure functions)
//
// Strategies are tried in order and the first one that yields a rendered
// target wins: adjacency table, coordinate arithmetic, bounded scan.
// A miss on every strategy is a no-op, never an error.

use crate::ui::focus::pure::adjacency::AdjacencyTable;
use crate::ui::focus::pure::coords::{grid_id, GridCoord};
use crate::ui::focus::types::{FocusId, FocusSurface, NavConfig, NavDirection};

/// Which strategy produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Table,
    Arithmetic,
    ChromeFallback,
    Scan,
}

/// A successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub target: FocusId,
    pub via: Strategy,
}

impl Resolved {
    fn new(target: FocusId, via: Strategy) -> Self {
        Self { target, via }
    }
}

/// Resolve the next focus id for `direction`, or `None` if nothing is reachable
pub fn resolve<S: FocusSurface + ?Sized>(
    current: Option<&FocusId>,
    direction: NavDirection,
    surface: &S,
    table: &AdjacencyTable,
    config: &NavConfig,
) -> Option<FocusId> {
    resolve_traced(current, direction, surface, table, config).map(|r| r.target)
}

/// Same as [`resolve`], also reporting which strategy matched
pub fn resolve_traced<S: FocusSurface + ?Sized>(
    current: Option<&FocusId>,
    direction: NavDirection,
    surface: &S,
    table: &AdjacencyTable,
    config: &NavConfig,
) -> Option<Resolved> {
    let current = current?;

    if let Some(hit) = first_existing(surface, table.candidates(current, direction)) {
        return Some(Resolved::new(hit, Strategy::Table));
    }

    let coord = GridCoord::parse(current)?;
    let in_grid = coord.in_section(&config.grid_section);
    let section = coord.section.as_str();
    let exists = |row: usize, col: usize| {
        let id = grid_id(section, row, col);
        surface.exists(&id).then_some(id)
    };

    let max_cols = config.max_cols.min(NavConfig::MAX_SCAN);
    let max_rows = config.max_rows.min(NavConfig::MAX_SCAN);

    match direction {
        NavDirection::Left => {
            if coord.col > 0 {
                exists(coord.row, coord.col - 1).map(|id| Resolved::new(id, Strategy::Arithmetic))
            } else {
                first_existing(surface, &config.left_fallback)
                    .map(|id| Resolved::new(id, Strategy::ChromeFallback))
            }
        }
        NavDirection::Right => {
            if let Some(id) = exists(coord.row, coord.col.saturating_add(1)) {
                return Some(Resolved::new(id, Strategy::Arithmetic));
            }
            // Skip over gaps, never wrap back to lower columns
            (coord.col.saturating_add(2)..max_cols)
                .find_map(|col| exists(coord.row, col))
                .map(|id| Resolved::new(id, Strategy::Scan))
        }
        NavDirection::Up => {
            if !in_grid || coord.row == 0 {
                return first_existing(surface, &config.up_fallback)
                    .map(|id| Resolved::new(id, Strategy::ChromeFallback));
            }
            if let Some(id) = exists(coord.row - 1, coord.col) {
                return Some(Resolved::new(id, Strategy::Arithmetic));
            }
            (0..coord.row)
                .rev()
                .take(max_rows)
                .find_map(|row| exists(row, 0))
                .map(|id| Resolved::new(id, Strategy::Scan))
        }
        NavDirection::Down => {
            if !in_grid {
                return None;
            }
            if let Some(id) = exists(coord.row.saturating_add(1), coord.col) {
                return Some(Resolved::new(id, Strategy::Arithmetic));
            }
            (coord.row.saturating_add(1)..=coord.row.saturating_add(max_rows))
                .find_map(|row| exists(row, 0))
                .map(|id| Resolved::new(id, Strategy::Scan))
        }
    }
}

/// First candidate that is currently rendered
pub fn first_existing<S: FocusSurface + ?Sized>(
    surface: &S,
    candidates: &[FocusId],
) -> Option<FocusId> {
    candidates.iter().find(|id| surface.exists(id)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::pure::adjacency::home_table;
    use std::collections::HashSet;

    /// Surface backed by a fixed set of rendered ids
    #[derive(Default)]
    struct FakeSurface {
        rendered: HashSet<FocusId>,
    }

    impl FakeSurface {
        fn with(ids: &[&str]) -> Self {
            Self {
                rendered: ids.iter().map(|id| FocusId::from(*id)).collect(),
            }
        }

        fn with_row(mut self, section: &str, row: usize, cols: usize) -> Self {
            for col in 0..cols {
                self.rendered.insert(grid_id(section, row, col));
            }
            self
        }
    }

    impl FocusSurface for FakeSurface {
        fn exists(&self, id: &FocusId) -> bool {
            self.rendered.contains(id)
        }

        fn focus(&mut self, _id: &FocusId) {}

        fn activate(&mut self, id: &FocusId) -> bool {
            self.exists(id)
        }
    }

    fn go(surface: &FakeSurface, from: &str, direction: NavDirection) -> Option<String> {
        resolve(
            Some(&FocusId::from(from)),
            direction,
            surface,
            &home_table(),
            &NavConfig::default(),
        )
        .map(|id| id.to_string())
    }

    #[test]
    fn test_none_current_is_noop() {
        let surface = FakeSurface::with(&["hero-play-0"]);
        for dir in NavDirection::ALL {
            assert_eq!(
                resolve(None, dir, &surface, &home_table(), &NavConfig::default()),
                None
            );
        }
    }

    #[test]
    fn test_chrome_with_absent_targets_resolves_to_none() {
        let surface = FakeSurface::default();
        let table = home_table();
        for id in table.ids() {
            for dir in NavDirection::ALL {
                assert_eq!(go(&surface, id.as_str(), dir), None, "{id} {dir:?}");
            }
        }
    }

    #[test]
    fn test_hero_play_right_prefers_info() {
        let surface = FakeSurface::with(&["hero-play-0", "hero-info-0", "hero-watchlist-0"]);
        assert_eq!(
            go(&surface, "hero-play-0", NavDirection::Right).as_deref(),
            Some("hero-info-0")
        );

        let surface = FakeSurface::with(&["hero-play-0", "hero-watchlist-0"]);
        assert_eq!(
            go(&surface, "hero-play-0", NavDirection::Right).as_deref(),
            Some("hero-watchlist-0")
        );
    }

    #[test]
    fn test_left_moves_one_column() {
        let surface = FakeSurface::default().with_row("home", 1, 5);
        for col in 1..5 {
            let from = format!("home-1-{col}");
            let expected = format!("home-1-{}", col - 1);
            assert_eq!(go(&surface, &from, NavDirection::Left), Some(expected));
        }
    }

    #[test]
    fn test_left_from_first_column_uses_chrome_fallback() {
        let surface = FakeSurface::with(&["hero-play-0", "sidebar-toggle-0"]).with_row("home", 2, 3);
        assert_eq!(
            go(&surface, "home-2-0", NavDirection::Left).as_deref(),
            Some("hero-play-0")
        );

        let surface = FakeSurface::with(&["sidebar-toggle-0"]).with_row("home", 2, 3);
        assert_eq!(
            go(&surface, "home-2-0", NavDirection::Left).as_deref(),
            Some("sidebar-toggle-0")
        );

        let surface = FakeSurface::default().with_row("home", 2, 3);
        assert_eq!(go(&surface, "home-2-0", NavDirection::Left), None);
    }

    #[test]
    fn test_right_stops_at_last_column() {
        let surface = FakeSurface::default().with_row("home", 0, 4);
        let mut current = FocusId::from("home-0-0");
        for _ in 0..10 {
            if let Some(next) = resolve(
                Some(&current),
                NavDirection::Right,
                &surface,
                &home_table(),
                &NavConfig::default(),
            ) {
                current = next;
            }
        }
        assert_eq!(current.as_str(), "home-0-3");
    }

    #[test]
    fn test_right_scans_over_gaps() {
        let surface = FakeSurface::with(&["home-0-0", "home-0-4"]);
        let resolved = resolve_traced(
            Some(&"home-0-0".into()),
            NavDirection::Right,
            &surface,
            &home_table(),
            &NavConfig::default(),
        )
        .unwrap();
        assert_eq!(resolved.target.as_str(), "home-0-4");
        assert_eq!(resolved.via, Strategy::Scan);
    }

    #[test]
    fn test_right_scan_respects_column_bound() {
        let surface = FakeSurface::with(&["home-0-0", "home-0-12"]);
        assert_eq!(go(&surface, "home-0-0", NavDirection::Right), None);

        let wide = NavConfig::default().with_bounds(20, 15);
        let got = resolve(
            Some(&"home-0-0".into()),
            NavDirection::Right,
            &surface,
            &home_table(),
            &wide,
        );
        assert_eq!(got, Some("home-0-12".into()));
    }

    #[test]
    fn test_down_falls_back_to_first_column() {
        let surface = FakeSurface::default()
            .with_row("home", 0, 8)
            .with_row("home", 1, 2);
        assert_eq!(
            go(&surface, "home-0-1", NavDirection::Down).as_deref(),
            Some("home-1-1")
        );
        assert_eq!(
            go(&surface, "home-0-6", NavDirection::Down).as_deref(),
            Some("home-1-0")
        );
        assert_eq!(go(&surface, "home-1-0", NavDirection::Down), None);
    }

    #[test]
    fn test_down_skips_missing_rows() {
        let surface = FakeSurface::default()
            .with_row("home", 0, 3)
            .with_row("home", 3, 3);
        assert_eq!(
            go(&surface, "home-0-2", NavDirection::Down).as_deref(),
            Some("home-3-0")
        );
    }

    #[test]
    fn test_up_from_top_row_leaves_grid() {
        let surface = FakeSurface::with(&["hero-play-0", "nav-home-0"]).with_row("home", 0, 3);
        assert_eq!(
            go(&surface, "home-0-2", NavDirection::Up).as_deref(),
            Some("hero-play-0")
        );
    }

    #[test]
    fn test_up_scans_backwards() {
        let surface = FakeSurface::default()
            .with_row("home", 0, 2)
            .with_row("home", 1, 6);
        assert_eq!(
            go(&surface, "home-1-4", NavDirection::Up).as_deref(),
            Some("home-0-0")
        );
        assert_eq!(
            go(&surface, "home-1-1", NavDirection::Up).as_deref(),
            Some("home-0-1")
        );
    }

    #[test]
    fn test_vertical_arithmetic_only_in_grid_section() {
        let surface = FakeSurface::default()
            .with_row("other", 0, 2)
            .with_row("other", 1, 2);
        assert_eq!(go(&surface, "other-0-0", NavDirection::Down), None);
        assert_eq!(go(&surface, "other-1-0", NavDirection::Up), None);
        assert_eq!(
            go(&surface, "other-0-0", NavDirection::Right).as_deref(),
            Some("other-0-1")
        );
    }

    #[test]
    fn test_scans_are_capped() {
        let unbounded = NavConfig::default().with_bounds(usize::MAX, usize::MAX);
        let surface = FakeSurface::with(&["home-5-0", "home-5-300", "home-400-0"]);
        let from = FocusId::from("home-5-0");
        let table = home_table();

        assert_eq!(resolve(Some(&from), NavDirection::Down, &surface, &table, &unbounded), None);
        assert_eq!(resolve(Some(&from), NavDirection::Right, &surface, &table, &unbounded), None);

        let surface = FakeSurface::with(&["home-5-0", "home-5-200", "home-200-0"]);
        assert_eq!(
            resolve(Some(&from), NavDirection::Right, &surface, &table, &unbounded),
            Some("home-5-200".into())
        );
        assert_eq!(
            resolve(Some(&from), NavDirection::Down, &surface, &table, &unbounded),
            Some("home-200-0".into())
        );
    }

    #[test]
    fn test_huge_coordinates_do_not_overflow() {
        let unbounded = NavConfig::default().with_bounds(usize::MAX, usize::MAX);
        let edge = grid_id("home", usize::MAX, usize::MAX);
        let surface = FakeSurface::default();
        for dir in NavDirection::ALL {
            assert_eq!(resolve(Some(&edge), dir, &surface, &home_table(), &unbounded), None);
        }
    }

    #[test]
    fn test_table_wins_over_arithmetic() {
        let table = AdjacencyTable::builder()
            .link("home-0-1", NavDirection::Right, &["hero-play-0"])
            .build();
        let surface = FakeSurface::with(&["hero-play-0"]).with_row("home", 0, 3);
        let resolved = resolve_traced(
            Some(&"home-0-1".into()),
            NavDirection::Right,
            &surface,
            &table,
            &NavConfig::default(),
        )
        .unwrap();
        assert_eq!(resolved, Resolved::new("hero-play-0".into(), Strategy::Table));
    }
}
