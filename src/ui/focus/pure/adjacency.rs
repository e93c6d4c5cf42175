// Hand-authored neighbour tables for chrome controls
//
// Grid tiles are never listed here; they move by coordinate arithmetic.

use crate::ui::focus::types::{FocusId, NavDirection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-direction candidate lists for one focus id, in preference order
pub type Neighbours = BTreeMap<NavDirection, Vec<FocusId>>;

/// Directional neighbour map for chrome focus ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyTable {
    entries: BTreeMap<FocusId, Neighbours>,
}

impl AdjacencyTable {
    pub fn builder() -> AdjacencyBuilder {
        AdjacencyBuilder::default()
    }

    /// Candidates for `id` in `direction`, empty if there is no entry
    pub fn candidates(&self, id: &FocusId, direction: NavDirection) -> &[FocusId] {
        self.entries
            .get(id)
            .and_then(|n| n.get(&direction))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[cfg(test)]
    pub fn contains(&self, id: &FocusId) -> bool {
        self.entries.contains_key(id)
    }

    #[cfg(test)]
    pub fn ids(&self) -> impl Iterator<Item = &FocusId> {
        self.entries.keys()
    }
}

/// Builds an [`AdjacencyTable`]; the table is immutable once built
#[derive(Debug, Default)]
pub struct AdjacencyBuilder {
    entries: BTreeMap<FocusId, Neighbours>,
}

impl AdjacencyBuilder {
    pub fn link(mut self, from: &str, direction: NavDirection, to: &[&str]) -> Self {
        self.entries
            .entry(FocusId::from(from))
            .or_default()
            .insert(direction, to.iter().map(|id| FocusId::from(*id)).collect());
        self
    }

    pub fn build(self) -> AdjacencyTable {
        AdjacencyTable {
            entries: self.entries,
        }
    }
}

// =============================================================================
// Built-in page tables
// =============================================================================

/// Home page: navbar, sidebar toggle, hero actions
pub fn home_table() -> AdjacencyTable {
    use NavDirection::*;

    AdjacencyTable::builder()
        .link("sidebar-toggle-0", Right, &["nav-home-0"])
        .link("sidebar-toggle-0", Down, &["hero-play-0", "home-0-0"])
        .link("nav-home-0", Left, &["sidebar-toggle-0"])
        .link("nav-home-0", Right, &["nav-watchlist-0", "nav-import-0"])
        .link("nav-home-0", Down, &["hero-play-0", "home-0-0"])
        .link("nav-watchlist-0", Left, &["nav-home-0"])
        .link("nav-watchlist-0", Right, &["nav-import-0"])
        .link("nav-watchlist-0", Down, &["hero-watchlist-0", "hero-play-0", "home-0-0"])
        .link("nav-import-0", Left, &["nav-watchlist-0", "nav-home-0"])
        .link("nav-import-0", Down, &["hero-watchlist-0", "hero-play-0", "home-0-0"])
        .link("hero-play-0", Left, &["sidebar-toggle-0"])
        .link("hero-play-0", Right, &["hero-info-0", "hero-watchlist-0"])
        .link("hero-play-0", Up, &["nav-home-0", "sidebar-toggle-0"])
        .link("hero-play-0", Down, &["home-0-0"])
        .link("hero-info-0", Left, &["hero-play-0"])
        .link("hero-info-0", Right, &["hero-watchlist-0"])
        .link("hero-info-0", Up, &["nav-home-0"])
        .link("hero-info-0", Down, &["home-0-0"])
        .link("hero-watchlist-0", Left, &["hero-info-0", "hero-play-0"])
        .link("hero-watchlist-0", Up, &["nav-watchlist-0", "nav-home-0"])
        .link("hero-watchlist-0", Down, &["home-0-0"])
        .build()
}

/// Detail page: back / play / watchlist buttons above the episode grid
pub fn detail_table() -> AdjacencyTable {
    use NavDirection::*;

    AdjacencyTable::builder()
        .link("nav-home-0", Right, &["nav-watchlist-0"])
        .link("nav-home-0", Down, &["detail-back-0"])
        .link("nav-watchlist-0", Left, &["nav-home-0"])
        .link("nav-watchlist-0", Down, &["detail-back-0"])
        .link("detail-back-0", Up, &["nav-home-0"])
        .link("detail-back-0", Right, &["detail-play-0", "detail-watchlist-0"])
        .link("detail-back-0", Down, &["detail-play-0", "episodes-0-0"])
        .link("detail-play-0", Left, &["detail-back-0"])
        .link("detail-play-0", Right, &["detail-watchlist-0"])
        .link("detail-play-0", Up, &["detail-back-0"])
        .link("detail-play-0", Down, &["episodes-0-0"])
        .link("detail-watchlist-0", Left, &["detail-play-0", "detail-back-0"])
        .link("detail-watchlist-0", Up, &["detail-back-0"])
        .link("detail-watchlist-0", Down, &["episodes-0-0"])
        .build()
}

/// Watchlist page: only the navbar sits above the grid
pub fn watchlist_table() -> AdjacencyTable {
    use NavDirection::*;

    AdjacencyTable::builder()
        .link("nav-home-0", Right, &["nav-watchlist-0"])
        .link("nav-home-0", Down, &["watchlist-0-0"])
        .link("nav-watchlist-0", Left, &["nav-home-0"])
        .link("nav-watchlist-0", Down, &["watchlist-0-0"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_in_order() {
        let table = home_table();
        let got: Vec<&str> = table
            .candidates(&"hero-play-0".into(), NavDirection::Right)
            .iter()
            .map(FocusId::as_str)
            .collect();
        assert_eq!(got, vec!["hero-info-0", "hero-watchlist-0"]);
    }

    #[test]
    fn test_missing_entry_is_empty() {
        let table = home_table();
        assert!(table.candidates(&"home-0-0".into(), NavDirection::Up).is_empty());
        assert!(table.candidates(&"hero-info-0".into(), NavDirection::Right).len() == 1);
        assert!(!table.contains(&"home-0-0".into()));
    }

    #[test]
    fn test_tables_exclude_grid_tiles() {
        for table in [home_table(), detail_table(), watchlist_table()] {
            for id in table.ids() {
                assert!(
                    crate::ui::focus::pure::GridCoord::parse(id).is_none(),
                    "{id} looks like a grid tile"
                );
            }
        }
    }

    #[test]
    fn test_table_serializes_as_map() {
        let table = AdjacencyTable::builder()
            .link("a", NavDirection::Down, &["b", "c"])
            .build();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"a":{"down":["b","c"]}}"#);
    }
}
