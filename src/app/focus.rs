// Per-page focus scopes
//
// Every page mount gets a fresh scope, so focus resets when the page changes.

use crate::config::NavBounds;
use crate::ui::focus::pure::{detail_table, home_table, watchlist_table};
use crate::ui::{FocusScope, MenuPage, NavConfig};

pub const HOME_SECTION: &str = "home";
pub const EPISODES_SECTION: &str = "episodes";
pub const WATCHLIST_SECTION: &str = "watchlist";

/// Tiles per watchlist row
pub const WATCHLIST_COLUMNS: usize = 6;

pub fn nav_config_for(page: &MenuPage, bounds: NavBounds) -> NavConfig {
    let config = match page {
        MenuPage::Home => NavConfig::for_section(HOME_SECTION)
            .with_left_fallback(["hero-play-0", "sidebar-toggle-0"])
            .with_up_fallback(["hero-play-0", "nav-home-0"])
            .with_default_focus("hero-play-0"),
        MenuPage::Detail(_) => NavConfig::for_section(EPISODES_SECTION)
            .with_left_fallback(["detail-play-0", "detail-back-0"])
            .with_up_fallback(["detail-play-0", "detail-back-0"])
            .with_default_focus("detail-play-0"),
        MenuPage::Watchlist => NavConfig::for_section(WATCHLIST_SECTION)
            .with_left_fallback(["nav-home-0"])
            .with_up_fallback(["nav-watchlist-0", "nav-home-0"])
            .with_default_focus("watchlist-0-0"),
    };
    bounds.apply(config)
}

pub fn scope_for_page(page: &MenuPage, bounds: NavBounds) -> FocusScope {
    let table = match page {
        MenuPage::Home => home_table(),
        MenuPage::Detail(_) => detail_table(),
        MenuPage::Watchlist => watchlist_table(),
    };
    FocusScope::new(table, nav_config_for(page, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::pure::GridCoord;

    #[test]
    fn test_home_defaults_match_grid_conventions() {
        let config = nav_config_for(&MenuPage::Home, NavBounds::default());
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_bounds_are_applied() {
        let bounds = NavBounds {
            max_cols: 30,
            max_rows: 4,
        };
        let config = nav_config_for(&MenuPage::Watchlist, bounds);
        assert_eq!((config.max_cols, config.max_rows), (30, 4));
        assert_eq!(config.grid_section, WATCHLIST_SECTION);
    }

    #[test]
    fn test_default_focus_in_page_section() {
        let config = nav_config_for(&MenuPage::Watchlist, NavBounds::default());
        let coord = GridCoord::parse(config.default_focus.as_ref().unwrap()).unwrap();
        assert!(coord.in_section(WATCHLIST_SECTION));
    }

    #[test]
    fn test_fresh_scope_per_mount() {
        let page = MenuPage::Detail("salt-lines".into());
        let mut scope = scope_for_page(&page, NavBounds::default());
        scope.nav.set_focus("episodes-0-1".into());

        let remounted = scope_for_page(&page, NavBounds::default());
        assert!(remounted.is_focused(&"detail-play-0".into()));
    }
}
