// Core app structure

mod eframe_impl;
mod helpers;

use super::focus::scope_for_page;
use crate::catalog::pure::featured_pick;
use crate::catalog::{Catalog, Watchlist};
use crate::config::CinegridConfig;
use crate::ui::{FocusScope, MenuPage};

/// Something a page asked for while rendering; applied once the frame is built
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Goto(MenuPage),
    Back,
    Play { title: String, url: Option<String> },
    ToggleWatchlist(String),
    ToggleSidebar,
    SetGenre(Option<String>),
    ImportCatalog,
}

pub struct Cinegrid {
    pub options: CinegridConfig,
    pub cur_page: MenuPage,
    pub infotext: String,

    pub catalog: Catalog,
    pub watchlist: Watchlist,
    pub hero_id: Option<String>,
    pub genre_filter: Option<String>,
    pub sidebar_open: bool,

    // Keyboard focus for the mounted page
    pub scope: FocusScope,
    pub pending: Vec<UiAction>,
}

impl Cinegrid {
    pub fn new(options: CinegridConfig, catalog: Catalog, watchlist: Watchlist) -> Self {
        let cur_page = MenuPage::Home;
        let scope = scope_for_page(&cur_page, options.nav);
        let hero_id = pick_hero(&catalog, options.shuffle_hero);
        let sidebar_open = options.sidebar_open;

        Self {
            options,
            cur_page,
            infotext: String::new(),
            catalog,
            watchlist,
            hero_id,
            genre_filter: None,
            sidebar_open,
            scope,
            pending: Vec::new(),
        }
    }
}

pub(crate) fn pick_hero(catalog: &Catalog, shuffle: bool) -> Option<String> {
    let seed = if shuffle { fastrand::usize(..) } else { 0 };
    featured_pick(&catalog.items, seed).map(|item| item.id.clone())
}
