//! Home page: hero banner and one poster row per media kind

use crate::app::app::{Cinegrid, UiAction};
use crate::app::focus::HOME_SECTION;
use crate::catalog::pure::{episodes_for, has_genre, home_rows};
use crate::catalog::{CatalogItem, Episode};
use crate::ui::components::{chrome_button, poster_tile, TileContent};
use crate::ui::focus::pure::grid_id;
use crate::ui::{theme, FocusId, MenuPage};
use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl Cinegrid {
    pub fn display_page_home(&mut self, ui: &mut Ui) {
        if self.catalog.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("The catalog is empty. Import one from the navbar.").weak());
            });
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("home_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.display_hero(ui);
                ui.add_space(16.0);
                self.display_home_rows(ui);
            });
    }

    fn display_hero(&mut self, ui: &mut Ui) {
        let Some(hero) = self
            .hero_id
            .as_deref()
            .and_then(|id| self.catalog.item(id))
            .cloned()
        else {
            return;
        };
        let in_list = self.watchlist.contains(&hero.id);

        theme::hero_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(hero.kind.label()).small().color(theme::ACCENT));
            ui.heading(RichText::new(&hero.title).size(28.0).color(theme::TEXT_PRIMARY));
            if let Some(year) = hero.year {
                ui.label(RichText::new(year.to_string()).color(theme::TEXT_MUTED));
            }
            ui.add_space(4.0);
            ui.label(RichText::new(&hero.synopsis).color(theme::TEXT_SECONDARY));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let play = FocusId::from("hero-play-0");
                let btn = chrome_button(ui, format!("{} Play", icons::PLAY), false);
                if self.scope.bind(ui, &play, &btn) {
                    self.request(play_action(&hero, &self.catalog.episodes));
                }

                let info = FocusId::from("hero-info-0");
                let btn = chrome_button(ui, format!("{} More info", icons::INFO), false);
                if self.scope.bind(ui, &info, &btn) {
                    self.request(UiAction::Goto(MenuPage::Detail(hero.id.clone())));
                }

                let list = FocusId::from("hero-watchlist-0");
                let label = match in_list {
                    true => format!("{} In my list", icons::CHECK),
                    false => format!("{} My list", icons::PLUS),
                };
                let btn = chrome_button(ui, label, in_list);
                if self.scope.bind(ui, &list, &btn) {
                    self.request(UiAction::ToggleWatchlist(hero.id.clone()));
                }
            });
        });
    }

    fn display_home_rows(&mut self, ui: &mut Ui) {
        let genre = self.genre_filter.clone();
        let items: Vec<CatalogItem> = self
            .catalog
            .items
            .iter()
            .filter(|item| match &genre {
                Some(g) => has_genre(item, g),
                None => true,
            })
            .cloned()
            .collect();

        if items.is_empty() {
            ui.label(RichText::new("Nothing matches this genre.").weak());
            return;
        }

        for (row, catalog_row) in home_rows(&items).into_iter().enumerate() {
            ui.label(
                RichText::new(catalog_row.kind.label())
                    .size(18.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(4.0);

            egui::ScrollArea::horizontal()
                .id_salt(("home_row", row))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for (col, item) in catalog_row.items.iter().enumerate() {
                            let id = grid_id(HOME_SECTION, row, col);
                            let content = TileContent {
                                title: &item.title,
                                subtitle: item.year.map(|y| y.to_string()),
                                poster_url: item.poster_url.as_deref(),
                                badge: self
                                    .watchlist
                                    .contains(&item.id)
                                    .then_some(icons::BOOKMARK_SIMPLE),
                            };
                            let resp = poster_tile(ui, &content);
                            if self.scope.bind_tile(ui, &id, &resp) {
                                self.request(UiAction::Goto(MenuPage::Detail(item.id.clone())));
                            }
                        }
                    });
                });
            ui.add_space(12.0);
        }
    }
}

/// Movies play directly; episodic titles without their own stream open
/// their first episode
pub(crate) fn play_action(item: &CatalogItem, episodes: &[Episode]) -> UiAction {
    let url = item.stream_url.clone().or_else(|| {
        episodes_for(item, episodes)
            .into_iter()
            .find_map(|ep| ep.stream_url.clone())
    });
    UiAction::Play {
        title: item.title.clone(),
        url,
    }
}
