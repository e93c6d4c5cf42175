//! Detail view - title info, actions, and the episode grid for series/anime

use crate::app::app::{Cinegrid, UiAction};
use crate::app::focus::EPISODES_SECTION;
use crate::app::pages_home::play_action;
use crate::catalog::pure::{episodes_for, seasons};
use crate::catalog::Episode;
use crate::ui::components::{chrome_button, poster_tile, TileContent};
use crate::ui::focus::pure::grid_id;
use crate::ui::{theme, FocusId};
use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl Cinegrid {
    pub fn display_page_detail(&mut self, ui: &mut Ui, item_id: &str) {
        // Extract what we need upfront to avoid borrowing the catalog while binding
        let Some(item) = self.catalog.item(item_id).cloned() else {
            ui.label(RichText::new(format!("'{item_id}' is no longer in the catalog")).weak());
            if ui.button("Back").clicked() {
                self.request(UiAction::Back);
            }
            return;
        };
        let episodes: Vec<Episode> = episodes_for(&item, &self.catalog.episodes)
            .into_iter()
            .cloned()
            .collect();
        let in_list = self.watchlist.contains(&item.id);

        egui::ScrollArea::vertical()
            .id_salt("detail_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let back = FocusId::from("detail-back-0");
                    let btn = chrome_button(ui, format!("{} Back", icons::ARROW_LEFT), false);
                    if self.scope.bind(ui, &back, &btn) {
                        self.request(UiAction::Back);
                    }
                });
                ui.add_space(8.0);

                theme::hero_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.heading(RichText::new(&item.title).size(26.0).color(theme::TEXT_PRIMARY));

                    let mut meta = vec![item.kind.label().to_string()];
                    if let Some(year) = item.year {
                        meta.push(year.to_string());
                    }
                    if !item.genres.is_empty() {
                        meta.push(item.genres.join(", "));
                    }
                    ui.label(RichText::new(meta.join(" · ")).color(theme::TEXT_MUTED));
                    ui.add_space(4.0);
                    ui.label(RichText::new(&item.synopsis).color(theme::TEXT_SECONDARY));
                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        let play = FocusId::from("detail-play-0");
                        let btn = chrome_button(ui, format!("{} Play", icons::PLAY), false);
                        if self.scope.bind(ui, &play, &btn) {
                            self.request(play_action(&item, &self.catalog.episodes));
                        }

                        let list = FocusId::from("detail-watchlist-0");
                        let label = match in_list {
                            true => format!("{} In my list", icons::CHECK),
                            false => format!("{} My list", icons::PLUS),
                        };
                        let btn = chrome_button(ui, label, in_list);
                        if self.scope.bind(ui, &list, &btn) {
                            self.request(UiAction::ToggleWatchlist(item.id.clone()));
                        }
                    });
                });

                if !item.kind.is_episodic() {
                    return;
                }

                ui.add_space(16.0);
                if episodes.is_empty() {
                    ui.label(RichText::new("No episodes uploaded yet.").weak());
                    return;
                }

                let episode_refs: Vec<&Episode> = episodes.iter().collect();
                for (row, (season, season_eps)) in seasons(&episode_refs).into_iter().enumerate() {
                    ui.label(
                        RichText::new(format!("Season {season}"))
                            .size(18.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(4.0);

                    egui::ScrollArea::horizontal()
                        .id_salt(("season_row", row))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                for (col, ep) in season_eps.iter().enumerate() {
                                    let id = grid_id(EPISODES_SECTION, row, col);
                                    let title = match ep.title.is_empty() {
                                        true => format!("Episode {}", ep.number),
                                        false => ep.title.clone(),
                                    };
                                    let content = TileContent {
                                        title: &title,
                                        subtitle: Some(ep.code()),
                                        poster_url: item.poster_url.as_deref(),
                                        badge: None,
                                    };
                                    let resp = poster_tile(ui, &content);
                                    if self.scope.bind_tile(ui, &id, &resp) {
                                        self.request(UiAction::Play {
                                            title: format!("{} {}", item.title, ep.code()),
                                            url: ep.stream_url.clone(),
                                        });
                                    }
                                }
                            });
                        });
                    ui.add_space(12.0);
                }
            });
    }
}
