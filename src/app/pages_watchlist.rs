//! Watchlist page

use crate::app::app::{Cinegrid, UiAction};
use crate::app::focus::{WATCHLIST_COLUMNS, WATCHLIST_SECTION};
use crate::catalog::pure::chunk_rows;
use crate::catalog::CatalogItem;
use crate::ui::components::{poster_tile, TileContent};
use crate::ui::focus::pure::grid_id;
use crate::ui::{theme, MenuPage};
use eframe::egui::{self, RichText, Ui};

impl Cinegrid {
    pub fn display_page_watchlist(&mut self, ui: &mut Ui) {
        let items: Vec<CatalogItem> = self
            .watchlist
            .items(&self.catalog)
            .into_iter()
            .cloned()
            .collect();

        ui.heading(RichText::new("My List").color(theme::TEXT_PRIMARY));
        ui.add_space(8.0);

        if items.is_empty() {
            ui.label(RichText::new("Nothing saved yet. Add titles from their detail page.").weak());
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("watchlist_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (row, chunk) in chunk_rows(&items, WATCHLIST_COLUMNS).into_iter().enumerate() {
                    ui.horizontal(|ui| {
                        for (col, item) in chunk.iter().enumerate() {
                            let id = grid_id(WATCHLIST_SECTION, row, col);
                            let content = TileContent {
                                title: &item.title,
                                subtitle: Some(item.kind.label().to_string()),
                                poster_url: item.poster_url.as_deref(),
                                badge: None,
                            };
                            let resp = poster_tile(ui, &content);
                            if self.scope.bind_tile(ui, &id, &resp) {
                                self.request(UiAction::Goto(MenuPage::Detail(item.id.clone())));
                            }
                        }
                    });
                    ui.add_space(8.0);
                }
            });
    }
}
