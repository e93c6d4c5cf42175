//! Helper methods for Cinegrid

use super::{pick_hero, Cinegrid, UiAction};
use crate::app::focus::scope_for_page;
use crate::catalog::pure::genre_counts;
use crate::catalog::{import_catalog, save_watchlist};
use crate::config::save_cfg;
use crate::ui::MenuPage;
use eframe::egui;
use rfd::FileDialog;

impl Cinegrid {
    pub fn request(&mut self, action: UiAction) {
        self.pending.push(action);
    }

    /// Apply everything the pages asked for during this frame
    pub(crate) fn apply_pending(&mut self, ctx: &egui::Context) {
        for action in std::mem::take(&mut self.pending) {
            self.apply(ctx, action);
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: UiAction) {
        match action {
            UiAction::Goto(page) => self.goto(page),
            UiAction::Back => {
                if self.cur_page != MenuPage::Home {
                    self.goto(MenuPage::Home);
                }
            }
            UiAction::Play { title, url } => match url {
                Some(url) => {
                    tracing::info!(%title, %url, "opening stream");
                    self.infotext = format!("Playing {title}");
                    ctx.open_url(egui::OpenUrl::new_tab(url));
                }
                None => {
                    self.infotext = format!("No stream available for {title}");
                }
            },
            UiAction::ToggleWatchlist(id) => self.toggle_watchlist(&id),
            UiAction::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                self.options.sidebar_open = self.sidebar_open;
                if let Err(e) = save_cfg(&self.options) {
                    tracing::warn!(error = %e, "failed to persist settings");
                }
            }
            UiAction::SetGenre(genre) => {
                self.genre_filter = genre;
                // Row contents changed under the grid; start over from the hero
                self.remount();
            }
            UiAction::ImportCatalog => self.import_catalog_dialog(),
        }
    }

    /// Switch page and mount a fresh focus scope for it
    pub fn goto(&mut self, page: MenuPage) {
        tracing::debug!(from = ?self.cur_page, to = ?page, "page change");
        self.cur_page = page;
        self.remount();
    }

    fn remount(&mut self) {
        self.scope = scope_for_page(&self.cur_page, self.options.nav);
    }

    pub fn toggle_watchlist(&mut self, id: &str) {
        let title = self
            .catalog
            .item(id)
            .map(|item| item.title.clone())
            .unwrap_or_else(|| id.to_string());

        let added = self.watchlist.toggle(id);
        self.infotext = if added {
            format!("Added {title} to your list")
        } else {
            format!("Removed {title} from your list")
        };

        if let Err(e) = save_watchlist(&self.watchlist) {
            tracing::error!(error = %e, "failed to save watchlist");
            self.infotext = format!("Could not save watchlist: {e}");
        }
    }

    fn import_catalog_dialog(&mut self) {
        let Some(path) = FileDialog::new()
            .set_title("Import catalog")
            .add_filter("Catalog", &["yaml", "yml"])
            .pick_file()
        else {
            return;
        };

        match import_catalog(&path) {
            Ok(catalog) => {
                self.infotext = format!("Imported {} titles", catalog.items.len());
                self.hero_id = pick_hero(&catalog, self.options.shuffle_hero);
                self.catalog = catalog;
                self.genre_filter = None;
                self.goto(MenuPage::Home);
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "catalog import failed");
                self.infotext = format!("Import failed: {e}");
            }
        }
    }

    /// Genres across the catalog, sorted, with item counts
    pub fn genre_counts(&self) -> Vec<(String, usize)> {
        genre_counts(&self.catalog.items)
    }
}
