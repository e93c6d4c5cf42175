use crate::app::app::{Cinegrid, UiAction};
use crate::ui::components::chrome_button;
use crate::ui::{theme, FocusId, MenuPage};

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl Cinegrid {
    pub fn display_panel_top(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            // Sidebar toggle only exists on Home
            if self.cur_page == MenuPage::Home {
                let id = FocusId::from("sidebar-toggle-0");
                let btn = chrome_button(ui, icons::LIST, self.sidebar_open);
                if self.scope.bind(ui, &id, &btn) {
                    self.request(UiAction::ToggleSidebar);
                }
            }

            ui.add_space(4.0);
            ui.label(RichText::new("cinegrid").strong().color(theme::ACCENT));
            ui.add_space(12.0);

            let home = FocusId::from("nav-home-0");
            let btn = chrome_button(
                ui,
                format!("{} Home", icons::HOUSE),
                self.cur_page == MenuPage::Home,
            );
            if self.scope.bind(ui, &home, &btn) {
                self.request(UiAction::Goto(MenuPage::Home));
            }

            let list = FocusId::from("nav-watchlist-0");
            let btn = chrome_button(
                ui,
                format!("{} My List ({})", icons::BOOKMARK_SIMPLE, self.watchlist.len()),
                self.cur_page == MenuPage::Watchlist,
            );
            if self.scope.bind(ui, &list, &btn) {
                self.request(UiAction::Goto(MenuPage::Watchlist));
            }

            if self.cur_page == MenuPage::Home {
                let import = FocusId::from("nav-import-0");
                let btn = chrome_button(ui, format!("{} Import", icons::UPLOAD_SIMPLE), false);
                if self.scope.bind(ui, &import, &btn) {
                    self.request(UiAction::ImportCatalog);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(&self.infotext).small().color(theme::TEXT_SECONDARY));
            });
        });
    }
}
