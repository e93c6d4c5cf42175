//! eframe::App implementation for Cinegrid

use super::{Cinegrid, UiAction};
use crate::ui::focus::KeyOutcome;
use crate::ui::{theme, MenuPage};
use eframe::egui;

impl eframe::App for Cinegrid {
    fn raw_input_hook(&mut self, _ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        if !raw_input.focused {
            return;
        }
        for outcome in self.scope.handle_raw_input(raw_input) {
            if let KeyOutcome::Activated(id) = &outcome {
                tracing::debug!(target: "cinegrid::focus", %id, "activate");
            }
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::background())
            .rect_filled(screen_rect, 0.0, theme::BG_DARK);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Backspace)) {
            self.request(UiAction::Back);
        }

        egui::TopBottomPanel::top("menu_nav_panel")
            .frame(theme::nav_frame())
            .show(ctx, |ui| {
                self.display_panel_top(ui);
            });

        if self.sidebar_open && self.cur_page == MenuPage::Home {
            egui::SidePanel::left("genre_panel")
                .resizable(false)
                .exact_width(180.0)
                .frame(
                    egui::Frame::NONE
                        .fill(theme::BG_MID)
                        .inner_margin(egui::Margin::same(8)),
                )
                .show(ctx, |ui| {
                    self.display_panel_sidebar(ui);
                });
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_DARK)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| match self.cur_page.clone() {
                MenuPage::Home => self.display_page_home(ui),
                MenuPage::Detail(id) => self.display_page_detail(ui, &id),
                MenuPage::Watchlist => self.display_page_watchlist(ui),
            });

        self.scope.end_frame();
        self.apply_pending(ctx);
    }
}
