//! Poster tiles for the catalog grids

use crate::ui::theme;
use eframe::egui::{self, Align2, FontId, RichText, Sense, Vec2};

pub const TILE_SIZE: Vec2 = Vec2::new(132.0, 196.0);
const POSTER_SIZE: Vec2 = Vec2::new(120.0, 150.0);

/// Content of one tile
pub struct TileContent<'a> {
    pub title: &'a str,
    pub subtitle: Option<String>,
    pub poster_url: Option<&'a str>,
    /// Small badge in the poster corner, e.g. a watchlist marker
    pub badge: Option<&'a str>,
}

/// Render a clickable poster tile and return its response
pub fn poster_tile(ui: &mut egui::Ui, content: &TileContent<'_>) -> egui::Response {
    let inner = theme::card_frame().show(ui, |ui| {
        ui.set_width(TILE_SIZE.x - 12.0);
        ui.set_height(TILE_SIZE.y - 12.0);
        ui.vertical(|ui| {
            match content.poster_url {
                Some(url) => {
                    ui.add(
                        egui::Image::new(url)
                            .fit_to_exact_size(POSTER_SIZE)
                            .corner_radius(egui::CornerRadius::same(6)),
                    );
                }
                None => poster_placeholder(ui, content.title),
            }
            ui.add_space(4.0);
            ui.add(
                egui::Label::new(RichText::new(content.title).color(theme::TEXT_PRIMARY).strong())
                    .truncate(),
            );
            if let Some(subtitle) = &content.subtitle {
                ui.label(RichText::new(subtitle).small().color(theme::TEXT_MUTED));
            }
        });
    });

    let response = inner.response.interact(Sense::click());

    if let Some(badge) = content.badge {
        ui.painter().text(
            response.rect.right_top() + egui::vec2(-10.0, 10.0),
            Align2::RIGHT_TOP,
            badge,
            FontId::proportional(16.0),
            theme::ACCENT_GLOW,
        );
    }
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response
}

/// Painted stand-in when a title has no artwork
fn poster_placeholder(ui: &mut egui::Ui, title: &str) {
    let (rect, _) = ui.allocate_exact_size(POSTER_SIZE, Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(6), theme::BG_HOVER);

    let initial = title
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initial,
        FontId::proportional(48.0),
        theme::TEXT_MUTED,
    );
}

/// Navbar / action button
pub fn chrome_button(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>, selected: bool) -> egui::Response {
    ui.add(
        egui::Button::new(text)
            .min_size(egui::vec2(70.0, 28.0))
            .selected(selected),
    )
}
