//! Color palette and frame helpers

use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, Stroke};

// Backgrounds
pub const BG_DARK: Color32 = Color32::from_rgb(12, 13, 18);
pub const BG_MID: Color32 = Color32::from_rgb(20, 22, 30);
pub const BG_LIGHT: Color32 = Color32::from_rgb(34, 37, 50);
pub const BG_HOVER: Color32 = Color32::from_rgb(44, 48, 64);

// Accents
pub const ACCENT: Color32 = Color32::from_rgb(229, 72, 77);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(140, 44, 48);
pub const ACCENT_GLOW: Color32 = Color32::from_rgb(255, 214, 102);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 238, 244);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(176, 182, 198);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(112, 118, 136);

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_MID;
    visuals.window_fill = BG_MID;
    visuals.extreme_bg_color = BG_DARK;
    visuals.selection.bg_fill = ACCENT_DIM;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.hyperlink_color = ACCENT_GLOW;

    visuals.widgets.inactive.weak_bg_fill = BG_LIGHT;
    visuals.widgets.inactive.corner_radius = CornerRadius::same(6);
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;
    visuals.widgets.hovered.corner_radius = CornerRadius::same(6);
    visuals.widgets.active.weak_bg_fill = ACCENT_DIM;
    visuals.widgets.active.corner_radius = CornerRadius::same(6);

    ctx.set_visuals(visuals);

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

/// Frame for poster tiles and info cards
pub fn card_frame() -> Frame {
    Frame::NONE
        .fill(BG_LIGHT)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(6))
}

/// Frame for the hero banner
pub fn hero_frame() -> Frame {
    Frame::NONE
        .fill(BG_DARK)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(16))
        .stroke(Stroke::new(1.0, BG_LIGHT))
}

pub fn nav_frame() -> Frame {
    Frame::NONE
        .fill(BG_MID)
        .inner_margin(Margin::symmetric(8, 4))
}
