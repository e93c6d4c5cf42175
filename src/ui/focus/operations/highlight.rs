// Focus ring rendering operations (egui-dependent)

use crate::ui::theme;
use eframe::egui::{Color32, Rect, Stroke, StrokeKind, Ui};

/// Focus ring styling configuration
pub struct FocusRingStyle {
    pub stroke_width: f32,
    pub color: Color32,
    pub corner_radius: f32,
    pub padding: f32,
}

impl Default for FocusRingStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.5,
            color: theme::ACCENT_GLOW,
            corner_radius: 6.0,
            padding: 2.0,
        }
    }
}

impl FocusRingStyle {
    /// Thicker ring for poster tiles, which sit on busy artwork
    pub fn tile() -> Self {
        Self {
            stroke_width: 3.0,
            padding: 3.0,
            ..Default::default()
        }
    }
}

/// Draw a focus ring with custom styling
pub fn draw_focus_ring_styled(ui: &mut Ui, rect: Rect, style: &FocusRingStyle) {
    let expanded = rect.expand(style.padding);
    let corner_radius = style.corner_radius as u8;
    ui.painter().rect_stroke(
        expanded,
        corner_radius,
        Stroke::new(style.stroke_width, style.color),
        StrokeKind::Outside,
    );
}
