pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, card_frame, hero_frame, nav_frame, ACCENT, ACCENT_DIM, ACCENT_GLOW, BG_DARK,
    BG_HOVER, BG_LIGHT, BG_MID, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
