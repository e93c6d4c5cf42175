// Input mapping from keyboard keys to NavInput

use crate::ui::focus::types::{NavDirection, NavInput};
use eframe::egui::Key;

/// Map a key to a navigation input
pub fn map_key_to_nav(key: Key) -> Option<NavInput> {
    match key {
        // Arrows → Directional navigation
        Key::ArrowUp => Some(NavInput::Direction(NavDirection::Up)),
        Key::ArrowDown => Some(NavInput::Direction(NavDirection::Down)),
        Key::ArrowLeft => Some(NavInput::Direction(NavDirection::Left)),
        Key::ArrowRight => Some(NavInput::Direction(NavDirection::Right)),

        // Click the focused element
        Key::Enter | Key::Space => Some(NavInput::Activate),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_mapping() {
        assert_eq!(
            map_key_to_nav(Key::ArrowUp),
            Some(NavInput::Direction(NavDirection::Up))
        );
        assert_eq!(
            map_key_to_nav(Key::ArrowRight),
            Some(NavInput::Direction(NavDirection::Right))
        );
    }

    #[test]
    fn test_activate_keys() {
        assert_eq!(map_key_to_nav(Key::Enter), Some(NavInput::Activate));
        assert_eq!(map_key_to_nav(Key::Space), Some(NavInput::Activate));
    }

    #[test]
    fn test_non_nav_keys() {
        assert_eq!(map_key_to_nav(Key::Escape), None);
        assert_eq!(map_key_to_nav(Key::Tab), None);
        assert_eq!(map_key_to_nav(Key::A), None);
    }
}
