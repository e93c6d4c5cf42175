// Main key dispatch entry point
//
// Runs from the raw input hook, before egui sees the frame's events. Keys
// that the navigator consumed are removed so egui's own focus traversal
// does not act on them as well.

use crate::ui::focus::pipelines::navigator::Navigator;
use crate::ui::focus::pure::map_key_to_nav;
use crate::ui::focus::types::{FocusSurface, KeyOutcome, NavInput};
use eframe::egui::{self, Key, Modifiers};

/// Process one mapped navigation input
pub fn handle_nav_input<S: FocusSurface + ?Sized>(
    nav: &mut Navigator,
    surface: &mut S,
    input: NavInput,
) -> KeyOutcome {
    match input {
        NavInput::Direction(direction) => match nav.navigate(surface, direction) {
            Some(id) => KeyOutcome::Moved(id),
            None => KeyOutcome::Absorbed,
        },
        NavInput::Activate => match nav.activate(surface) {
            Some(id) => KeyOutcome::Activated(id),
            None => KeyOutcome::Absorbed,
        },
    }
}

/// Process a single key press
pub fn handle_key<S: FocusSurface + ?Sized>(
    nav: &mut Navigator,
    surface: &mut S,
    key: Key,
) -> KeyOutcome {
    match map_key_to_nav(key) {
        Some(input) => handle_nav_input(nav, surface, input),
        None => KeyOutcome::Ignored,
    }
}

/// Feed a frame's events through the navigator, dropping consumed key presses.
///
/// Keys held with a command modifier are left alone so shortcuts keep working.
pub fn dispatch_key_events<S: FocusSurface + ?Sized>(
    nav: &mut Navigator,
    surface: &mut S,
    events: &mut Vec<egui::Event>,
) -> Vec<KeyOutcome> {
    let mut outcomes = Vec::new();
    let mut swallow_space_text = false;

    events.retain(|event| match event {
        egui::Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } if !has_command_modifier(modifiers) => {
            let outcome = handle_key(nav, surface, *key);
            let consumed = outcome.consumed();
            if consumed && *key == Key::Space {
                swallow_space_text = true;
            }
            if outcome != KeyOutcome::Ignored {
                outcomes.push(outcome);
            }
            !consumed
        }
        // Space also arrives as text input
        egui::Event::Text(text) if swallow_space_text && text == " " => {
            swallow_space_text = false;
            false
        }
        _ => true,
    });

    outcomes
}

fn has_command_modifier(modifiers: &Modifiers) -> bool {
    modifiers.ctrl || modifiers.alt || modifiers.command || modifiers.mac_cmd
}
