// Rendered focus targets (egui-dependent)
//
// Widgets register their rect every frame. Key handling runs in the raw
// input hook before the frame is built, so existence is answered from the
// last completed frame.

use crate::ui::focus::types::{FocusId, FocusSurface};
use eframe::egui::Rect;
use std::collections::HashMap;
use std::mem;

/// Requests a widget must act on while it is being rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetRequests {
    /// Scroll the widget to the centre of its scroll area
    pub scroll_into_view: bool,
    /// Treat the widget as clicked this frame
    pub click: bool,
}

/// egui implementation of [`FocusSurface`]
#[derive(Debug, Default)]
pub struct FocusTargets {
    rendered: HashMap<FocusId, Rect>,
    building: HashMap<FocusId, Rect>,
    scroll_request: Option<FocusId>,
    click_request: Option<FocusId>,
}

impl FocusTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` was drawn at `rect` this frame and hand back any
    /// pending requests for it
    pub fn register(&mut self, id: &FocusId, rect: Rect) -> TargetRequests {
        self.building.insert(id.clone(), rect);

        TargetRequests {
            scroll_into_view: take_if(&mut self.scroll_request, id),
            click: take_if(&mut self.click_request, id),
        }
    }

    /// Publish this frame's registrations; ids not drawn this frame vanish
    pub fn end_frame(&mut self) {
        self.rendered = mem::take(&mut self.building);

        // Requests for ids that were not drawn cannot be served anymore
        if let Some(id) = &self.scroll_request
            && !self.rendered.contains_key(id)
        {
            self.scroll_request = None;
        }
        if let Some(id) = &self.click_request
            && !self.rendered.contains_key(id)
        {
            tracing::debug!(target: "cinegrid::focus", %id, "dropping click for vanished target");
            self.click_request = None;
        }
    }

    #[cfg(test)]
    pub fn rect_of(&self, id: &FocusId) -> Option<Rect> {
        self.rendered.get(id).copied()
    }
}

fn take_if(slot: &mut Option<FocusId>, id: &FocusId) -> bool {
    if slot.as_ref() == Some(id) {
        *slot = None;
        true
    } else {
        false
    }
}

impl FocusSurface for FocusTargets {
    fn exists(&self, id: &FocusId) -> bool {
        self.rendered.contains_key(id)
    }

    fn focus(&mut self, id: &FocusId) {
        self.scroll_request = Some(id.clone());
    }

    fn activate(&mut self, id: &FocusId) -> bool {
        if !self.exists(id) {
            return false;
        }
        self.click_request = Some(id.clone());
        true
    }
}
