// Per-page focus scope: a navigator bound to the widgets of one page

use crate::ui::focus::operations::{draw_focus_ring_styled, FocusRingStyle, FocusTargets};
use crate::ui::focus::pipelines::handle_input::dispatch_key_events;
use crate::ui::focus::pipelines::navigator::Navigator;
use crate::ui::focus::pure::AdjacencyTable;
use crate::ui::focus::types::{FocusId, KeyOutcome, NavConfig};
use eframe::egui::{self, Align, Response, Ui};

/// What binding a widget did this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Bound {
    clicked: bool,
    scrolled: bool,
}

pub struct FocusScope {
    pub nav: Navigator,
    pub targets: FocusTargets,
}

impl FocusScope {
    pub fn new(table: AdjacencyTable, config: NavConfig) -> Self {
        Self {
            nav: Navigator::new(table, config),
            targets: FocusTargets::new(),
        }
    }

    pub fn handle_raw_input(&mut self, raw_input: &mut egui::RawInput) -> Vec<KeyOutcome> {
        dispatch_key_events(&mut self.nav, &mut self.targets, &mut raw_input.events)
    }

    /// Attach a focus id to a rendered widget.
    ///
    /// Returns true when the widget was clicked, either by the pointer or by
    /// a queued keyboard activation.
    pub fn bind(&mut self, ui: &mut Ui, id: &FocusId, response: &Response) -> bool {
        self.bind_styled(ui, id, response, &FocusRingStyle::default())
    }

    /// [`FocusScope::bind`] for poster tiles
    pub fn bind_tile(&mut self, ui: &mut Ui, id: &FocusId, response: &Response) -> bool {
        self.bind_styled(ui, id, response, &FocusRingStyle::tile())
    }

    fn bind_styled(
        &mut self,
        ui: &mut Ui,
        id: &FocusId,
        response: &Response,
        style: &FocusRingStyle,
    ) -> bool {
        self.bind_outcome(ui, id, response, style).clicked
    }

    fn bind_outcome(
        &mut self,
        ui: &mut Ui,
        id: &FocusId,
        response: &Response,
        style: &FocusRingStyle,
    ) -> Bound {
        let requests = self.targets.register(id, response.rect);

        if requests.scroll_into_view {
            response.scroll_to_me(Some(Align::Center));
        }
        if response.clicked() {
            self.nav.set_focus(id.clone());
        }
        if self.nav.is_focused(id) {
            draw_focus_ring_styled(ui, response.rect, style);
        }

        Bound {
            clicked: response.clicked() || requests.click,
            scrolled: requests.scroll_into_view,
        }
    }

    pub fn is_focused(&self, id: &FocusId) -> bool {
        self.nav.is_focused(id)
    }

    pub fn end_frame(&mut self) {
        self.targets.end_frame();
    }
}
