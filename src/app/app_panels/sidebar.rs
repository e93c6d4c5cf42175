use crate::app::app::{Cinegrid, UiAction};
use crate::ui::theme;

use eframe::egui::{RichText, Ui};

impl Cinegrid {
    /// Genre filter; mouse driven, outside the keyboard focus graph
    pub fn display_panel_sidebar(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Genres").strong().color(theme::TEXT_PRIMARY));
        ui.separator();

        if ui
            .selectable_label(self.genre_filter.is_none(), "All")
            .clicked()
        {
            self.request(UiAction::SetGenre(None));
        }

        for (genre, count) in self.genre_counts() {
            let selected = self.genre_filter.as_deref() == Some(genre.as_str());
            if ui
                .selectable_label(selected, format!("{genre} ({count})"))
                .clicked()
            {
                self.request(UiAction::SetGenre(Some(genre)));
            }
        }

        ui.add_space(12.0);
        ui.label(
            RichText::new(format!(
                "{} titles · {} episodes",
                self.catalog.items.len(),
                self.catalog.episodes.len()
            ))
            .small()
            .color(theme::TEXT_MUTED),
        );
    }
}
