use std::collections::BTreeSet;

use eframe::egui::{
    self,
    Ui,
};
use egui_flex::{
    item,
    Flex,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};

/// One toggle pill per interest across the loaded mentors.
pub fn chip_bar(
    ui: &mut Ui,
    theme: &Theme,
    universe: &[String],
    selected: &BTreeSet<String>,
    actions: &mut ActionQueue,
) {
    if universe.is_empty() {
        return;
    }

    Flex::horizontal().wrap(true).show(ui, |flex| {
        for label in universe {
            flex.add_ui(item(), |ui| {
                let active = selected.contains(label);
                let (fill, text) = if active {
                    (theme.gold_soft(ui.ctx()), theme.gold(ui.ctx()))
                } else {
                    (ui.visuals().widgets.inactive.bg_fill, ui.visuals().text_color())
                };

                let chip = egui::Button::new(egui::RichText::new(label).size(12.0).color(text))
                    .fill(fill)
                    .stroke(ui.visuals().widgets.inactive.bg_stroke)
                    .corner_radius(12.0);

                let hint = if active { "Remove filter" } else { "Filter" };
                if ui.add(chip).on_hover_text(hint).clicked() {
                    actions.push(UiAction::ToggleChip(label.clone()));
                }
            });
        }
    });
}
