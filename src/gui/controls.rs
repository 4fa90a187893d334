use eframe::egui::{
    self,
    Frame,
    Margin,
    TextEdit,
    Ui,
};

use super::actions::{
    ActionQueue,
    UiAction,
};
use crate::directory::{
    AvailabilityCounts,
    AvailabilityFilter,
    DirectoryState,
    SortMode,
};

const SEARCH_WIDTH: f32 = 320.0;

/// Search box, sort selector, clear button and the quick filters.
pub fn controls_row(
    ui: &mut Ui,
    state: &DirectoryState,
    counts: &AvailabilityCounts,
    actions: &mut ActionQueue,
) {
    Frame::group(ui.style()).inner_margin(Margin::symmetric(8, 4)).show(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 6.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;

            let mut search = state.query.clone();
            let response = ui.add_sized(
                [SEARCH_WIDTH, ui.spacing().interact_size.y],
                TextEdit::singleline(&mut search)
                    .hint_text("Search by name, role, organization, interests…"),
            );
            if response.changed() {
                actions.push(UiAction::SetQuery(search));
            }

            let mut sort = state.sort;
            egui::ComboBox::from_id_salt("sort_mode")
                .selected_text(format!("Sort: {}", sort.label()))
                .show_ui(ui, |ui| {
                    for mode in SortMode::ALL {
                        ui.selectable_value(&mut sort, mode, mode.label());
                    }
                });
            if sort != state.sort {
                actions.push(UiAction::SetSort(sort));
            }

            if ui.button("Clear").on_hover_text("Reset search and filters").clicked() {
                actions.push(UiAction::Clear);
            }
        });

        ui.horizontal_wrapped(|ui| {
            for option in AvailabilityFilter::OPTIONS {
                let label = format!("{} ({})", option.label(), counts.get(option.bucket()));
                if ui.selectable_label(state.availability == option, label).clicked() {
                    actions.push(UiAction::SetAvailability(option));
                }
            }

            ui.separator();

            if ui.selectable_label(state.favorites_only, "★ Favorites").clicked() {
                actions.push(UiAction::ToggleFavoritesOnly);
            }
        });
    });
}
