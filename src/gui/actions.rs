use eframe::egui;

use crate::{
    core::MentorId,
    directory::{
        AvailabilityFilter,
        SortMode,
    },
};

// A simple ui action queue system so we don't need to pass mutable references to ui functions
#[derive(Debug, Clone)]
pub enum UiAction {
    // Directory State
    SetQuery(String),
    ToggleChip(String),
    SetSort(SortMode),
    SetAvailability(AvailabilityFilter),
    ToggleFavoritesOnly,
    LoadMore,
    Clear,

    // Favorites
    ToggleFavorite(MentorId),

    // Modals
    OpenDetails { index: usize, opener: egui::Id },

    // Global
    OpenRequestForm(Option<String>),
    ExportPrintable,
    OpenMentorsFile,
    CopyShareLink,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
