use std::collections::BTreeSet;

use super::{
    filter::{
        AvailabilityFilter,
        Criteria,
    },
    search,
    sort::SortMode,
};
use crate::persistence::{
    Favorites,
    SavedFilters,
};

/// The single mutable UI state of the directory. Any filter or sort change
/// resets the page to 1 so the view never lands on an empty page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryState {
    pub query: String,
    pub chips: BTreeSet<String>,
    pub sort: SortMode,
    pub availability: AvailabilityFilter,
    pub favorites_only: bool,
    page: usize,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            chips: BTreeSet::new(),
            sort: SortMode::default(),
            availability: AvailabilityFilter::default(),
            favorites_only: false,
            page: 1,
        }
    }
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    pub fn load_more(&mut self) {
        self.page = self.page().saturating_add(1);
    }

    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        self.reset_page();
        true
    }

    /// Returns whether the chip is selected afterwards.
    pub fn toggle_chip(&mut self, label: &str) -> bool {
        let selected = if self.chips.remove(label) {
            false
        } else {
            self.chips.insert(label.to_string());
            true
        };
        self.reset_page();
        selected
    }

    pub fn set_sort(&mut self, sort: SortMode) -> bool {
        if self.sort == sort {
            return false;
        }
        self.sort = sort;
        self.reset_page();
        true
    }

    pub fn set_availability(&mut self, availability: AvailabilityFilter) {
        self.availability = availability;
        self.reset_page();
    }

    pub fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
        self.reset_page();
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn tokens(&self) -> Vec<String> {
        search::tokenize(&self.query)
    }

    /// True when the state differs from the defaults in any field that the
    /// share link carries.
    pub fn has_filters(&self) -> bool {
        !self.query.is_empty()
            || !self.chips.is_empty()
            || self.sort != SortMode::default()
            || self.availability != AvailabilityFilter::default()
            || self.favorites_only
            || self.page() != 1
    }

    /// Drops chips that name no interest in the loaded mentor list.
    pub fn retain_known_chips<'a>(&mut self, universe: impl IntoIterator<Item = &'a str>) {
        let known: BTreeSet<&str> = universe.into_iter().collect();
        let before = self.chips.len();
        self.chips.retain(|chip| known.contains(chip.as_str()));
        if self.chips.len() != before {
            tracing::debug!("Dropped {} unknown chip(s)", before - self.chips.len());
        }
    }

    pub fn criteria<'a>(&'a self, favorites: &'a Favorites) -> Criteria<'a> {
        Criteria {
            tokens: self.tokens(),
            chips: &self.chips,
            availability: self.availability,
            favorites_only: self.favorites_only,
            favorites,
        }
    }

    pub fn to_saved(&self) -> SavedFilters {
        SavedFilters {
            q: self.query.clone(),
            chips: self.chips.iter().cloned().collect(),
            sort: self.sort.as_key().to_string(),
            avail: self.availability.as_key().to_string(),
            fav_only: self.favorites_only,
        }
    }

    pub fn from_saved(saved: &SavedFilters) -> Self {
        Self {
            query: saved.q.clone(),
            chips: saved.chips.iter().filter(|c| !c.is_empty()).cloned().collect(),
            sort: SortMode::from_key(&saved.sort),
            availability: AvailabilityFilter::from_key(&saved.avail),
            favorites_only: saved.fav_only,
            page: 1,
        }
    }
}
