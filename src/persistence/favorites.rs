use std::collections::BTreeSet;

use super::{
    read_json,
    write_json,
    KeyValueStore,
};
use crate::core::{
    MentorId,
    PortalError,
};

pub const FAVORITES_KEY: &str = "mentor_portal_favorites_v1";

/// Favorited mentor ids. Stored as a JSON array and never pruned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<MentorId>,
}

impl Favorites {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let ids: Vec<MentorId> = read_json(store, FAVORITES_KEY).unwrap_or_default();
        Self { ids: ids.into_iter().collect() }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), PortalError> {
        let ids: Vec<&MentorId> = self.ids.iter().collect();
        write_json(store, FAVORITES_KEY, &ids)
    }

    pub fn contains(&self, id: &MentorId) -> bool {
        self.ids.contains(id)
    }

    /// Returns whether the id is a favorite afterwards.
    pub fn toggle(&mut self, id: &MentorId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }
}

impl FromIterator<MentorId> for Favorites {
    fn from_iter<I: IntoIterator<Item = MentorId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}
