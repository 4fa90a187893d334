use serde::{
    Deserialize,
    Serialize,
};

use super::{
    read_json,
    write_json,
    KeyValueStore,
};
use crate::core::PortalError;

pub const STATE_KEY: &str = "mentor_portal_state_v2";

/// Last-used filters as stored locally. Same fields as the share link minus
/// the page, which always restarts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavedFilters {
    pub q: String,
    pub chips: Vec<String>,
    pub sort: String,
    pub avail: String,
    pub fav_only: bool,
}

impl Default for SavedFilters {
    fn default() -> Self {
        Self {
            q: String::new(),
            chips: Vec::new(),
            sort: "name".to_string(),
            avail: "all".to_string(),
            fav_only: false,
        }
    }
}

impl SavedFilters {
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        read_json(store, STATE_KEY)
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), PortalError> {
        write_json(store, STATE_KEY, self)
    }
}
