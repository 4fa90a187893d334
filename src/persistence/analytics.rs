use std::collections::BTreeMap;

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

pub const ANALYTICS_KEY: &str = "mentor_portal_analytics_v1";

pub const VIEWS: &str = "views";
pub const CHIPS: &str = "chips";

/// Local click/view counters. Nothing reads them back inside the portal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Analytics {
    counters: BTreeMap<String, BTreeMap<String, u64>>,
}

impl Analytics {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        read_json(store, ANALYTICS_KEY).unwrap_or_default()
    }

    pub fn count(&self, category: &str, key: &str) -> u64 {
        self.counters.get(category).and_then(|c| c.get(key)).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, category: &str, key: &str) -> u64 {
        let slot = self
            .counters
            .entry(category.to_string())
            .or_default()
            .entry(key.to_string())
            .or_insert(0);
        *slot += 1;
        *slot
    }

    /// Re-reads the stored counters before incrementing so that concurrent
    /// portal windows do not overwrite each other's counts.
    pub fn bump(
        store: &mut dyn KeyValueStore,
        category: &str,
        key: &str,
    ) -> Result<u64, PortalError> {
        let mut analytics = Self::load(store);
        let count = analytics.increment(category, key);
        write_json(store, ANALYTICS_KEY, &analytics)?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_bump_accumulates() {
        let mut store = MemoryStore::new();
        assert_eq!(Analytics::bump(&mut store, CHIPS, "AI").unwrap(), 1);
        assert_eq!(Analytics::bump(&mut store, CHIPS, "AI").unwrap(), 2);
        assert_eq!(Analytics::bump(&mut store, VIEWS, "7").unwrap(), 1);

        let analytics = Analytics::load(&store);
        assert_eq!(analytics.count(CHIPS, "AI"), 2);
        assert_eq!(analytics.count(VIEWS, "7"), 1);
        assert_eq!(analytics.count(VIEWS, "8"), 0);
        assert_eq!(
            store.get(ANALYTICS_KEY).as_deref(),
            Some(r#"{"chips":{"AI":2},"views":{"7":1}}"#)
        );
    }

    #[test]
    fn test_bump_recovers_from_garbage() {
        let mut store = MemoryStore::new();
        store.set(ANALYTICS_KEY, "[1, 2").unwrap();
        assert_eq!(Analytics::bump(&mut store, VIEWS, "1").unwrap(), 1);
    }
}
