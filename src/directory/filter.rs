use std::collections::BTreeSet;

use super::search;
use crate::{
    core::{
        Availability,
        Mentor,
    },
    persistence::Favorites,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Only(Availability),
}

impl AvailabilityFilter {
    pub const OPTIONS: [AvailabilityFilter; 4] = [
        AvailabilityFilter::All,
        AvailabilityFilter::Only(Availability::Available),
        AvailabilityFilter::Only(Availability::Limited),
        AvailabilityFilter::Only(Availability::Unavailable),
    ];

    pub fn as_key(self) -> &'static str {
        match self {
            AvailabilityFilter::All => "all",
            AvailabilityFilter::Only(bucket) => bucket.as_key(),
        }
    }

    /// Unknown keys fall back to `All`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "available" => AvailabilityFilter::Only(Availability::Available),
            "limited" => AvailabilityFilter::Only(Availability::Limited),
            "unavailable" => AvailabilityFilter::Only(Availability::Unavailable),
            _ => AvailabilityFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AvailabilityFilter::All => "All",
            AvailabilityFilter::Only(bucket) => bucket.label(),
        }
    }

    pub fn bucket(self) -> Option<Availability> {
        match self {
            AvailabilityFilter::All => None,
            AvailabilityFilter::Only(bucket) => Some(bucket),
        }
    }

    pub fn accepts(self, bucket: Availability) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Only(wanted) => wanted == bucket,
        }
    }
}

/// Everything a mentor is tested against, borrowed from the current state.
pub struct Criteria<'a> {
    pub tokens: Vec<String>,
    pub chips: &'a BTreeSet<String>,
    pub availability: AvailabilityFilter,
    pub favorites_only: bool,
    pub favorites: &'a Favorites,
}

impl Criteria<'_> {
    pub fn matches(&self, mentor: &Mentor) -> bool {
        self.availability.accepts(mentor.bucket()) && self.matches_ignoring_availability(mentor)
    }

    /// The base filter the availability counts are computed against.
    pub fn matches_ignoring_availability(&self, mentor: &Mentor) -> bool {
        search::matches_tokens(mentor, &self.tokens)
            && matches_chips(mentor, self.chips)
            && (!self.favorites_only || self.favorites.contains(&mentor.id))
    }
}

pub fn matches_chips(mentor: &Mentor, chips: &BTreeSet<String>) -> bool {
    chips.iter().all(|chip| mentor.interests.iter().any(|interest| interest == chip))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("all", AvailabilityFilter::All)]
    #[case("available", AvailabilityFilter::Only(Availability::Available))]
    #[case("limited", AvailabilityFilter::Only(Availability::Limited))]
    #[case("unavailable", AvailabilityFilter::Only(Availability::Unavailable))]
    fn test_filter_keys_roundtrip(#[case] key: &str, #[case] filter: AvailabilityFilter) {
        assert_eq!(AvailabilityFilter::from_key(key), filter);
        assert_eq!(filter.as_key(), key);
    }

    #[test]
    fn test_unknown_filter_key_is_all() {
        assert_eq!(AvailabilityFilter::from_key("Available"), AvailabilityFilter::All);
        assert_eq!(AvailabilityFilter::from_key(""), AvailabilityFilter::All);
    }

    #[test]
    fn test_chips_use_and_semantics() {
        let mentor = Mentor {
            interests: vec!["AI".into(), "Robotics".into()],
            ..Default::default()
        };
        let mut chips = BTreeSet::new();
        assert!(matches_chips(&mentor, &chips));
        chips.insert("AI".to_string());
        assert!(matches_chips(&mentor, &chips));
        chips.insert("Robotics".to_string());
        assert!(matches_chips(&mentor, &chips));
        chips.insert("ai".to_string());
        assert!(!matches_chips(&mentor, &chips));
    }
}
