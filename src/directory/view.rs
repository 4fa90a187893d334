use std::collections::BTreeSet;

use super::{
    sort::{
        self,
        locale_cmp,
    },
    state::DirectoryState,
};
use crate::{
    core::{
        Availability,
        Mentor,
    },
    persistence::Favorites,
};

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Quick-filter counts over everything except the availability filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityCounts {
    pub all: usize,
    pub available: usize,
    pub limited: usize,
    pub unavailable: usize,
}

impl AvailabilityCounts {
    pub fn add(&mut self, bucket: Availability) {
        self.all += 1;
        match bucket {
            Availability::Available => self.available += 1,
            Availability::Limited => self.limited += 1,
            Availability::Unavailable => self.unavailable += 1,
        }
    }

    pub fn get(&self, bucket: Option<Availability>) -> usize {
        match bucket {
            None => self.all,
            Some(Availability::Available) => self.available,
            Some(Availability::Limited) => self.limited,
            Some(Availability::Unavailable) => self.unavailable,
        }
    }
}

/// One computed frame of the directory: what to show and the numbers around it.
#[derive(Debug, Clone, Default)]
pub struct DirectoryView {
    pub tokens: Vec<String>,
    /// Indices into the mentor list, filtered and sorted, already paginated.
    pub shown: Vec<usize>,
    pub total_matches: usize,
    pub counts: AvailabilityCounts,
}

impl DirectoryView {
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn has_more(&self) -> bool {
        self.total_matches > self.shown.len()
    }

    /// `None` when the load-more control should be hidden.
    pub fn load_more_label(&self) -> Option<String> {
        self.has_more()
            .then(|| format!("Load more ({}/{})", self.shown.len(), self.total_matches))
    }

    pub fn mentors<'a>(&'a self, all: &'a [Mentor]) -> impl Iterator<Item = &'a Mentor> + 'a {
        self.shown.iter().filter_map(move |&idx| all.get(idx))
    }
}

pub fn compute_view(
    mentors: &[Mentor],
    state: &DirectoryState,
    favorites: &Favorites,
    page_size: usize,
) -> DirectoryView {
    let criteria = state.criteria(favorites);
    let mut counts = AvailabilityCounts::default();
    let mut matched: Vec<usize> = Vec::new();

    for (idx, mentor) in mentors.iter().enumerate() {
        if !criteria.matches_ignoring_availability(mentor) {
            continue;
        }
        let bucket = mentor.bucket();
        counts.add(bucket);
        if criteria.availability.accepts(bucket) {
            matched.push(idx);
        }
    }

    matched.sort_by(|&a, &b| sort::compare(&mentors[a], &mentors[b], state.sort));

    let total_matches = matched.len();
    matched.truncate(state.page().saturating_mul(page_size.max(1)));

    DirectoryView { tokens: criteria.tokens, shown: matched, total_matches, counts }
}

/// Every interest label across the list, de-duplicated and sorted.
pub fn interest_universe(mentors: &[Mentor]) -> Vec<String> {
    let unique: BTreeSet<&str> =
        mentors.iter().flat_map(|m| m.interests.iter().map(String::as_str)).collect();
    let mut labels: Vec<String> = unique.into_iter().map(str::to_string).collect();
    labels.sort_by(|a, b| locale_cmp(a, b));
    labels
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::MentorId,
        directory::{
            filter::AvailabilityFilter,
            sort::SortMode,
        },
    };

    fn mentor(id: i64, name: &str, interests: &[&str], availability: &str) -> Mentor {
        Mentor {
            id: MentorId::Number(id),
            name: name.into(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            availability: availability.into(),
            ..Default::default()
        }
    }

    fn two_mentors() -> Vec<Mentor> {
        vec![
            mentor(2, "Bo Park", &["Robotics"], "Limited"),
            mentor(1, "Ann Lee", &["AI"], "Available"),
        ]
    }

    fn many_mentors(n: i64) -> Vec<Mentor> {
        (0..n)
            .map(|i| {
                let availability = ["Available", "Limited", "Unavailable"][(i % 3) as usize];
                let interests: &[&str] = if i % 2 == 0 { &["AI", "Robotics"] } else { &["AI"] };
                mentor(i, &format!("Mentor {i:03}"), interests, availability)
            })
            .collect()
    }

    fn ids(view: &DirectoryView, mentors: &[Mentor]) -> Vec<MentorId> {
        view.mentors(mentors).map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_example_queries() {
        let mentors = two_mentors();
        let favorites = Favorites::default();

        let mut state = DirectoryState::new();
        state.set_query("an");
        let view = compute_view(&mentors, &state, &favorites, DEFAULT_PAGE_SIZE);
        assert_eq!(ids(&view, &mentors), vec![MentorId::Number(1)]);

        let mut state = DirectoryState::new();
        state.set_availability(AvailabilityFilter::from_key("limited"));
        let view = compute_view(&mentors, &state, &favorites, DEFAULT_PAGE_SIZE);
        assert_eq!(ids(&view, &mentors), vec![MentorId::Number(2)]);

        state.clear();
        let view = compute_view(&mentors, &state, &favorites, DEFAULT_PAGE_SIZE);
        let names: Vec<&str> = view.mentors(&mentors).map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ann Lee", "Bo Park"]);
    }

    #[test]
    fn test_counts_ignore_availability_filter() {
        let mentors = many_mentors(30);
        let favorites = Favorites::default();
        let mut state = DirectoryState::new();
        state.toggle_chip("Robotics");
        state.set_availability(AvailabilityFilter::from_key("limited"));

        let view = compute_view(&mentors, &state, &favorites, DEFAULT_PAGE_SIZE);
        assert_eq!(view.counts.all, 15);
        assert_eq!(
            view.counts.all,
            view.counts.available + view.counts.limited + view.counts.unavailable
        );
        assert_eq!(view.total_matches, view.counts.limited);
    }

    #[test]
    fn test_more_chips_never_grow_results() {
        let mentors = many_mentors(20);
        let favorites = Favorites::default();
        let mut state = DirectoryState::new();

        let mut previous = compute_view(&mentors, &state, &favorites, 100).total_matches;
        for chip in ["AI", "Robotics", "Quantum"] {
            state.toggle_chip(chip);
            let current = compute_view(&mentors, &state, &favorites, 100).total_matches;
            assert!(current <= previous);
            previous = current;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_unknown_chip_yields_empty_result() {
        let mentors = two_mentors();
        let mut state = DirectoryState::new();
        state.toggle_chip("Quantum Computing");
        let view = compute_view(&mentors, &state, &Favorites::default(), DEFAULT_PAGE_SIZE);
        assert!(view.is_empty());
        assert_eq!(view.load_more_label(), None);
    }

    #[test]
    fn test_favorites_only_restricts_and_restores() {
        let mentors = many_mentors(10);
        let favorites: Favorites = [MentorId::Number(3), MentorId::Number(7)].into_iter().collect();
        let mut state = DirectoryState::new();
        state.set_query("mentor");

        let before = compute_view(&mentors, &state, &favorites, 100);

        state.toggle_favorites_only();
        let only = compute_view(&mentors, &state, &favorites, 100);
        assert_eq!(ids(&only, &mentors), vec![MentorId::Number(3), MentorId::Number(7)]);

        state.toggle_favorites_only();
        let after = compute_view(&mentors, &state, &favorites, 100);
        assert_eq!(after.shown, before.shown);
    }

    #[test]
    fn test_load_more_reveals_one_page_per_click() {
        let mentors = many_mentors(30);
        let favorites = Favorites::default();
        let page_size = 12;
        let mut state = DirectoryState::new();

        for clicks in 0..4 {
            let view = compute_view(&mentors, &state, &favorites, page_size);
            assert_eq!(view.shown.len(), ((clicks + 1) * page_size).min(30));
            state.load_more();
        }

        state.reset_page();
        let view = compute_view(&mentors, &state, &favorites, page_size);
        assert_eq!(view.load_more_label().as_deref(), Some("Load more (12/30)"));
        state.set_page(3);
        let view = compute_view(&mentors, &state, &favorites, page_size);
        assert!(!view.has_more());
        assert_eq!(view.load_more_label(), None);
    }

    #[test]
    fn test_sort_applies_before_pagination() {
        let mentors = many_mentors(5);
        let mut state = DirectoryState::new();
        state.set_sort(SortMode::Availability);
        let view = compute_view(&mentors, &state, &Favorites::default(), 2);
        let names: Vec<&str> = view.mentors(&mentors).map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Mentor 000", "Mentor 003"]);
    }

    #[test]
    fn test_interest_universe_is_sorted_and_unique() {
        let mentors = vec![
            mentor(1, "A", &["robotics", "AI"], ""),
            mentor(2, "B", &["AI", "Embedded"], ""),
        ];
        assert_eq!(interest_universe(&mentors), vec!["AI", "Embedded", "robotics"]);
    }

    #[test]
    fn test_interest_universe_collates_accents() {
        let mentors = vec![mentor(1, "A", &["Zoology", "Économie", "Ethics"], "")];
        assert_eq!(interest_universe(&mentors), vec!["Économie", "Ethics", "Zoology"]);
    }
}
