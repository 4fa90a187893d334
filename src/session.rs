//! The directory as one unit: loaded mentors, the mutable state, favorites
//! and the store they are persisted to. Every mutation is followed by
//! [`DirectorySession::refresh`], which recomputes the view and its cards,
//! rewrites the share link and saves the filters.

use std::path::Path;

use crate::{
    core::{
        mentors,
        Mentor,
        MentorId,
        PortalError,
    },
    directory::{
        build_card,
        compute_view,
        interest_universe,
        AvailabilityFilter,
        DirectoryState,
        DirectoryView,
        Location,
        MentorCard,
        MentorDetails,
        SortMode,
    },
    export,
    persistence::{
        analytics::{
            self,
            Analytics,
        },
        Favorites,
        KeyValueStore,
    },
    settings::Settings,
};

pub struct DirectorySession {
    mentors: Vec<Mentor>,
    universe: Vec<String>,
    state: DirectoryState,
    favorites: Favorites,
    store: Box<dyn KeyValueStore>,
    location: Location,
    page_size: usize,
    request_form: Option<String>,
    view: DirectoryView,
    /// One card per entry of `view.shown`, in the same order.
    cards: Vec<MentorCard>,
}

impl DirectorySession {
    /// `state` should already be seeded from the share link or saved filters.
    pub fn new(
        mentors: Vec<Mentor>,
        mut state: DirectoryState,
        store: Box<dyn KeyValueStore>,
        location: Location,
        settings: &Settings,
    ) -> Self {
        let universe = interest_universe(&mentors);
        state.retain_known_chips(universe.iter().map(String::as_str));
        let favorites = Favorites::load(store.as_ref());

        let mut session = Self {
            mentors,
            universe,
            state,
            favorites,
            store,
            location,
            page_size: settings.page_size.max(1),
            request_form: settings.request_form_url.clone(),
            view: DirectoryView::default(),
            cards: Vec::new(),
        };
        session.refresh();
        session
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    pub fn cards(&self) -> &[MentorCard] {
        &self.cards
    }

    pub fn share_link(&self) -> String {
        self.location.to_string()
    }

    pub fn request_form(&self) -> Option<&str> {
        self.request_form.as_deref()
    }

    pub fn refresh(&mut self) {
        self.view = compute_view(&self.mentors, &self.state, &self.favorites, self.page_size);
        self.cards = self
            .view
            .mentors(&self.mentors)
            .map(|mentor| build_card(mentor, &self.view.tokens, &self.favorites))
            .collect();
        self.location.replace_state(&self.state);
        if let Err(e) = self.state.to_saved().save(self.store.as_mut()) {
            tracing::warn!("Failed to save filters: {e}");
        }
        tracing::debug!(
            "Showing {} of {} matches (page {})",
            self.view.shown.len(),
            self.view.total_matches,
            self.state.page()
        );
    }

    pub fn set_query(&mut self, query: &str) {
        if self.state.set_query(query) {
            self.refresh();
        }
    }

    pub fn toggle_chip(&mut self, label: &str) {
        let selected = self.state.toggle_chip(label);
        tracing::debug!("Chip {label:?} selected: {selected}");
        self.bump(analytics::CHIPS, label);
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        if self.state.set_sort(sort) {
            self.refresh();
        }
    }

    pub fn set_availability(&mut self, availability: AvailabilityFilter) {
        self.state.set_availability(availability);
        self.refresh();
    }

    pub fn toggle_favorites_only(&mut self) {
        self.state.toggle_favorites_only();
        self.refresh();
    }

    pub fn load_more(&mut self) {
        self.state.load_more();
        self.refresh();
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.refresh();
    }

    pub fn toggle_favorite(&mut self, id: &MentorId) {
        let favorite = self.favorites.toggle(id);
        tracing::debug!("Mentor {id} favorite: {favorite}");
        if let Err(e) = self.favorites.save(self.store.as_mut()) {
            tracing::warn!("Failed to save favorites: {e}");
        }
        self.state.reset_page();
        self.refresh();
    }

    /// Dialog fields for the mentor at `index`, counting the view.
    pub fn open_details(&mut self, index: usize) -> Option<MentorDetails> {
        let details = MentorDetails::new(self.mentors.get(index)?, self.request_form());
        self.bump(analytics::VIEWS, &details.id.to_string());
        Some(details)
    }

    /// Swaps in a new mentor list; chips that no longer exist are dropped.
    pub fn replace_mentors(&mut self, mentors: Vec<Mentor>) {
        self.universe = interest_universe(&mentors);
        self.mentors = mentors;
        self.state.retain_known_chips(self.universe.iter().map(String::as_str));
        self.state.reset_page();
        self.refresh();
    }

    pub fn load_mentors_file(&mut self, path: &Path) -> Result<usize, PortalError> {
        let mentors = mentors::read_mentors_file(path)?;
        let count = mentors.len();
        tracing::info!("Loaded {count} mentors from {}", path.display());
        self.replace_mentors(mentors);
        Ok(count)
    }

    pub fn printable_html(&self) -> String {
        export::render_printable(&self.mentors, &self.view, &self.favorites, "Mentor Directory")
    }

    pub fn export_printable(&self, path: &Path) -> Result<(), PortalError> {
        export::write_printable(path, &self.printable_html())
    }

    fn bump(&mut self, category: &str, key: &str) {
        if let Err(e) = Analytics::bump(self.store.as_mut(), category, key) {
            tracing::warn!("Failed to record {category} for {key}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::Availability,
        persistence::{
            MemoryStore,
            SavedFilters,
            ANALYTICS_KEY,
            FAVORITES_KEY,
        },
    };

    fn mentor(id: i64, name: &str, interests: &[&str]) -> Mentor {
        Mentor {
            id: MentorId::Number(id),
            name: name.into(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            availability: "Available".into(),
            ..Default::default()
        }
    }

    fn session_with(store: MemoryStore, state: DirectoryState) -> DirectorySession {
        let mentors = (1..=5).map(|i| mentor(i, &format!("Mentor {i}"), &["AI"])).collect();
        let settings = Settings { page_size: 2, ..Settings::default() };
        DirectorySession::new(
            mentors,
            state,
            Box::new(store),
            Location::parse("index.html#top"),
            &settings,
        )
    }

    fn stored(session: &DirectorySession, key: &str) -> Option<String> {
        session.store.get(key)
    }

    #[test]
    fn test_refresh_rewrites_link_and_saves_filters() {
        let mut session = session_with(MemoryStore::new(), DirectoryState::new());
        assert_eq!(session.share_link(), "index.html#top");
        assert_eq!(session.view().shown.len(), 2);

        session.set_query("mentor 3");
        session.set_availability(AvailabilityFilter::Only(Availability::Available));
        assert_eq!(session.share_link(), "index.html?q=mentor+3&avail=available#top");

        let saved = SavedFilters::load(session.store.as_ref()).unwrap();
        assert_eq!(saved.q, "mentor 3");
        assert_eq!(saved.avail, "available");
    }

    #[test]
    fn test_cards_follow_the_view() {
        let mut session = session_with(MemoryStore::new(), DirectoryState::new());
        let ids: Vec<_> = session.cards().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![MentorId::Number(1), MentorId::Number(2)]);

        session.set_query("mentor 3");
        assert_eq!(session.cards().len(), 1);
        let marked: Vec<_> =
            session.cards()[0].name.iter().filter(|s| s.marked).map(|s| s.text.as_str()).collect();
        assert_eq!(marked, vec!["Mentor", "3"]);
        assert!(!session.cards()[0].favorite);

        session.toggle_favorite(&MentorId::Number(3));
        assert!(session.cards()[0].favorite);
    }

    #[test]
    fn test_unknown_chips_are_pruned_on_start() {
        let mut state = DirectoryState::new();
        state.toggle_chip("AI");
        state.toggle_chip("Basket Weaving");
        let session = session_with(MemoryStore::new(), state);
        assert_eq!(session.state().chips.iter().collect::<Vec<_>>(), vec!["AI"]);
        assert_eq!(session.view().total_matches, 5);
    }

    #[test]
    fn test_toggle_favorite_persists_and_resets_page() {
        let mut session = session_with(MemoryStore::new(), DirectoryState::new());
        session.load_more();
        assert_eq!(session.state().page(), 2);

        session.toggle_favorite(&MentorId::Number(4));
        assert_eq!(session.state().page(), 1);
        assert_eq!(stored(&session, FAVORITES_KEY).as_deref(), Some("[4]"));

        session.toggle_favorites_only();
        let ids: Vec<_> = session.view().mentors(session.mentors()).map(|m| m.id.clone()).collect();
        assert_eq!(ids, vec![MentorId::Number(4)]);
    }

    #[test]
    fn test_chip_and_view_analytics() {
        let mut session = session_with(MemoryStore::new(), DirectoryState::new());
        session.toggle_chip("AI");
        session.toggle_chip("AI");
        let details = session.open_details(0).unwrap();
        assert_eq!(details.id, MentorId::Number(1));
        assert!(session.open_details(99).is_none());

        let analytics = Analytics::load(session.store.as_ref());
        assert_eq!(analytics.count(analytics::CHIPS, "AI"), 2);
        assert_eq!(analytics.count(analytics::VIEWS, "1"), 1);
        assert!(stored(&session, ANALYTICS_KEY).is_some());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = session_with(MemoryStore::new(), DirectoryState::new());
        session.set_query("mentor");
        session.set_sort(SortMode::Year);
        session.toggle_favorites_only();
        session.clear();

        assert_eq!(session.state(), &DirectoryState::new());
        assert_eq!(session.share_link(), "index.html#top");
        assert_eq!(SavedFilters::load(session.store.as_ref()), Some(SavedFilters::default()));
    }

    #[test]
    fn test_replace_mentors_prunes_chips() {
        let mut session = session_with(MemoryStore::new(), DirectoryState::new());
        session.toggle_chip("AI");
        session.replace_mentors(vec![mentor(9, "Zed", &["Robotics"])]);
        assert!(session.state().chips.is_empty());
        assert_eq!(session.universe(), ["Robotics".to_string()]);
        assert_eq!(session.view().total_matches, 1);
    }

    #[test]
    fn test_load_mentors_file_keeps_list_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{\"mentors\": 3}").unwrap();

        let mut session = session_with(MemoryStore::new(), DirectoryState::new());
        assert!(session.load_mentors_file(&bad).is_err());
        assert_eq!(session.mentors().len(), 5);

        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"[{"id": "a", "name": "Ada", "interests": ["Math"]}]"#).unwrap();
        assert_eq!(session.load_mentors_file(&good).unwrap(), 1);
        assert_eq!(session.universe(), ["Math".to_string()]);
    }
}
