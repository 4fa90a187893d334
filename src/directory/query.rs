//! Share-link codec. The directory state lives in six query parameters
//! (`q`, `chips`, `sort`, `avail`, `fav`, `page`); fields equal to their
//! default are left out so links stay short, and any other parameters or the
//! fragment already present in the link are preserved.

use std::fmt;

use super::{
    filter::AvailabilityFilter,
    sort::SortMode,
    state::DirectoryState,
};
use crate::persistence::SavedFilters;

/// Ordered query parameters with `URLSearchParams`-like get/set/delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(part), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Replaces the first occurrence in place and drops the rest, or appends.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = k != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", encode_component(key), encode_component(value))?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes()))
            .into_owned(),
    }
}

fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

pub fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Leading integer of `raw`, ignoring anything after it. Missing, zero or
/// negative pages become 1.
fn parse_page(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 1;
    };
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = digits.chars().take_while(char::is_ascii_digit).collect();
    if negative || digits.is_empty() {
        return 1;
    }
    digits.parse::<usize>().unwrap_or(usize::MAX).max(1)
}

pub fn decode_query(query: &str) -> DirectoryState {
    let params = QueryParams::parse(query);

    let mut state = DirectoryState::new();
    state.query = params.get("q").unwrap_or_default().to_string();
    state.chips = parse_csv(params.get("chips").unwrap_or_default()).into_iter().collect();
    state.sort = SortMode::from_key(params.get("sort").unwrap_or_default());
    state.availability = AvailabilityFilter::from_key(params.get("avail").unwrap_or_default());
    state.favorites_only = params.get("fav") == Some("1");
    state.set_page(parse_page(params.get("page")));
    state
}

/// Rewrites the directory parameters of `existing` for `state`.
pub fn encode_query(existing: &str, state: &DirectoryState) -> String {
    let mut params = QueryParams::parse(existing);

    let q = state.query.trim();
    if q.is_empty() {
        params.delete("q");
    } else {
        params.set("q", q);
    }

    if state.chips.is_empty() {
        params.delete("chips");
    } else {
        params.set("chips", state.chips.iter().cloned().collect::<Vec<_>>().join(","));
    }

    if state.sort == SortMode::default() {
        params.delete("sort");
    } else {
        params.set("sort", state.sort.as_key());
    }

    if state.availability == AvailabilityFilter::default() {
        params.delete("avail");
    } else {
        params.set("avail", state.availability.as_key());
    }

    if state.favorites_only {
        params.set("fav", "1");
    } else {
        params.delete("fav");
    }

    if state.page() == 1 {
        params.delete("page");
    } else {
        params.set("page", state.page().to_string());
    }

    params.to_string()
}

/// A share link split into path, query and fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl Location {
    pub fn parse(link: &str) -> Self {
        let (rest, fragment) = link.split_once('#').unwrap_or((link, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        Self { path: path.to_string(), query: query.to_string(), fragment: fragment.to_string() }
    }

    pub fn state(&self) -> DirectoryState {
        decode_query(&self.query)
    }

    pub fn replace_state(&mut self, state: &DirectoryState) {
        self.query = encode_query(&self.query, state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

/// Share-link state wins when it carries any filter; otherwise the saved
/// filters; otherwise defaults.
pub fn seed_state(from_link: DirectoryState, saved: Option<&SavedFilters>) -> DirectoryState {
    if from_link.has_filters() {
        tracing::debug!("Seeding directory state from share link");
        return from_link;
    }
    match saved {
        Some(saved) => {
            tracing::debug!("Seeding directory state from saved filters");
            DirectoryState::from_saved(saved)
        }
        None => from_link,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::core::Availability;

    fn sample_state() -> DirectoryState {
        let mut state = DirectoryState::new();
        state.set_query("rf design");
        state.toggle_chip("RF & Microwave");
        state.toggle_chip("AI");
        state.set_sort(SortMode::Year);
        state.set_availability(AvailabilityFilter::Only(Availability::Limited));
        state.toggle_favorites_only();
        state.set_page(3);
        state
    }

    #[test]
    fn test_defaults_encode_to_nothing() {
        assert_eq!(encode_query("", &DirectoryState::new()), "");
        assert_eq!(decode_query(""), DirectoryState::new());
    }

    #[test]
    fn test_encode_non_defaults() {
        assert_eq!(
            encode_query("", &sample_state()),
            "q=rf+design&chips=AI%2CRF+%26+Microwave&sort=year&avail=limited&fav=1&page=3"
        );
    }

    #[test]
    fn test_roundtrip_full_state() {
        let state = sample_state();
        assert_eq!(decode_query(&encode_query("", &state)), state);
    }

    #[rstest]
    #[case::query_only(|s: &mut DirectoryState| { s.set_query("ann"); })]
    #[case::chips_only(|s: &mut DirectoryState| { s.toggle_chip("Robotics"); })]
    #[case::sort_only(|s: &mut DirectoryState| { s.set_sort(SortMode::Availability); })]
    #[case::avail_only(|s: &mut DirectoryState| {
        s.set_availability(AvailabilityFilter::Only(Availability::Unavailable));
    })]
    #[case::fav_only(|s: &mut DirectoryState| s.toggle_favorites_only())]
    #[case::page_only(|s: &mut DirectoryState| s.set_page(2))]
    fn test_roundtrip_single_field(#[case] mutate: fn(&mut DirectoryState)) {
        let mut state = DirectoryState::new();
        mutate(&mut state);
        let encoded = encode_query("", &state);
        assert!(!encoded.is_empty());
        assert_eq!(decode_query(&encoded), state);
    }

    #[test]
    fn test_encode_preserves_foreign_params() {
        let mut state = DirectoryState::new();
        state.set_query("ai");
        assert_eq!(encode_query("?utm=mail&q=old&sort=year&q=dup", &state), "utm=mail&q=ai");
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some(""), 1)]
    #[case(Some("0"), 1)]
    #[case(Some("-4"), 1)]
    #[case(Some("abc"), 1)]
    #[case(Some("7"), 7)]
    #[case(Some(" 12xyz"), 12)]
    #[case(Some("+3"), 3)]
    fn test_parse_page(#[case] raw: Option<&str>, #[case] expected: usize) {
        assert_eq!(parse_page(raw), expected);
    }

    #[test]
    fn test_decode_tolerates_noise() {
        let state = decode_query("?chips=+AI+,,Robotics,&sort=random&avail=maybe&fav=true&q=a%2Bb");
        assert_eq!(state.chips.iter().cloned().collect::<Vec<_>>(), vec!["AI", "Robotics"]);
        assert_eq!(state.sort, SortMode::Name);
        assert_eq!(state.availability, AvailabilityFilter::All);
        assert!(!state.favorites_only);
        assert_eq!(state.query, "a+b");
    }

    #[test]
    fn test_location_roundtrip() {
        let mut location = Location::parse("https://portal.example/mentors.html?ref=home#list");
        assert_eq!(location.path, "https://portal.example/mentors.html");
        assert_eq!(location.fragment, "list");

        let mut state = DirectoryState::new();
        state.toggle_chip("AI");
        location.replace_state(&state);
        assert_eq!(
            location.to_string(),
            "https://portal.example/mentors.html?ref=home&chips=AI#list"
        );

        location.replace_state(&DirectoryState::new());
        assert_eq!(location.to_string(), "https://portal.example/mentors.html?ref=home#list");
        assert_eq!(Location::parse("app?q=ai").to_string(), "app?q=ai");
        assert_eq!(Location::parse("index.html").to_string(), "index.html");
    }

    #[test]
    fn test_seed_prefers_link_then_saved() {
        let saved = SavedFilters { q: "stored".into(), ..SavedFilters::default() };

        let from_link = decode_query("q=linked&page=2");
        assert_eq!(seed_state(from_link.clone(), Some(&saved)), from_link);

        let seeded = seed_state(decode_query(""), Some(&saved));
        assert_eq!(seeded.query, "stored");
        assert_eq!(seeded.page(), 1);

        assert_eq!(seed_state(decode_query(""), None), DirectoryState::new());
    }

    #[test]
    fn test_page_alone_counts_as_link_filter() {
        let saved = SavedFilters { q: "stored".into(), ..SavedFilters::default() };
        let seeded = seed_state(decode_query("page=4"), Some(&saved));
        assert_eq!(seeded.query, "");
        assert_eq!(seeded.page(), 4);
    }
}
