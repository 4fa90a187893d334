use std::{
    cell::RefCell,
    cmp::Ordering,
};

use feruca::{
    Collator,
    Locale,
    Tailoring,
};

use crate::core::Mentor;

thread_local! {
    // Root CLDR collation. Spaces and punctuation are not ignorable, so
    // "Ann Lee" sorts before "Anna".
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    #[default]
    Name,
    Year,
    Availability,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Name, SortMode::Year, SortMode::Availability];

    pub fn as_key(self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Year => "year",
            SortMode::Availability => "availability",
        }
    }

    /// Unknown keys fall back to `Name`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "year" => SortMode::Year,
            "availability" => SortMode::Availability,
            _ => SortMode::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Name => "Name (A–Z)",
            SortMode::Year => "Graduation year (newest)",
            SortMode::Availability => "Availability",
        }
    }
}

/// Unicode collation: accents and case only break ties, so "Émile" sorts
/// next to "Eve" and "ann" just before "Ann".
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

pub fn compare(a: &Mentor, b: &Mentor, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Name => locale_cmp(&a.name, &b.name),
        SortMode::Year => b.grad_year.unwrap_or(0).cmp(&a.grad_year.unwrap_or(0)),
        SortMode::Availability => a
            .bucket()
            .rank()
            .cmp(&b.bucket().rank())
            .then_with(|| locale_cmp(&a.name, &b.name)),
    }
}

/// Stable sort, so equal keys keep their input order.
pub fn sort_mentors(mentors: &mut [&Mentor], mode: SortMode) {
    mentors.sort_by(|a, b| compare(a, b, mode));
}
