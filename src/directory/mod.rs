pub mod card;
pub mod filter;
pub mod highlight;
pub mod query;
pub mod search;
pub mod sort;
pub mod state;
pub mod view;

pub use card::{
    build_card,
    MentorCard,
    MentorDetails,
};
pub use filter::AvailabilityFilter;
pub use query::Location;
pub use sort::SortMode;
pub use state::DirectoryState;
pub use view::{
    compute_view,
    interest_universe,
    AvailabilityCounts,
    DirectoryView,
    DEFAULT_PAGE_SIZE,
};
