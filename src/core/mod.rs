pub mod errors;
pub mod http;
pub mod mentors;
pub mod models;

pub use errors::PortalError;
pub use models::{
    Availability,
    Mentor,
    MentorId,
};
