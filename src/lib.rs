pub mod cli;
pub mod core;
pub mod directory;
pub mod export;
pub mod gui;
pub mod persistence;
pub mod session;
pub mod settings;

pub use crate::{
    core::{
        Mentor,
        MentorId,
        PortalError,
    },
    directory::{
        DirectoryState,
        DirectoryView,
    },
    session::DirectorySession,
    settings::Settings,
};
