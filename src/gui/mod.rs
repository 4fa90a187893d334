pub mod actions;
pub mod app;
pub mod cards;
pub mod chips;
pub mod controls;
pub mod detail_modal;
pub mod focus;
pub mod notice_modal;
pub mod theme;
pub mod top_bar;

pub use app::PortalApp;
