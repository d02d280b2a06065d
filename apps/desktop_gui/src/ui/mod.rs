//! UI layer for the desktop shell: app window and site theme.

pub mod app;
pub mod theme;

pub use app::SiteApp;
