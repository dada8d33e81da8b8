//! UI layer for the booking app: app shell, per-screen views, logos and theme.

pub mod app;
pub mod images;
pub mod screens;
pub mod theme;

pub use app::BookingGuiApp;
