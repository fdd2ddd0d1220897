//! UI layer for desktop GUI: app shell, cards, and theme handling.

pub mod app;
pub mod theme;

pub use app::SentimentApp;
