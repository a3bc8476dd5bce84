pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod preview;
pub mod router;
pub mod state;
