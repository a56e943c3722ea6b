// src/core/mod.rs
pub mod config;
pub mod history;
pub mod session;

pub use config::Config;
pub use history::{HistoryEntry, RecentHistory, MAX_RECENT_PASSWORDS};
pub use session::{Generation, Session};
