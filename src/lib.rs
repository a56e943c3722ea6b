// src/lib.rs
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::core::{Config, Generation, RecentHistory, Session};
pub use crate::generators::GenerationError;
pub use crate::models::{CharacterClass, GeneratedPassword, GenerationOptions, StrengthResult, StrengthTier};
