// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod strength;

pub use password::{build_pool, enforce_coverage, generate_password, generate_password_with, sample};
pub use strength::score;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Select at least one character class")]
    NoClassSelected,

    #[error("Exclusion filters removed every candidate character")]
    EmptyPool,

    #[error("Password length must be at least 1")]
    InvalidLength,
}

pub type Result<T> = std::result::Result<T, GenerationError>;
