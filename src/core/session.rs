// src/core/session.rs
use rand::Rng;
use serde::Serialize;

use crate::core::history::RecentHistory;
use crate::generators::{self, GenerationError};
use crate::models::{GeneratedPassword, GenerationOptions, StrengthResult};

/// Outcome of one successful generation request.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub password: GeneratedPassword,
    pub strength: StrengthResult,
}

/// Per-user generation state: the recent history and the current password.
#[derive(Debug, Default)]
pub struct Session {
    history: RecentHistory,
    current: Option<GeneratedPassword>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, options: &GenerationOptions) -> Result<Generation, GenerationError> {
        let mut rng = rand::thread_rng();
        self.generate_with(options, &mut rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &mut self,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Result<Generation, GenerationError> {
        let password = generators::generate_password_with(options, rng).map_err(|e| {
            log::warn!("Password generation rejected: {}", e);
            e
        })?;
        let strength = generators::score(password.as_str());

        if self.history.record(&password) {
            log::debug!("Recorded password in history ({} entries)", self.history.len());
        }
        self.current = Some(password.clone());

        log::info!("Generated {}-character password rated {}", password.len(), strength.tier);

        Ok(Generation { password, strength })
    }

    pub fn current(&self) -> Option<&GeneratedPassword> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &RecentHistory {
        &self.history
    }
}
