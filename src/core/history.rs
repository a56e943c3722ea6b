// src/core/history.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::GeneratedPassword;

pub const MAX_RECENT_PASSWORDS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub password: GeneratedPassword,
    pub generated_at: DateTime<Utc>,
}

/// The most recent distinct passwords, newest first.
#[derive(Debug, Default, Clone)]
pub struct RecentHistory {
    entries: Vec<HistoryEntry>,
}

impl RecentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `password` unless it is already present.
    ///
    /// Returns `true` when the history changed.
    pub fn record(&mut self, password: &GeneratedPassword) -> bool {
        if self.contains(password.as_str()) {
            return false;
        }

        let entry = HistoryEntry {
            password: password.clone(),
            generated_at: Utc::now(),
        };
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_RECENT_PASSWORDS);
        true
    }

    pub fn record_and_get_history(&mut self, password: &GeneratedPassword) -> Vec<String> {
        self.record(password);
        self.passwords()
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.iter().any(|e| e.password.as_str() == password)
    }

    pub fn passwords(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.password.as_str().to_string()).collect()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
