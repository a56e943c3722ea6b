// src/models.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A category of characters that can be enabled for generation.
///
/// The declaration order (uppercase, lowercase, digits, symbols) is the order
/// used when building the pool and when enforcing coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digits => "0123456789",
            CharacterClass::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::Symbols => write!(f, "symbols"),
        }
    }
}

/// Characters stripped from the pool regardless of which class they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionSet {
    SimilarChars,
    AmbiguousChars,
}

impl ExclusionSet {
    pub fn chars(&self) -> &'static str {
        match self {
            ExclusionSet::SimilarChars => "il1Lo0O",
            ExclusionSet::AmbiguousChars => "{}[]()/\\'\"`~,;.<>",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(c)
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub enabled_classes: BTreeSet<CharacterClass>,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl GenerationOptions {
    pub fn new(length: usize, classes: &[CharacterClass]) -> Self {
        Self {
            length,
            enabled_classes: classes.iter().copied().collect(),
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }

    pub fn with_exclude_similar(mut self, exclude: bool) -> Self {
        self.exclude_similar = exclude;
        self
    }

    pub fn with_exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    /// Enabled classes in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        // BTreeSet iterates in `Ord` order, which follows the declaration order
        self.enabled_classes.iter().copied()
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled_classes.contains(&class)
    }

    pub fn set_enabled(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.enabled_classes.insert(class);
        } else {
            self.enabled_classes.remove(&class);
        }
    }

    /// Exclusion sets switched on by these options.
    pub fn exclusions(&self) -> Vec<ExclusionSet> {
        let mut sets = Vec::new();
        if self.exclude_similar {
            sets.push(ExclusionSet::SimilarChars);
        }
        if self.exclude_ambiguous {
            sets.push(ExclusionSet::AmbiguousChars);
        }
        sets
    }

    /// True when `c` survives the active exclusion filters.
    pub fn allows(&self, c: char) -> bool {
        !self.exclusions().iter().any(|set| set.contains(c))
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(16, &CharacterClass::ALL)
    }
}

/// A password produced by one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for GeneratedPassword {
    fn from(value: String) -> Self {
        GeneratedPassword(value)
    }
}

impl From<&str> for GeneratedPassword {
    fn from(value: &str) -> Self {
        GeneratedPassword(value.to_string())
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak - consider a longer password with more character types",
            StrengthTier::Medium => "Medium - a good password, but it could be improved",
            StrengthTier::Strong => "Strong - excellent password!",
        }
    }

    pub fn fill_percent(&self) -> u8 {
        match self {
            StrengthTier::Weak => 33,
            StrengthTier::Medium => 66,
            StrengthTier::Strong => 100,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub tier: StrengthTier,
    pub score: u8,
    pub label: String,
    pub feedback: String,
    pub fill_percent: u8,
}
