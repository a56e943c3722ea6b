// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{CharacterClass, GenerationOptions};

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub default_password_exclude_similar: bool,
    pub default_password_exclude_ambiguous: bool,

    // Clipboard
    pub clipboard_clear_after: Option<Duration>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_numbers: true,
            default_include_symbols: true,
            default_password_exclude_similar: false,
            default_password_exclude_ambiguous: false,

            // Clipboard
            clipboard_clear_after: None,

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./passgen.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());

        if env::var("LOG_FILE").is_err() {
            config.log_file = crate::utils::default_log_file();
        }

        config
    }

    /// Builds a config from an arbitrary key lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        parse_into(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length);
        parse_into(&lookup, "DEFAULT_INCLUDE_UPPERCASE", &mut config.default_include_uppercase);
        parse_into(&lookup, "DEFAULT_INCLUDE_LOWERCASE", &mut config.default_include_lowercase);
        parse_into(&lookup, "DEFAULT_INCLUDE_NUMBERS", &mut config.default_include_numbers);
        parse_into(&lookup, "DEFAULT_INCLUDE_SYMBOLS", &mut config.default_include_symbols);
        parse_into(
            &lookup,
            "DEFAULT_PASSWORD_EXCLUDE_SIMILAR",
            &mut config.default_password_exclude_similar,
        );
        parse_into(
            &lookup,
            "DEFAULT_PASSWORD_EXCLUDE_AMBIGUOUS",
            &mut config.default_password_exclude_ambiguous,
        );

        // Clipboard
        let mut clear_seconds = 0u64;
        parse_into(&lookup, "CLIPBOARD_CLEAR_SECONDS", &mut clear_seconds);
        config.clipboard_clear_after = if clear_seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(clear_seconds))
        };

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }

    /// The generation options a fresh session starts with.
    pub fn default_options(&self) -> GenerationOptions {
        let mut options = GenerationOptions::new(self.default_password_length, &[])
            .with_exclude_similar(self.default_password_exclude_similar)
            .with_exclude_ambiguous(self.default_password_exclude_ambiguous);

        options.set_enabled(CharacterClass::Uppercase, self.default_include_uppercase);
        options.set_enabled(CharacterClass::Lowercase, self.default_include_lowercase);
        options.set_enabled(CharacterClass::Digits, self.default_include_numbers);
        options.set_enabled(CharacterClass::Symbols, self.default_include_symbols);

        options
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) {
        if let Some(parent) = self.log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create log directory: {}", e);
                }
            }
        }
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", val, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_enable_every_class() {
        let options = Config::default().default_options();
        assert_eq!(options.length, 16);
        assert_eq!(options.enabled_classes.len(), 4);
        assert!(!options.exclude_similar);
        assert!(!options.exclude_ambiguous);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_INCLUDE_SYMBOLS", "false"),
            ("DEFAULT_PASSWORD_EXCLUDE_AMBIGUOUS", "true"),
            ("CLIPBOARD_CLEAR_SECONDS", "30"),
            ("LOG_LEVEL", "DEBUG"),
        ]));
        let options = config.default_options();
        assert_eq!(options.length, 24);
        assert!(!options.is_enabled(CharacterClass::Symbols));
        assert!(options.exclude_ambiguous);
        assert_eq!(config.clipboard_clear_after, Some(Duration::from_secs(30)));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "lots"),
            ("DEFAULT_INCLUDE_UPPERCASE", "maybe"),
        ]));
        assert_eq!(config.default_password_length, 16);
        assert!(config.default_include_uppercase);
    }
}
