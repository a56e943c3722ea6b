// src/cli/commands.rs
use clap::Subcommand;

use crate::models::{CharacterClass, GenerationOptions};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Rate the strength of a password
    Score {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// Open the interactive menu
    Menu,
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Password length
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude look-alike characters (i l 1 L o 0 O)
    #[arg(long)]
    pub exclude_similar: bool,

    /// Exclude brackets, quotes and other ambiguous punctuation
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// How many passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,

    /// Copy the last generated password to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl GenerateArgs {
    /// Applies the command line switches on top of the configured defaults.
    pub fn apply(&self, mut options: GenerationOptions) -> GenerationOptions {
        if let Some(length) = self.length {
            options.length = length;
        }
        if self.no_uppercase {
            options.set_enabled(CharacterClass::Uppercase, false);
        }
        if self.no_lowercase {
            options.set_enabled(CharacterClass::Lowercase, false);
        }
        if self.no_numbers {
            options.set_enabled(CharacterClass::Digits, false);
        }
        if self.no_symbols {
            options.set_enabled(CharacterClass::Symbols, false);
        }
        options.exclude_similar |= self.exclude_similar;
        options.exclude_ambiguous |= self.exclude_ambiguous;
        options
    }
}
