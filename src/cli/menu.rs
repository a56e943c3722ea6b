// src/cli/menu.rs
use inquire::{Confirm, CustomType, MultiSelect, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::cli::handlers;
use crate::core::{Config, Session};
use crate::models::{CharacterClass, GenerationOptions};
use crate::utils::{format_time_ago, truncate_string};

const GENERATE: &str = "🔐  Generate password";
const COPY: &str = "📋  Copy current password";
const OPTIONS: &str = "⚙️  Change options";
const RECENT: &str = "🕘  Recent passwords";
const CHECK: &str = "🧪  Check a password's strength";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 PASSWORD GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = Session::new();
    let mut options = config.default_options();

    // Start with a password ready, like the page did on load
    generate_and_show(&mut session, &options);

    let mut pending_clear: Option<JoinHandle<()>> = None;

    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        println!("\n{}", describe_options(&options));

        let actions = vec![GENERATE, COPY, OPTIONS, RECENT, CHECK, EXIT];
        let choice = Select::new("What would you like to do?", actions).prompt()?;

        match choice {
            GENERATE => generate_and_show(&mut session, &options),
            COPY => {
                let current = session.current().map(|p| p.as_str().to_string()).unwrap_or_default();
                if let Some(clear) = handlers::handle_copy(&current, config.clipboard_clear_after) {
                    pending_clear = Some(clear);
                }
            }
            OPTIONS => {
                options = prompt_options(&options)?;
                generate_and_show(&mut session, &options);
            }
            RECENT => {
                if let Some(clear) = show_recent(&session, config)? {
                    pending_clear = Some(clear);
                }
            }
            CHECK => {
                let password = Text::new("Password to check:").prompt()?;
                handlers::handle_score(&password, false)?;
            }
            _ => exit_requested = true,
        }
    }

    if pending_clear.as_ref().map_or(false, |clear| !clear.is_finished()) {
        handlers::wait_for_clear(pending_clear);
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn generate_and_show(session: &mut Session, options: &GenerationOptions) {
    match session.generate(options) {
        Ok(generation) => println!("{}", handlers::render_generation(&generation)),
        Err(e) => println!("❌ {}", e),
    }
}

fn prompt_options(current: &GenerationOptions) -> Result<GenerationOptions, Box<dyn Error>> {
    let length = CustomType::<usize>::new("Password length:")
        .with_default(current.length)
        .with_error_message("Please enter a whole number")
        .prompt()?;

    let labels: Vec<String> = CharacterClass::ALL
        .iter()
        .map(|class| format!("{} ({})", class, truncate_string(class.alphabet(), 12)))
        .collect();
    let defaults: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| current.is_enabled(**class))
        .map(|(i, _)| i)
        .collect();

    let selected = MultiSelect::new("Character types:", labels.clone())
        .with_default(&defaults)
        .prompt()?;

    let classes: Vec<CharacterClass> = CharacterClass::ALL
        .iter()
        .zip(labels.iter())
        .filter(|(_, label)| selected.contains(label))
        .map(|(class, _)| *class)
        .collect();

    let exclude_similar = Confirm::new("Exclude similar characters (i, l, 1, L, o, 0, O)?")
        .with_default(current.exclude_similar)
        .prompt()?;

    let exclude_ambiguous =
        Confirm::new("Exclude ambiguous characters ({ } [ ] ( ) / \\ ' \" ` ~ , ; . < >)?")
            .with_default(current.exclude_ambiguous)
            .prompt()?;

    Ok(GenerationOptions::new(length, &classes)
        .with_exclude_similar(exclude_similar)
        .with_exclude_ambiguous(exclude_ambiguous))
}

fn show_recent(
    session: &Session,
    config: &Config,
) -> Result<Option<JoinHandle<()>>, Box<dyn Error>> {
    let history = session.history();
    if history.is_empty() {
        println!("❗ No recent passwords.");
        return Ok(None);
    }

    let mut items: Vec<String> = history
        .entries()
        .iter()
        .map(|e| format!("{}  ({})", e.password, format_time_ago(e.generated_at)))
        .collect();
    items.push("↩️  Back".to_string());

    let selection = Select::new("Copy a recent password:", items.clone()).prompt()?;

    let clear = items
        .iter()
        .position(|item| *item == selection)
        .and_then(|index| history.get(index))
        .and_then(|entry| {
            handlers::handle_copy(entry.password.as_str(), config.clipboard_clear_after)
        });

    Ok(clear)
}

pub fn describe_options(options: &GenerationOptions) -> String {
    let classes: Vec<String> = options.classes().map(|c| c.to_string()).collect();
    let classes = if classes.is_empty() {
        "none".to_string()
    } else {
        classes.join(", ")
    };

    let mut exclusions = Vec::new();
    if options.exclude_similar {
        exclusions.push("similar");
    }
    if options.exclude_ambiguous {
        exclusions.push("ambiguous");
    }

    format!(
        "Length {} | {} | excluding: {}",
        options.length,
        classes,
        if exclusions.is_empty() { "nothing".to_string() } else { exclusions.join(", ") }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_options() {
        let classes = [CharacterClass::Digits, CharacterClass::Lowercase];
        let options = GenerationOptions::new(12, &classes).with_exclude_ambiguous(true);
        assert_eq!(
            describe_options(&options),
            "Length 12 | lowercase, digits | excluding: ambiguous"
        );
    }

    #[test]
    fn test_describe_options_without_classes() {
        let options = GenerationOptions::new(8, &[]);
        assert_eq!(describe_options(&options), "Length 8 | none | excluding: nothing");
    }
}
