// src/cli/handlers.rs
use std::error::Error;
use std::thread::JoinHandle;
use std::time::Duration;

use serde::Serialize;

use crate::core::{Generation, Session};
use crate::generators;
use crate::models::{GenerationOptions, StrengthResult};
use crate::utils::{self, ClipboardError, SystemClipboard};

#[derive(Serialize)]
struct GenerateReport<'a> {
    passwords: &'a [Generation],
    history: Vec<String>,
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    password_length: usize,
    #[serde(flatten)]
    strength: &'a StrengthResult,
}

// Handlers for CLI commands
pub fn handle_generate(
    session: &mut Session,
    options: &GenerationOptions,
    count: usize,
    copy: bool,
    json: bool,
    clear_after: Option<Duration>,
) -> Result<(), Box<dyn Error>> {
    let mut generated = Vec::with_capacity(count.max(1));
    for _ in 0..count.max(1) {
        match session.generate(options) {
            Ok(generation) => generated.push(generation),
            Err(e) => {
                eprintln!("❌ Failed to generate password: {}", e);
                return Err(Box::new(e));
            }
        }
    }

    if json {
        let report = GenerateReport {
            passwords: &generated,
            history: session.history().passwords(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for generation in &generated {
            println!("{}", render_generation(generation));
        }
        if generated.len() > 1 {
            println!("\n{}", render_history(&session.history().passwords()));
        }
    }

    if copy {
        if let Some(last) = generated.last() {
            wait_for_clear(handle_copy(last.password.as_str(), clear_after));
        }
    }

    Ok(())
}

pub fn handle_score(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let strength = generators::score(password);

    if json {
        let report = ScoreReport {
            password_length: password.chars().count(),
            strength: &strength,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_strength(&strength));
    }

    Ok(())
}

/// Copies `text` to the system clipboard, reporting the outcome to the user.
///
/// Returns the pending clear thread, if any. On failure the password is shown
/// so it can be selected by hand; the copy is never retried.
pub fn handle_copy(text: &str, clear_after: Option<Duration>) -> Option<JoinHandle<()>> {
    let result = SystemClipboard::new()
        .and_then(|mut clipboard| utils::copy_to_clipboard(&mut clipboard, text, clear_after));

    match result {
        Ok(clear) => {
            match clear_after {
                Some(duration) => println!(
                    "📋 Password copied to clipboard (cleared in {}s)",
                    duration.as_secs()
                ),
                None => println!("📋 Password copied to clipboard!"),
            }
            clear
        }
        Err(ClipboardError::NothingToCopy) => {
            println!("❗ There is no password to copy.");
            None
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            eprintln!("❌ {}", e);
            println!("Select and copy the password manually:\n\n    {}\n", text);
            None
        }
    }
}

/// Blocks until a pending clipboard clear has run, so one-shot commands do
/// not exit before it.
pub fn wait_for_clear(clear: Option<JoinHandle<()>>) -> bool {
    match clear {
        Some(handle) => {
            println!("⏳ Waiting to clear the clipboard (Ctrl+C to skip)...");
            handle.join().is_ok()
        }
        None => false,
    }
}

pub fn render_generation(generation: &Generation) -> String {
    format!(
        "\nGenerated Password: {}\n{}",
        console::style(generation.password.as_str()).bold(),
        render_strength(&generation.strength)
    )
}

pub fn render_strength(strength: &StrengthResult) -> String {
    format!(
        "Strength: {} ({}/7) {}\n{}",
        utils::styled_tier(strength.tier),
        strength.score,
        utils::strength_bar(strength),
        strength.feedback
    )
}

pub fn render_history(passwords: &[String]) -> String {
    if passwords.is_empty() {
        return "No recent passwords".to_string();
    }

    let mut out = String::from("Recent passwords:");
    for (i, password) in passwords.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, password));
    }
    out
}
