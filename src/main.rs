use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use rust_passgen::cli::{self, Args, CliCommand};
use rust_passgen::core::{Config, Session};

fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = rust_passgen::logging::init(&config) {
        eprintln!("⚠️ Logging disabled: {}", e);
    }

    log::info!("Starting password generator");
    log::debug!("Command line args: {:?}", args.command.as_ref().map(command_name));
    log::debug!("Loaded config: {:?}", config);

    let result = match args.command {
        Some(CliCommand::Generate(generate)) => {
            let options = generate.apply(config.default_options());
            let mut session = Session::new();
            cli::handlers::handle_generate(
                &mut session,
                &options,
                generate.count,
                generate.copy,
                args.json,
                config.clipboard_clear_after,
            )
        }
        Some(CliCommand::Score { password }) => cli::handlers::handle_score(&password, args.json),
        Some(CliCommand::Menu) | None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                if let Err(e) = ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received. Exiting menu...");
                    should_exit.store(true, Ordering::SeqCst);
                }) {
                    log::warn!("Failed to set Ctrl+C handler: {}", e);
                }
            }
            cli::menu::run_cli_menu(&config, should_exit)
        }
    };

    result.map_err(|e| {
        log::error!("Command failed: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    log::info!("Password generator shutdown complete");
    Ok(())
}

// Never log the score argument itself
fn command_name(command: &CliCommand) -> &'static str {
    match command {
        CliCommand::Generate(_) => "generate",
        CliCommand::Score { .. } => "score",
        CliCommand::Menu => "menu",
    }
}
