//! Plugger CLI
//!
//! Inspects the components installed on a search path and resolves the
//! plugins they register.

mod cli;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;
use colored::Colorize;
use plugger_core::InterfaceDescriptor;

use cli::{Cli, Commands};
use error::Result;
use settings::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command else {
        // No command provided - show help hint
        println!("{} Plugin resolution CLI", "plugger".green().bold());
        println!();
        println!("Run {} for available commands.", "plugger --help".cyan());
        return Ok(());
    };

    let settings = Settings::load(cli.config.as_deref())?;
    let catalog = settings.catalog(&cli.paths)?;
    tracing::debug!(paths = ?catalog.search_paths(), "component search path");

    match command {
        Commands::Components { json } => commands::run_components(&catalog, json),
        Commands::List {
            namespace,
            name,
            json,
        } => commands::run_list(&catalog, namespace.as_deref(), name.as_deref(), json),
        Commands::Resolve {
            namespace,
            name,
            all,
            owner,
            json,
        } => {
            let mut descriptor = InterfaceDescriptor::new(namespace, name);
            if let Some(owner) = owner {
                descriptor = descriptor.with_owner(owner);
            }
            commands::run_resolve(&catalog, settings.resolve, descriptor, all, json)
        }
    }
}
