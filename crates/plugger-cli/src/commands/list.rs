//! The list command

use colored::Colorize;
use plugger_core::Catalog;

use super::print_json;
use crate::error::Result;

/// Run the list command
pub fn run_list(
    catalog: &impl Catalog,
    namespace: Option<&str>,
    name: Option<&str>,
    json: bool,
) -> Result<()> {
    let registrations = catalog.list_registrations(namespace, name)?;

    if json {
        return print_json(&registrations);
    }

    if registrations.is_empty() {
        println!("{}", "No registrations found.".yellow());
        return Ok(());
    }

    println!("{}", "Registrations".bold());
    println!();
    for registration in &registrations {
        let key = format!("{}:{}", registration.namespace(), registration.name());
        println!(
            "  {:<24} {} ({} {})",
            key.cyan(),
            registration.reference(),
            registration.source_component().green(),
            registration.source_version().unwrap_or("-").dimmed()
        );
    }
    println!();
    println!(
        "{} {} registrations",
        "Total:".dimmed(),
        registrations.len()
    );

    Ok(())
}
