//! The components command

use colored::Colorize;
use plugger_manifest::ManifestCatalog;
use serde::Serialize;

use super::print_json;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct ComponentSummary<'a> {
    name: &'a str,
    version: Option<&'a str>,
    root: String,
    registrations: usize,
}

/// Run the components command
pub fn run_components(catalog: &ManifestCatalog, json: bool) -> Result<()> {
    let components = catalog.components()?;

    if json {
        let summaries: Vec<_> = components
            .iter()
            .map(|component| ComponentSummary {
                name: component.name(),
                version: component.version(),
                root: component.root.display().to_string(),
                registrations: component.manifest.registrations().len(),
            })
            .collect();
        return print_json(&summaries);
    }

    if components.is_empty() {
        println!("{}", "No components found.".yellow());
        return Ok(());
    }

    println!("{}", "Installed Components".bold());
    println!();
    for component in &components {
        println!(
            "  {:<20} {:<10} {}",
            component.name().green(),
            component.version().unwrap_or("-"),
            component.root.display().to_string().dimmed()
        );
    }
    println!();
    println!("{} {} components", "Total:".dimmed(), components.len());

    Ok(())
}
