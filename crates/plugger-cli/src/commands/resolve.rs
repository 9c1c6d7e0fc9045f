//! The resolve command
//!
//! Runs the full pipeline without executing plugin code: "loading" a
//! reference means parsing it into its `component:item` target, and a target
//! conforms when its item is a valid identifier. A malformed reference is a
//! load failure and a non-identifier item is a validation failure, so both
//! `[resolve]` failure policies apply.

use colored::Colorize;
use plugger_core::{
    BoxError, Candidate, Catalog, Interface, InterfaceDescriptor, Plugger, Reference,
    ResolveConfig,
};
use serde::Serialize;

use super::print_json;
use crate::error::Result;

/// The `component:item` target a reference points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub component: String,
    pub item: String,
}

impl Target {
    /// Whether the item names an identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    pub fn is_identifier(&self) -> bool {
        let mut chars = self.item.chars();
        chars
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

#[derive(Debug, thiserror::Error)]
#[error("reference '{0}' is not of the form component:item")]
struct MalformedReference(String);

/// Parse a reference into its target.
pub fn parse_target(reference: &Reference) -> std::result::Result<Target, BoxError> {
    match reference.as_str().split_once(':') {
        Some((component, item))
            if !component.trim().is_empty() && !item.trim().is_empty() && !item.contains(':') =>
        {
            Ok(Target {
                component: component.trim().to_string(),
                item: item.trim().to_string(),
            })
        }
        _ => Err(MalformedReference(reference.to_string()).into()),
    }
}

#[derive(Debug, Serialize)]
struct ResolvedPlugin<'a> {
    registration: &'a plugger_core::Registration,
    target: &'a Target,
    internal: bool,
}

#[derive(Debug, Serialize)]
struct ResolveAllOutput<'a> {
    candidates: Vec<ResolvedPlugin<'a>>,
    rejected: Vec<String>,
}

/// Run the resolve command
pub fn run_resolve(
    catalog: &impl Catalog,
    config: ResolveConfig,
    descriptor: InterfaceDescriptor,
    all: bool,
    json: bool,
) -> Result<()> {
    let plugger = Plugger::new(catalog, parse_target).with_config(config);
    let interface = Interface::<Target>::new(descriptor, Target::is_identifier);
    let descriptor = interface.descriptor();

    if !all {
        let chosen = plugger.resolve_one(&interface)?;
        let plugin = describe(&chosen, descriptor);
        if json {
            return print_json(&plugin);
        }
        println!(
            "{} {} {} {}",
            "Resolved".green().bold(),
            descriptor.to_string().cyan(),
            "->".dimmed(),
            chosen.registration()
        );
        return Ok(());
    }

    let resolution = plugger.resolve_all_report(&interface)?;
    if json {
        let output = ResolveAllOutput {
            candidates: resolution
                .candidates
                .iter()
                .map(|candidate| describe(candidate, descriptor))
                .collect(),
            rejected: resolution.rejected.iter().map(ToString::to_string).collect(),
        };
        return print_json(&output);
    }

    for error in &resolution.rejected {
        eprintln!("{} {}", "skipped:".yellow().bold(), error);
    }
    if resolution.candidates.is_empty() {
        println!("{} {}", "No plugins found for".yellow(), descriptor);
        return Ok(());
    }

    println!("{} {}", "Plugins for".bold(), descriptor.to_string().cyan());
    println!();
    for candidate in &resolution.candidates {
        let kind = if candidate.is_internal_to(descriptor) {
            "internal"
        } else {
            "external"
        };
        println!(
            "  {:<40} {}",
            candidate.registration().to_string().green(),
            kind.dimmed()
        );
    }

    Ok(())
}

fn describe<'a>(
    candidate: &'a Candidate<Target>,
    descriptor: &InterfaceDescriptor,
) -> ResolvedPlugin<'a> {
    ResolvedPlugin {
        registration: candidate.registration(),
        target: candidate.value(),
        internal: candidate.is_internal_to(descriptor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        let target = parse_target(&Reference::new("foo:Bar")).unwrap();
        assert_eq!(
            target,
            Target {
                component: "foo".to_string(),
                item: "Bar".to_string(),
            }
        );
    }

    #[test]
    fn test_identifier_items_conform() {
        let target = |item: &str| Target {
            component: "foo".to_string(),
            item: item.to_string(),
        };

        assert!(target("Bar").is_identifier());
        assert!(target("_private2").is_identifier());
        assert!(!target("1Bar").is_identifier());
        assert!(!target("Bar-Baz").is_identifier());
        assert!(!target("Bar.baz").is_identifier());
    }

    #[test]
    fn test_parse_target_rejects_malformed() {
        for reference in ["foo", ":Bar", "foo:", "a:b:c"] {
            let err = parse_target(&Reference::new(reference)).unwrap_err();
            assert!(
                err.to_string().contains("component:item"),
                "{reference}: {err}"
            );
        }
    }
}
