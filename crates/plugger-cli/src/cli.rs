//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Plugger - Inspect installed components and resolve their plugins
#[derive(Parser, Debug)]
#[command(name = "plugger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Component search path entry (repeatable)
    ///
    /// Defaults to the `paths` list of the config file, then to $PLUGGER_PATH,
    /// then to the current directory.
    #[arg(short = 'p', long = "path", global = true)]
    pub paths: Vec<PathBuf>,

    /// Config file with `paths` and a `[resolve]` table
    #[arg(short, long, global = true, env = "PLUGGER_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List installed components
    Components {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List advertised registrations
    ///
    /// Examples:
    ///   plugger list                       # Everything on the search path
    ///   plugger list --namespace foo       # Only the `foo` group
    ///   plugger list --name Base --json    # Machine-readable
    List {
        /// Only registrations in this namespace
        #[arg(long)]
        namespace: Option<String>,

        /// Only registrations with this name
        #[arg(long)]
        name: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve the plugin registered for an interface
    ///
    /// References must have the `component:item` form and the item must be
    /// an identifier; no plugin code is run.
    Resolve {
        /// Namespace of the interface (its defining component)
        namespace: String,

        /// Name of the interface
        name: String,

        /// Show every valid plugin instead of picking one
        #[arg(long)]
        all: bool,

        /// Defining component, when it differs from the namespace
        #[arg(long)]
        owner: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from([
            "plugger", "resolve", "foo", "Base", "--all", "--path", "plugins",
        ])
        .unwrap();

        assert_eq!(cli.paths, vec![PathBuf::from("plugins")]);
        assert_eq!(
            cli.command,
            Some(Commands::Resolve {
                namespace: "foo".to_string(),
                name: "Base".to_string(),
                all: true,
                owner: None,
                json: false,
            })
        );
    }

    #[test]
    fn test_parse_repeated_paths() {
        let cli = Cli::try_parse_from(["plugger", "-p", "a", "-p", "b", "list"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
