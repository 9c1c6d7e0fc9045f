//! Command implementations for plugger-cli

pub mod components;
pub mod list;
pub mod resolve;

pub use components::run_components;
pub use list::run_list;
pub use resolve::run_resolve;

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Print `value` as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
