//! `passvault generate` — print a random password without storing it.

use crate::cli::Cli;
use crate::crypto::password::generate_password;
use crate::errors::Result;

/// Execute the `generate` command.
pub fn execute(_cli: &Cli, length: usize, no_symbols: bool) -> Result<()> {
    let password = generate_password(length, !no_symbols)?;
    println!("{password}");
    Ok(())
}
