//! `passvault list` — display all credentials in a table.

use crate::cli::output;
use crate::cli::{unlock_session, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let session = unlock_session(cli)?;
    let store = session.store()?;

    output::info(&format!("{} credential(s)", store.len()));
    output::print_credentials_table(store.list());

    Ok(())
}
