//! `passvault stats` — summary statistics over the stored credentials.

use crate::cli::output;
use crate::cli::{unlock_session, Cli};
use crate::errors::Result;

/// Execute the `stats` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let session = unlock_session(cli)?;
    let stats = session.store()?.stats();

    output::info(&format!("Credentials:      {}", stats.total));
    output::info(&format!("With notes:       {}", stats.with_notes));
    output::info(&format!("Strong passwords: {}", stats.strong_passwords));

    if stats.weak_passwords > 0 {
        output::warning(&format!(
            "Weak passwords:   {} (shorter than 8 characters)",
            stats.weak_passwords
        ));
        output::tip("Run `passvault update <name> --password` to replace them.");
    } else {
        output::info("Weak passwords:   0");
    }

    Ok(())
}
