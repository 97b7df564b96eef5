//! `passvault backup` — export an encrypted backup file.
//!
//! The backup is structurally identical to the live vault but gets its
//! own salt and a passphrase of the user's choosing, so it can be
//! restored on a machine that never knew the live vault's passphrase.

use std::path::Path;

use crate::cli::output;
use crate::cli::{prompt_backup_passphrase, unlock_session, Cli};
use crate::errors::Result;

/// Execute the `backup` command.
pub fn execute(cli: &Cli, dest: &Path) -> Result<()> {
    let session = unlock_session(cli)?;

    output::info("Choose a passphrase for the backup (it may differ from the vault's).");
    let backup_passphrase = prompt_backup_passphrase(true)?;

    session.export_backup(dest, backup_passphrase.as_bytes(), None)?;

    output::success(&format!(
        "Backup of {} credential(s) written to {}",
        session.store()?.len(),
        dest.display()
    ));
    output::tip("Store the backup and its passphrase separately.");

    Ok(())
}
