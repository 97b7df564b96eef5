//! `passvault restore` — import credentials from an encrypted backup.
//!
//! By default the backup is merged into the live vault: entries whose
//! name matches an existing credential replace it, the rest are
//! appended.  `--replace` swaps the whole credential set instead.

use std::path::Path;

use crate::cli::output;
use crate::cli::{prompt_backup_passphrase, unlock_session, Cli};
use crate::errors::Result;
use crate::vault::VaultSession;

/// Execute the `restore` command.
pub fn execute(cli: &Cli, file: &Path, replace: bool) -> Result<()> {
    output::info("Enter the backup's passphrase.");
    let backup_passphrase = prompt_backup_passphrase(false)?;

    let imported = VaultSession::import_backup(file, backup_passphrase.as_bytes())?;
    let imported_count = imported.len();

    let mut session = unlock_session(cli)?;

    if replace {
        *session.store_mut()? = imported;
    } else {
        session.store_mut()?.merge(imported);
    }
    session.persist()?;

    let verb = if replace { "restored" } else { "merged" };
    output::success(&format!(
        "{imported_count} credential(s) {verb} from {} ({} now in vault)",
        file.display(),
        session.store()?.len()
    ));

    Ok(())
}
