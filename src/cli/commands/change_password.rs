//! `passvault change-password` — change the master passphrase.
//!
//! Unlocks with the current passphrase, generates a fresh salt,
//! derives a new key from the new passphrase, and re-encrypts the
//! whole credential set atomically.

use crate::cli::output;
use crate::cli::{prompt_new_passphrase, prompt_passphrase, vault_path, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::VaultSession;

/// Execute the `change-password` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;
    let mut session = VaultSession::open(&path)?;

    output::info("Enter your current master passphrase.");
    let current = prompt_passphrase()?;
    session.unlock(current.as_bytes())?;

    output::info("Choose your new master passphrase.");
    let new_passphrase = prompt_new_passphrase("Choose new master passphrase")?;

    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    session.change_passphrase(new_passphrase.as_bytes(), Some(settings.kdf_iterations))?;

    output::success(&format!(
        "Master passphrase changed ({} credential(s) re-encrypted)",
        session.store()?.len()
    ));

    Ok(())
}
