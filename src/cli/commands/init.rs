//! `passvault init` — create a new vault.

use std::fs;

use crate::cli::output;
use crate::cli::{prompt_new_passphrase, vault_path, Cli};
use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultSession;

/// Execute the `init` command.
pub fn execute(cli: &Cli, iterations: Option<u32>) -> Result<()> {
    let path = vault_path(cli)?;

    if path.exists() {
        output::tip("Use `passvault add` to add credentials to the existing vault.");
        return Err(PassVaultError::VaultAlreadyExists(path));
    }

    // Create the parent directory when --vault points somewhere new.
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            output::info(&format!("Created vault directory: {}", parent.display()));
        }
    }

    let passphrase = prompt_new_passphrase("Choose master passphrase")?;

    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let iterations = iterations.unwrap_or(settings.kdf_iterations);

    let session = VaultSession::create(&path, passphrase.as_bytes(), Some(iterations))?;

    output::success(&format!("Vault created at {}", session.path().display()));
    output::tip("Run `passvault add <name>` to add a credential.");
    output::tip("Run `passvault backup <file>` to export an encrypted backup.");

    Ok(())
}
