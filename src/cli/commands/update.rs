//! `passvault update` — change fields of an existing credential.

use crate::cli::output;
use crate::cli::{resolve_credential_id, unlock_session, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::CredentialUpdate;

/// Execute the `update` command.
pub fn execute(
    cli: &Cli,
    name: &str,
    username: Option<&str>,
    password: bool,
    notes: Option<&str>,
    rename: Option<&str>,
) -> Result<()> {
    // Collect the new password up front so a typo'd prompt doesn't
    // leave a half-applied update.
    let new_password = if password {
        let pw = dialoguer::Password::new()
            .with_prompt("Enter new password")
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;
        Some(pw)
    } else {
        None
    };

    let update = CredentialUpdate {
        name: rename.map(str::to_string),
        username: username.map(str::to_string),
        password: new_password,
        notes: notes.map(str::to_string),
    };

    if update.is_empty() {
        return Err(PassVaultError::CommandFailed(
            "nothing to update — pass at least one of --username, --password, --notes, --rename"
                .into(),
        ));
    }

    let mut session = unlock_session(cli)?;
    let id = resolve_credential_id(&session, name)?;

    session.store_mut()?.update(&id, update)?;
    session.persist()?;

    output::success(&format!("Credential '{name}' updated"));

    Ok(())
}
