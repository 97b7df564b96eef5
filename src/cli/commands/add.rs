//! `passvault add` — add a credential to the vault.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{unlock_session, Cli};
use crate::crypto::password::generate_password;
use crate::errors::{PassVaultError, Result};

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    name: &str,
    username: &str,
    notes: &str,
    generate: bool,
    length: usize,
) -> Result<()> {
    // Determine the password from one of three sources.
    let (password, generated) = if generate {
        (Zeroizing::new(generate_password(length, true)?), true)
    } else if !io::stdin().is_terminal() {
        // Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        (Zeroizing::new(buf.trim_end().to_string()), false)
    } else {
        let pw = dialoguer::Password::new()
            .with_prompt(format!("Enter password for {name}"))
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;
        (Zeroizing::new(pw), false)
    };

    let mut session = unlock_session(cli)?;

    // Names double as the CLI lookup key, so keep them unique here
    // even though the engine only requires unique ids.
    if session.store()?.find_by_name(name).is_some() {
        return Err(PassVaultError::CommandFailed(format!(
            "credential '{name}' already exists — use `passvault update`"
        )));
    }

    let id = session.store_mut()?.add(name, username, &password, notes)?;
    session.persist()?;

    output::success(&format!(
        "Credential '{}' added ({} total)",
        name,
        session.store()?.len()
    ));
    output::info(&format!("Id: {id}"));
    if generated {
        output::info(&format!("Generated password: {}", password.as_str()));
    }

    Ok(())
}
