//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultSession;

/// Minimum master passphrase length to prevent trivially weak choices.
const MIN_PASSPHRASE_LEN: usize = 8;

/// PassVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (default: ./passvault.vault)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new vault
    Init {
        /// PBKDF2 iteration count for the new vault (overrides config)
        #[arg(long)]
        iterations: Option<u32>,
    },

    /// Add a credential
    Add {
        /// Credential name (e.g. "github")
        name: String,

        /// Login username
        #[arg(short, long, default_value = "")]
        username: String,

        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Generate a random password instead of prompting
        #[arg(short, long)]
        generate: bool,

        /// Length of the generated password
        #[arg(long, default_value_t = crate::crypto::password::DEFAULT_LENGTH)]
        length: usize,
    },

    /// Show a credential
    Show {
        /// Credential name or id
        name: String,

        /// Print the password instead of masking it
        #[arg(long)]
        reveal: bool,
    },

    /// List all credentials
    List,

    /// Update fields of a credential
    Update {
        /// Credential name or id
        name: String,

        /// New login username
        #[arg(short, long)]
        username: Option<String>,

        /// Prompt for a new password
        #[arg(short, long)]
        password: bool,

        /// New notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Rename the credential
        #[arg(long)]
        rename: Option<String>,
    },

    /// Delete a credential
    Delete {
        /// Credential name or id
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random password without storing it
    Generate {
        /// Password length
        #[arg(short, long, default_value_t = crate::crypto::password::DEFAULT_LENGTH)]
        length: usize,

        /// Exclude symbols from the password
        #[arg(long)]
        no_symbols: bool,
    },

    /// Change the vault's master passphrase
    ChangePassword,

    /// Export an encrypted backup
    Backup {
        /// Destination file (e.g. passvault-2026.vbak)
        dest: PathBuf,
    },

    /// Restore credentials from an encrypted backup
    Restore {
        /// Backup file to restore from
        file: PathBuf,

        /// Replace the whole credential set instead of merging
        #[arg(long)]
        replace: bool,
    },

    /// Show statistics about the stored credentials
    Stats,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master passphrase, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (scripts/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory
/// on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master passphrase")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new passphrase with confirmation (used during `init`
/// and `change-password`).
///
/// Also respects `PASSVAULT_PASSWORD` for scripted/CI usage.
/// Enforces a minimum passphrase length.
pub fn prompt_new_passphrase(prompt: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSPHRASE_LEN {
                return Err(PassVaultError::CommandFailed(format!(
                    "passphrase must be at least {MIN_PASSPHRASE_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let passphrase = dialoguer::Password::new()
            .with_prompt(prompt)
            .with_confirmation(
                "Confirm master passphrase",
                "Passphrases do not match, try again",
            )
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;

        if passphrase.len() < MIN_PASSPHRASE_LEN {
            output::warning(&format!(
                "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(passphrase));
    }
}

/// Get the backup passphrase, trying `PASSVAULT_BACKUP_PASSWORD` first
/// so backups can be scripted with a passphrase independent of the
/// live vault's.
pub fn prompt_backup_passphrase(confirm: bool) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_BACKUP_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let mut prompt = dialoguer::Password::new().with_prompt("Enter backup passphrase");
    if confirm {
        prompt = prompt.with_confirmation(
            "Confirm backup passphrase",
            "Passphrases do not match, try again",
        );
    }
    let pw = prompt
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Build the path to the vault file from the CLI arguments, falling
/// back to `.passvault.toml` settings.
pub fn vault_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.vault {
        return Ok(path.clone());
    }

    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    Ok(settings.vault_path(&cwd))
}

/// Open the vault and unlock it with the master passphrase.
///
/// The common preamble of every command that touches credentials.
pub fn unlock_session(cli: &Cli) -> Result<VaultSession> {
    let path = vault_path(cli)?;
    let mut session = VaultSession::open(&path)?;

    let passphrase = prompt_passphrase()?;
    session.unlock(passphrase.as_bytes())?;

    Ok(session)
}

/// Resolve a credential reference (name first, then id) to its id.
pub fn resolve_credential_id(session: &VaultSession, reference: &str) -> Result<String> {
    let store = session.store()?;

    if let Some(cred) = store.find_by_name(reference) {
        return Ok(cred.id.clone());
    }
    if let Ok(cred) = store.get(reference) {
        return Ok(cred.id.clone());
    }

    Err(PassVaultError::CredentialNotFound(reference.to_string()))
}
