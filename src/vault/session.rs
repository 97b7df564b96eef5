//! The vault session — the single owner of a vault's key material and
//! decrypted credential set.
//!
//! A session is either **Locked** (header and encrypted payload in
//! memory, no key, no plaintext) or **Unlocked** (holding the one live
//! `MasterKey` and `CredentialStore` for the process).  All mutation
//! goes through `store_mut`, and every mutating or persisting method
//! takes `&mut self`, so a session shared across threads behind a
//! `Mutex` is serialized by construction.
//!
//! Mutations are never auto-saved: callers batch edits on the store and
//! flush them with an explicit `persist`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use zeroize::Zeroize;

use crate::crypto::envelope::{decrypt, encrypt};
use crate::crypto::kdf::{derive_master_key, generate_salt, DEFAULT_ITERATIONS};
use crate::crypto::keys::MasterKey;
use crate::errors::{PassVaultError, Result};

use super::credential::Credential;
use super::format::{self, VaultHeader, CURRENT_VERSION};
use super::store::CredentialStore;

enum State {
    Locked,
    Unlocked {
        key: MasterKey,
        store: CredentialStore,
    },
}

/// A handle to one vault file and its lifecycle.
///
/// Create with [`VaultSession::create`] (new vault, returned unlocked)
/// or [`VaultSession::open`] (existing vault, returned locked).
pub struct VaultSession {
    /// Path to the `.vault` file on disk.
    path: PathBuf,

    /// Header metadata (salt, iteration count, creation time).
    header: VaultHeader,

    /// The encrypted payload as last read from or written to disk.
    ciphertext: Vec<u8>,

    state: State,
}

impl VaultSession {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a brand-new vault file at `path` and return an unlocked
    /// session for it.
    ///
    /// Generates a random salt, derives the master key from the
    /// passphrase, and writes an empty, encrypted credential set to
    /// disk.  Refuses to overwrite an existing file.
    ///
    /// Pass `None` for `iterations` to use the current default; the
    /// chosen count is stored in the header either way.
    pub fn create(path: &Path, passphrase: &[u8], iterations: Option<u32>) -> Result<Self> {
        if path.exists() {
            return Err(PassVaultError::VaultAlreadyExists(path.to_path_buf()));
        }

        let iterations = iterations.unwrap_or(DEFAULT_ITERATIONS);
        let salt = generate_salt()?;

        let mut master_bytes = derive_master_key(passphrase, &salt, iterations)?;
        let key = MasterKey::new(master_bytes);
        master_bytes.zeroize();

        let header = VaultHeader {
            version: CURRENT_VERSION,
            salt: salt.to_vec(),
            iterations,
            created_at: Utc::now(),
        };

        let mut session = Self {
            path: path.to_path_buf(),
            header,
            ciphertext: Vec::new(),
            state: State::Unlocked {
                key,
                store: CredentialStore::new(),
            },
        };

        // Persist the empty vault so the file exists from the start.
        session.persist()?;

        Ok(session)
    }

    /// Open an existing vault file and return a locked session.
    ///
    /// Only the structural layout is validated here; the passphrase is
    /// not needed until [`unlock`](Self::unlock).
    pub fn open(path: &Path) -> Result<Self> {
        let raw = format::read_vault(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            header: raw.header,
            ciphertext: raw.ciphertext,
            state: State::Locked,
        })
    }

    // ------------------------------------------------------------------
    // Lock / unlock
    // ------------------------------------------------------------------

    /// Unlock the session with the master passphrase.
    ///
    /// Derives the key using the salt and iteration count stored in the
    /// file's own header, then decrypts and deserializes the credential
    /// set.  On failure the session stays locked; a wrong passphrase
    /// and a tampered file both surface as `AuthenticationFailed` and
    /// are deliberately indistinguishable.
    pub fn unlock(&mut self, passphrase: &[u8]) -> Result<()> {
        let mut master_bytes =
            derive_master_key(passphrase, &self.header.salt, self.header.iterations)?;
        let key = MasterKey::new(master_bytes);
        master_bytes.zeroize();

        let mut file_key = key.derive_file_key()?;
        let decrypted = decrypt(&file_key, &self.ciphertext);
        file_key.zeroize();

        let mut plaintext = decrypted?;
        let parsed: serde_json::Result<Vec<Credential>> = serde_json::from_slice(&plaintext);
        plaintext.zeroize();

        // Decryption succeeded but the payload doesn't parse: the file
        // was authentic yet structurally broken, which is a format
        // error rather than a passphrase problem.
        let credentials = parsed
            .map_err(|e| PassVaultError::InvalidVaultFormat(format!("credential payload: {e}")))?;

        self.state = State::Unlocked {
            key,
            store: CredentialStore::from_credentials(credentials),
        };

        Ok(())
    }

    /// Lock the session: erase the derived key and discard the
    /// in-memory credential set.  Unsaved mutations are lost.
    pub fn lock(&mut self) {
        // Dropping the MasterKey zeroizes it.
        self.state = State::Locked;
    }

    /// Returns `true` while the session holds a decrypted store.
    pub fn is_unlocked(&self) -> bool {
        matches!(self.state, State::Unlocked { .. })
    }

    // ------------------------------------------------------------------
    // Store access
    // ------------------------------------------------------------------

    /// The decrypted credential store, or `VaultLocked`.
    pub fn store(&self) -> Result<&CredentialStore> {
        match &self.state {
            State::Unlocked { store, .. } => Ok(store),
            State::Locked => Err(PassVaultError::VaultLocked),
        }
    }

    /// Mutable access to the credential store, or `VaultLocked`.
    ///
    /// Changes made here live only in memory until `persist` is called.
    pub fn store_mut(&mut self) -> Result<&mut CredentialStore> {
        match &mut self.state {
            State::Unlocked { store, .. } => Ok(store),
            State::Locked => Err(PassVaultError::VaultLocked),
        }
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize the credential set, encrypt it under a fresh nonce,
    /// and atomically replace the vault file.
    pub fn persist(&mut self) -> Result<()> {
        let (key, store) = match &self.state {
            State::Unlocked { key, store } => (key, store),
            State::Locked => return Err(PassVaultError::VaultLocked),
        };

        let mut plaintext = serde_json::to_vec(store.list())
            .map_err(|e| PassVaultError::SerializationError(format!("credentials: {e}")))?;

        let mut file_key = key.derive_file_key()?;
        let encrypted = encrypt(&file_key, &plaintext);
        file_key.zeroize();
        plaintext.zeroize();

        let ciphertext = encrypted?;
        format::write_vault(&self.path, &self.header, &ciphertext)?;
        self.ciphertext = ciphertext;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Backup
    // ------------------------------------------------------------------

    /// Export the current credential set to an encrypted backup file.
    ///
    /// The backup gets its own salt and key derived from
    /// `backup_passphrase`, so it can be restored independently of the
    /// live vault's passphrase.  Written with the same atomic protocol;
    /// the destination must differ from the live vault path.
    pub fn export_backup(
        &self,
        dest: &Path,
        backup_passphrase: &[u8],
        iterations: Option<u32>,
    ) -> Result<()> {
        let store = self.store()?;

        if dest == self.path {
            return Err(PassVaultError::CommandFailed(
                "backup destination must differ from the live vault path".into(),
            ));
        }

        let iterations = iterations.unwrap_or(DEFAULT_ITERATIONS);
        let salt = generate_salt()?;

        let mut master_bytes = derive_master_key(backup_passphrase, &salt, iterations)?;
        let key = MasterKey::new(master_bytes);
        master_bytes.zeroize();

        let header = VaultHeader {
            version: CURRENT_VERSION,
            salt: salt.to_vec(),
            iterations,
            created_at: Utc::now(),
        };

        let mut plaintext = serde_json::to_vec(store.list())
            .map_err(|e| PassVaultError::SerializationError(format!("credentials: {e}")))?;

        let mut file_key = key.derive_file_key()?;
        let encrypted = encrypt(&file_key, &plaintext);
        file_key.zeroize();
        plaintext.zeroize();

        format::write_vault(dest, &header, &encrypted?)
    }

    /// Decrypt a backup (or any vault file) without touching the live
    /// vault, returning its credential set.
    ///
    /// The caller decides whether to merge the result into an unlocked
    /// session's store or replace the store outright.
    pub fn import_backup(path: &Path, passphrase: &[u8]) -> Result<CredentialStore> {
        let raw = format::read_vault(path)?;

        let mut master_bytes =
            derive_master_key(passphrase, &raw.header.salt, raw.header.iterations)?;
        let key = MasterKey::new(master_bytes);
        master_bytes.zeroize();

        let mut file_key = key.derive_file_key()?;
        let decrypted = decrypt(&file_key, &raw.ciphertext);
        file_key.zeroize();

        let mut plaintext = decrypted?;
        let parsed: serde_json::Result<Vec<Credential>> = serde_json::from_slice(&plaintext);
        plaintext.zeroize();

        let credentials = parsed
            .map_err(|e| PassVaultError::InvalidVaultFormat(format!("credential payload: {e}")))?;

        Ok(CredentialStore::from_credentials(credentials))
    }

    // ------------------------------------------------------------------
    // Re-keying
    // ------------------------------------------------------------------

    /// Change the master passphrase: fresh salt, new derived key, and
    /// an immediate re-encrypted save of the current set.
    pub fn change_passphrase(
        &mut self,
        new_passphrase: &[u8],
        iterations: Option<u32>,
    ) -> Result<()> {
        if !self.is_unlocked() {
            return Err(PassVaultError::VaultLocked);
        }

        let iterations = iterations.unwrap_or(DEFAULT_ITERATIONS);
        let salt = generate_salt()?;

        let mut master_bytes = derive_master_key(new_passphrase, &salt, iterations)?;
        let new_key = MasterKey::new(master_bytes);
        master_bytes.zeroize();

        if let State::Unlocked { key, .. } = &mut self.state {
            // The old key is dropped here and zeroized.
            *key = new_key;
        }

        self.header.salt = salt.to_vec();
        self.header.iterations = iterations;

        self.persist()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the PBKDF2 iteration count stored in the header.
    pub fn iterations(&self) -> u32 {
        self.header.iterations
    }

    /// Returns the vault creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.header.created_at
    }
}
