//! In-memory CRUD over the decrypted credential set.
//!
//! `CredentialStore` holds the plaintext credentials of an unlocked
//! vault in insertion order.  It never touches the disk or any key
//! material — persistence is `VaultSession::persist`, which serializes
//! the whole set and encrypts it in one piece.

use chrono::Utc;

use crate::errors::{PassVaultError, Result};

use super::credential::{new_credential_id, Credential, CredentialUpdate};

/// Maximum accepted length for a credential name.
const MAX_NAME_LEN: usize = 256;

/// Passwords shorter than this count as weak in `stats`.
const WEAK_PASSWORD_LEN: usize = 8;

/// The in-memory credential set of an unlocked vault.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CredentialStore {
    credentials: Vec<Credential>,
}

/// Summary counters over a credential set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultStats {
    pub total: usize,
    pub with_notes: usize,
    pub weak_passwords: usize,
    pub strong_passwords: usize,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-deserialized credentials.
    pub fn from_credentials(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    // ------------------------------------------------------------------
    // CRUD
    // ------------------------------------------------------------------

    /// Add a new credential and return its id.
    ///
    /// `created_at` and `updated_at` start out equal.
    pub fn add(
        &mut self,
        name: &str,
        username: &str,
        password: &str,
        notes: &str,
    ) -> Result<String> {
        Self::validate_name(name)?;

        let id = self.unique_id();
        let now = Utc::now();

        self.credentials.push(Credential {
            id: id.clone(),
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            notes: notes.to_string(),
            created_at: now,
            updated_at: now,
        });

        Ok(id)
    }

    /// Look up a credential by id.
    pub fn get(&self, id: &str) -> Result<&Credential> {
        self.credentials
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| PassVaultError::CredentialNotFound(id.to_string()))
    }

    /// All credentials, in insertion order.
    pub fn list(&self) -> &[Credential] {
        &self.credentials
    }

    /// Apply a partial update to the credential with the given id.
    ///
    /// Only supplied fields change; `updated_at` is refreshed and
    /// `created_at` is left untouched.
    pub fn update(&mut self, id: &str, update: CredentialUpdate) -> Result<()> {
        if let Some(ref name) = update.name {
            Self::validate_name(name)?;
        }

        let cred = self
            .credentials
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| PassVaultError::CredentialNotFound(id.to_string()))?;

        if let Some(name) = update.name {
            cred.name = name;
        }
        if let Some(username) = update.username {
            cred.username = username;
        }
        if let Some(password) = update.password {
            cred.password = password;
        }
        if let Some(notes) = update.notes {
            cred.notes = notes;
        }
        cred.updated_at = Utc::now();

        Ok(())
    }

    /// Remove a credential permanently.  No tombstone is kept.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let index = self
            .credentials
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| PassVaultError::CredentialNotFound(id.to_string()))?;

        self.credentials.remove(index);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lookup helpers
    // ------------------------------------------------------------------

    /// Find a credential by its display name (first match).
    pub fn find_by_name(&self, name: &str) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.name == name)
    }

    /// Returns the number of credentials in the store.
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    /// Returns `true` if the store holds no credentials.
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    // ------------------------------------------------------------------
    // Import support
    // ------------------------------------------------------------------

    /// Merge another credential set into this one.
    ///
    /// Entries whose name matches an existing credential replace it in
    /// place; the rest are appended in their original order.  Returns
    /// the number of credentials taken from `other`.
    pub fn merge(&mut self, other: CredentialStore) -> usize {
        let mut merged = 0;

        for incoming in other.credentials {
            merged += 1;
            match self
                .credentials
                .iter_mut()
                .find(|c| c.name == incoming.name)
            {
                Some(existing) => *existing = incoming,
                None => self.credentials.push(incoming),
            }
        }

        merged
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    /// Summary counters: totals, entries with notes, weak passwords.
    pub fn stats(&self) -> VaultStats {
        let total = self.credentials.len();
        let with_notes = self
            .credentials
            .iter()
            .filter(|c| !c.notes.is_empty())
            .count();
        let weak_passwords = self
            .credentials
            .iter()
            .filter(|c| c.password.len() < WEAK_PASSWORD_LEN)
            .count();

        VaultStats {
            total,
            with_notes,
            weak_passwords,
            strong_passwords: total - weak_passwords,
        }
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Pick an id not already present in the set.
    fn unique_id(&self) -> String {
        loop {
            let id = new_credential_id();
            if !self.credentials.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }

    /// Validate that a credential name is usable.
    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(PassVaultError::InvalidCredential(
                "name cannot be empty".into(),
            ));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(PassVaultError::InvalidCredential(format!(
                "name cannot exceed {MAX_NAME_LEN} characters"
            )));
        }
        Ok(())
    }
}
