//! Credential record types stored inside a vault.
//!
//! A `Credential` is one entry in the vault: a label, the login
//! username, the stored password, and free-form notes.  The whole set
//! is serialized as a JSON array (preserving insertion order) and
//! encrypted in one piece — individual fields are never encrypted on
//! their own.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single credential entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Stable unique identifier (16 hex chars), assigned at creation.
    pub id: String,

    /// Display label (e.g. "github", "work email").
    pub name: String,

    /// Login username or account identifier.
    pub username: String,

    /// The stored password.
    pub password: String,

    /// Free-form notes.
    pub notes: String,

    /// When this credential was first created.
    pub created_at: DateTime<Utc>,

    /// When this credential was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A partial update to an existing credential.
///
/// `None` fields are left untouched; `Some` fields replace the stored
/// value.  `updated_at` is refreshed whenever any field changes.
#[derive(Debug, Clone, Default)]
pub struct CredentialUpdate {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub notes: Option<String>,
}

impl CredentialUpdate {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.notes.is_none()
    }
}

/// Generate a fresh random credential id (8 random bytes as hex).
pub(crate) fn new_credential_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 8] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
