//! Master key ownership and file-key derivation.
//!
//! The PBKDF2 output is the *master* key.  The AES key that actually
//! encrypts the vault payload is expanded from it with HKDF-SHA256 and
//! a fixed context string, keeping the raw KDF output out of the
//! cipher.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::errors::{PassVaultError, Result};

/// Length of derived sub-keys (256 bits).
const KEY_LEN: usize = 32;

/// Context string binding the file key to its purpose.
const FILE_KEY_INFO: &[u8] = b"passvault:file-key";

/// A wrapper around a 32-byte master key that zeroes its memory when
/// dropped.
///
/// `VaultSession` holds exactly one of these while unlocked; locking
/// the session drops it.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct MasterKey {
    bytes: [u8; KEY_LEN],
}

impl MasterKey {
    /// Create a new `MasterKey` from raw KDF output.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Derive the AES file key used to encrypt the vault payload.
    pub fn derive_file_key(&self) -> Result<[u8; KEY_LEN]> {
        // The master key already has full entropy (it came out of
        // PBKDF2), so we skip extract and expand directly.
        let hk = Hkdf::<Sha256>::new(None, &self.bytes);

        let mut okm = [0u8; KEY_LEN];
        hk.expand(FILE_KEY_INFO, &mut okm)
            .map_err(|e| PassVaultError::KeyDerivationFailed(format!("HKDF expand failed: {e}")))?;

        Ok(okm)
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
