//! Passphrase-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is the tunable work factor that slows down
//! offline brute-force attacks.  It is chosen at vault creation,
//! stored in the vault header, and always read back from the file —
//! raising the default never invalidates existing vaults.

use hmac::Hmac;
use sha2::Sha256;

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{PassVaultError, Result};

/// Length of the salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count for new vaults (OWASP 2023 figure
/// for HMAC-SHA256).
pub const DEFAULT_ITERATIONS: u32 = 600_000;

/// Minimum accepted iteration count.
pub const MIN_ITERATIONS: u32 = 100_000;

/// Minimum accepted salt length in bytes.
pub const MIN_SALT_LEN: usize = 16;

/// Derive a 32-byte master key from a passphrase and salt.
///
/// The same passphrase + salt + iterations always produce the same key.
/// Rejects iteration counts and salts below the safety floors.
pub fn derive_master_key(
    passphrase: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<[u8; KEY_LEN]> {
    if iterations < MIN_ITERATIONS {
        return Err(PassVaultError::InvalidKdfParams(format!(
            "iteration count must be at least {MIN_ITERATIONS} (got {iterations})"
        )));
    }
    if salt.len() < MIN_SALT_LEN {
        return Err(PassVaultError::InvalidKdfParams(format!(
            "salt must be at least {MIN_SALT_LEN} bytes (got {})",
            salt.len()
        )));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(passphrase, salt, iterations, &mut key)
        .map_err(|e| PassVaultError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(key)
}

/// Generate a cryptographically random 32-byte salt.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| PassVaultError::KeyDerivationFailed(format!("OS RNG failed: {e}")))?;
    Ok(salt)
}
