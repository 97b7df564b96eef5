//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM envelope encryption and decryption (`envelope`)
//! - PBKDF2-HMAC-SHA256 passphrase-based key derivation (`kdf`)
//! - The zeroize-on-drop `MasterKey` and HKDF file-key derivation (`keys`)
//! - Secure random password generation (`password`)

pub mod envelope;
pub mod kdf;
pub mod keys;
pub mod password;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_master_key, ...};
pub use envelope::{decrypt, encrypt};
pub use kdf::{derive_master_key, generate_salt, DEFAULT_ITERATIONS, MIN_ITERATIONS};
pub use keys::MasterKey;
pub use password::generate_password;
