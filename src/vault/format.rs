//! Binary vault file format and the atomic write protocol.
//!
//! A `.vault` file has this layout:
//!
//! ```text
//! [PVLT: 4 bytes][version: 1 byte][header_len: 4 bytes LE][header JSON][envelope]
//! ```
//!
//! - **Magic** (`PVLT`): identifies the file as a PassVault vault.
//! - **Version**: format version (currently `1`).
//! - **Header length**: little-endian u32 telling us where the header
//!   JSON ends and the encrypted payload begins.
//! - **Header JSON**: serialized `VaultHeader` — salt, iteration count,
//!   creation time.  Stored unencrypted so the file stays
//!   self-describing: unlocking always uses the salt and iteration
//!   count read from the file, never a global default.
//! - **Envelope**: the AES-256-GCM blob (nonce + ciphertext + tag)
//!   holding the serialized credential set.
//!
//! Backup files share this exact structure at a different path.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::envelope::{NONCE_LEN, TAG_LEN};
use crate::errors::{PassVaultError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic bytes at the start of every vault file.
const MAGIC: &[u8; 4] = b"PVLT";

/// Current binary format version.
pub const CURRENT_VERSION: u8 = 1;

/// Fixed-size prefix: 4 (magic) + 1 (version) + 4 (header_len).
const PREFIX_LEN: usize = 9;

// ---------------------------------------------------------------------------
// VaultHeader
// ---------------------------------------------------------------------------

/// Metadata stored unencrypted at the beginning of a vault file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultHeader {
    /// Format version.
    pub version: u8,

    /// The salt used for PBKDF2 key derivation (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,

    /// PBKDF2 iteration count used at creation.  Always read back from
    /// here on unlock so old vaults survive default changes.
    pub iterations: u32,

    /// When this vault was first created.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Raw data read from a vault file on disk: the decoded header plus
/// the still-encrypted envelope bytes.
pub struct RawVault {
    pub header: VaultHeader,
    pub ciphertext: Vec<u8>,
}

/// Read a vault file from disk without decrypting anything.
///
/// Fails `VaultNotFound` if the file is missing and
/// `InvalidVaultFormat` if the structural layout is broken.  No key
/// material is needed — authentication happens later, at decrypt time.
pub fn read_vault(path: &Path) -> Result<RawVault> {
    if !path.exists() {
        return Err(PassVaultError::VaultNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;

    if data.len() < PREFIX_LEN {
        return Err(PassVaultError::InvalidVaultFormat(
            "file too small to be a valid vault".into(),
        ));
    }

    // --- Parse the fixed-size prefix ---

    if &data[0..4] != MAGIC {
        return Err(PassVaultError::InvalidVaultFormat(
            "missing PVLT magic bytes".into(),
        ));
    }

    let version = data[4];
    if version != CURRENT_VERSION {
        return Err(PassVaultError::InvalidVaultFormat(format!(
            "unsupported version {version}, expected {CURRENT_VERSION}"
        )));
    }

    let header_len_u32 = u32::from_le_bytes(
        data[5..9]
            .try_into()
            .map_err(|_| PassVaultError::InvalidVaultFormat("bad header length".into()))?,
    );
    let header_len = usize::try_from(header_len_u32).map_err(|_| {
        PassVaultError::InvalidVaultFormat(format!(
            "header length {header_len_u32} exceeds platform address space"
        ))
    })?;

    let header_end = PREFIX_LEN + header_len;
    if header_end > data.len() {
        return Err(PassVaultError::InvalidVaultFormat(
            "header length exceeds file size".into(),
        ));
    }

    // --- Decode the header, keep the envelope opaque ---

    let header: VaultHeader = serde_json::from_slice(&data[PREFIX_LEN..header_end])
        .map_err(|e| PassVaultError::InvalidVaultFormat(format!("header JSON: {e}")))?;

    let ciphertext = data[header_end..].to_vec();

    // The smallest possible envelope wraps an empty payload.
    if ciphertext.len() < NONCE_LEN + TAG_LEN {
        return Err(PassVaultError::InvalidVaultFormat(
            "encrypted payload is truncated".into(),
        ));
    }

    Ok(RawVault { header, ciphertext })
}

/// Write a vault file to disk **atomically**.
///
/// 1. Serialize the header and assemble the full binary blob.
/// 2. Write it to a temp file in the same directory.
/// 3. `sync_all` the temp file so the bytes are durable.
/// 4. Rename the temp file over the target path.
///
/// A crash before the rename leaves the previous file byte-identical;
/// the rename itself is all-or-nothing on the same filesystem, so no
/// reader ever observes a half-written vault.
pub fn write_vault(path: &Path, header: &VaultHeader, ciphertext: &[u8]) -> Result<()> {
    let header_bytes = serde_json::to_vec(header)
        .map_err(|e| PassVaultError::SerializationError(format!("header: {e}")))?;

    let header_len = u32::try_from(header_bytes.len()).map_err(|_| {
        PassVaultError::SerializationError(format!(
            "header length {} exceeds u32::MAX",
            header_bytes.len()
        ))
    })?;

    let total = PREFIX_LEN + header_bytes.len() + ciphertext.len();
    let mut buf = Vec::with_capacity(total);

    buf.extend_from_slice(MAGIC); // 4 bytes
    buf.push(CURRENT_VERSION); // 1 byte
    buf.extend_from_slice(&header_len.to_le_bytes()); // 4 bytes LE
    buf.extend_from_slice(&header_bytes); // header JSON
    buf.extend_from_slice(ciphertext); // AEAD envelope

    // The temp file lives in the same directory so the rename is
    // guaranteed to stay on one filesystem.
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    let mut tmp = fs::File::create(&tmp_path)?;
    restrict_permissions(&tmp)?;
    tmp.write_all(&buf)?;
    tmp.sync_all()?;
    drop(tmp);

    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Restrict a vault file to owner read/write (0600) on Unix.
#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = file.metadata()?.permissions();
    perms.set_mode(0o600);
    file.set_permissions(perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> Result<()> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
