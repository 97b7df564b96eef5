//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - `Credential` and `CredentialUpdate` types (`credential`)
//! - The in-memory `CredentialStore` with CRUD operations (`store`)
//! - The binary vault file format and atomic writes (`format`)
//! - The `VaultSession` lock/unlock/persist lifecycle (`session`)

pub mod credential;
pub mod format;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use credential::{Credential, CredentialUpdate};
pub use format::VaultHeader;
pub use session::VaultSession;
pub use store::{CredentialStore, VaultStats};
