//! Secure random password generation.
//!
//! Generated passwords always contain at least one lowercase letter,
//! one uppercase letter, and one digit — plus one symbol unless
//! symbols are disabled.  The remaining characters are drawn uniformly
//! from the full character set, then the whole password is shuffled so
//! the guaranteed characters don't sit in predictable positions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{PassVaultError, Result};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Default length for generated passwords.
pub const DEFAULT_LENGTH: usize = 16;

/// Generate a random password of `length` characters.
pub fn generate_password(length: usize, include_symbols: bool) -> Result<String> {
    let required_classes = if include_symbols { 4 } else { 3 };
    if length < required_classes {
        return Err(PassVaultError::CommandFailed(format!(
            "password length must be at least {required_classes}"
        )));
    }

    let mut rng = rand::rng();
    let mut chars: Vec<u8> = Vec::with_capacity(length);

    // One character from each required class.
    chars.push(pick(&mut rng, LOWERCASE));
    chars.push(pick(&mut rng, UPPERCASE));
    chars.push(pick(&mut rng, DIGITS));
    if include_symbols {
        chars.push(pick(&mut rng, SYMBOLS));
    }

    // Fill the rest uniformly from the combined set.
    let mut all: Vec<u8> = Vec::new();
    all.extend_from_slice(LOWERCASE);
    all.extend_from_slice(UPPERCASE);
    all.extend_from_slice(DIGITS);
    if include_symbols {
        all.extend_from_slice(SYMBOLS);
    }

    while chars.len() < length {
        chars.push(pick(&mut rng, &all));
    }

    chars.shuffle(&mut rng);

    String::from_utf8(chars)
        .map_err(|_| PassVaultError::CommandFailed("generated password is not ASCII".into()))
}

fn pick(rng: &mut impl Rng, set: &[u8]) -> u8 {
    set[rng.random_range(0..set.len())]
}
