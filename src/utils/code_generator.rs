//! Short id generation.
//!
//! Produces fixed-length, URL-safe identifiers from OS entropy. Collision
//! handling (bounded retry against the store) lives in the registry; this
//! module only guarantees uniform sampling over the alphabet.

/// Length of every generated short id.
pub const SHORT_ID_LEN: usize = 8;

/// URL-safe alphabet: alphanumerics minus the ambiguous-looking
/// `0`, `O`, `I` and `l`. 57 symbols, so the id space is 57^8 (~1.1e14).
const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Generates a cryptographically secure random 8-character short id.
///
/// Uses `getrandom` for entropy and rejection sampling to avoid modulo bias
/// over the 57-symbol alphabet.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_short_id() -> String {
    // Largest multiple of the alphabet size below 256; bytes at or above it
    // are rejected to keep the distribution uniform.
    let limit = (u8::MAX as usize + 1) - (u8::MAX as usize + 1) % ALPHABET.len();

    let mut id = String::with_capacity(SHORT_ID_LEN);
    let mut buffer = [0u8; 2 * SHORT_ID_LEN];

    while id.len() < SHORT_ID_LEN {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            if (byte as usize) < limit {
                id.push(ALPHABET[byte as usize % ALPHABET.len()] as char);
                if id.len() == SHORT_ID_LEN {
                    break;
                }
            }
        }
    }

    id
}
