//! Hashing - SHA-256 digests of generated output
//!
//! Lets callers tell whether a regeneration changed anything.

use sha2::{Digest, Sha256};

use crate::stylesheet::StylesheetFragment;

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Digest of the exact bytes that get written for a fragment
pub fn fragment_hash(fragment: &StylesheetFragment) -> String {
    sha256_hex(fragment.as_str().as_bytes())
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}
