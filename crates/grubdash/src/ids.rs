//! Identifier generation shared by both resource actors.

/// Returns 32 lowercase hex characters drawn from 16 random bytes.
pub fn random_hex_id() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}
