use sha1::{Digest, Sha1};

/// Used when a key folds to zero, which xorshift can never leave.
pub const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Hashes seed material into a stable 60-bit value.
///
/// Takes the first 8 bytes of the SHA-1 digest and shifts right by 4 bits,
/// the same as reading the first 15 hex characters of the digest.
pub fn hash_key(material: &str) -> u64 {
    let digest = Sha1::digest(material.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head) >> 4
}

/// Folds a key hash into a non-zero 32-bit PRNG seed.
pub fn seed_from_hash(hash: u64) -> u32 {
    let folded = (hash ^ (hash >> 32)) as u32;
    if folded == 0 {
        FALLBACK_SEED
    } else {
        folded
    }
}
