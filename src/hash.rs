use sha1::{Digest, Sha1};

/// Maps clamped key bytes to a bit position in `[0, 2^width)`.
///
/// SHA-1 of `data`, first four digest bytes read little-endian, masked with
/// `mask = 2^width - 1`.  Deterministic across calls and across levels —
/// only the per-level seed varies the effective position, via XOR.
#[inline]
pub(crate) fn position(data: &[u8], mask: u32) -> u32 {
    let digest = Sha1::digest(data);
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]) & mask
}

/// Seed for a construction-time level identity.
///
/// Each of the `depth` levels gets a seed derived once from its one-byte
/// identity; rotation permutes which level holds which seed but never
/// regenerates one.
#[inline]
pub(crate) fn level_seed(identity: u8, mask: u32) -> u32 {
    position(&[identity], mask)
}
