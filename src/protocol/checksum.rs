//! FNV-1a 32-bit checksum engine.
//!
//! The wire format mandates this exact algorithm: offset basis `0x811c9dc5`,
//! prime `0x01000193`, XOR-then-multiply per byte with wrapping 32-bit
//! arithmetic. Total over any byte sequence, including empty input.

pub const FNV1_32A_INIT: u32 = 0x811c_9dc5;
pub const FNV_32_PRIME: u32 = 0x0100_0193;

/// FNV-1a 32-bit digest of `data`.
pub fn fnv1a_32(data: &[u8]) -> u32 {
    data.iter().fold(FNV1_32A_INIT, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_32_PRIME)
    })
}

/// Wire representation of a digest: lowercase hex, zero-padded to 8 chars.
///
/// Callers never see the raw integer; the textual form is the stable one.
pub fn checksum_hex(digest: u32) -> String {
    format!("{digest:08x}")
}
