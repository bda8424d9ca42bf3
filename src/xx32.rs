//! Thin wrapper around the `xxhash-rust` crate pinning the XXH32 surface the
//! rest of this crate relies on.
//!
//! Only XXH32 is used: the streaming [`Xxh32`] state for incremental hashing
//! and the stateless [`oneshot`] form for the single-buffer fast path.
//! `Xxh32::digest` takes `&self`, so querying a digest never invalidates the
//! running state.

pub(crate) use xxhash_rust::xxh32::Xxh32;

/// One-shot XXH32 — equivalent to the reference `XXH32(data, len, seed)`.
#[inline]
pub(crate) fn oneshot(data: &[u8], seed: u32) -> u32 {
    xxhash_rust::xxh32::xxh32(data, seed)
}

// =============================================================================
// Tests
// =============================================================================
