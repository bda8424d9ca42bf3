//! hashxx - Fast non-cryptographic 32-bit hashing over structured values
//!
//! Computes XXH32 digests over heterogeneous inputs: raw byte buffers, nested
//! ordered sequences of values, and an explicit "nothing" marker. Two usage
//! modes share one normalization algorithm:
//!
//! - **One-shot**: [`hashxx`] / [`hashxx_seeded`] / [`hashxx_with`] hash
//!   fully-known input in a single call, with a fast path for the common
//!   single-buffer case.
//! - **Incremental**: [`Hashxx`] accumulates values over time and can be
//!   queried for the running digest at any point.
//!
//! Values are flattened into one byte stream, so the digest depends only on
//! the seed and the bytes in order, never on how the input was grouped into
//! calls or nested into sequences. Decoded text is deliberately rejected:
//! callers pick the byte encoding explicitly.
//!
//! Not cryptographically secure. Use it for checksums, dedup keys, and hash
//! tables, never for anything adversarial.
//!
//! ## Usage
//!
//! ```
//! use hashxx::{hashxx, Hashxx, Value};
//!
//! // One-shot over a single buffer.
//! let digest = hashxx(&[Value::Bytes(b"hello")])?;
//!
//! // Incremental, chunk by chunk; grouping does not matter.
//! let mut acc = Hashxx::new();
//! acc.update(&[Value::Bytes(b"he")])?;
//! acc.update(&[Value::Bytes(b"llo")])?;
//! assert_eq!(acc.digest(), digest);
//! # Ok::<(), hashxx::HashxxError>(())
//! ```

// =============================================================================
// Modules
// =============================================================================

/// Incremental accumulator
pub mod accumulator;

/// Error types
pub mod error;

/// Keyword arguments for the one-shot entry point
pub mod kwargs;

/// One-shot hashing
pub mod oneshot;

/// Input value model
pub mod value;

mod absorb;
mod xx32;

// =============================================================================
// Re-exports
// =============================================================================

pub use accumulator::Hashxx;
pub use error::{HashxxError, HashxxResult};
pub use kwargs::{Kwarg, KwargValue};
pub use oneshot::{hashxx, hashxx_seeded, hashxx_with};
pub use value::Value;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Hashxx: Send);
    assert_impl_all!(HashxxError: Send, Sync);
    assert_impl_all!(Value<'static>: Copy, Send, Sync);

    /// The one-shot shorthand must be equivalent to this simple function.
    fn accumulate(seed: u32, values: &[Value<'_>]) -> u32 {
        let mut acc = Hashxx::with_seed(seed);
        acc.update(values).unwrap();
        acc.digest()
    }

    #[test]
    fn test_oneshot_equals_accumulator() {
        for seed in [0u32, 1, 2, 0xDEAD_BEEF] {
            for bytes in [&b""[..], b"hello", b"goodbye", b"abc"] {
                assert_eq!(
                    hashxx_seeded(seed, &[Value::Bytes(bytes)]).unwrap(),
                    accumulate(seed, &[Value::Bytes(bytes)])
                );
            }
        }
    }

    #[test]
    fn test_grouping_is_invisible_to_the_digest() {
        // One call with a tuple, one call per chunk, one flat call: all equal.
        let chunks = [Value::Bytes(b"hello"), Value::Bytes(b"goodbye")];

        let tupled = accumulate(0, &[Value::Seq(&chunks)]);

        let mut per_call = Hashxx::new();
        per_call.update(&[Value::Bytes(b"hello")]).unwrap();
        per_call.update(&[Value::Bytes(b"goodbye")]).unwrap();

        let flat = hashxx(&[Value::Bytes(b"hellogoodbye")]).unwrap();

        assert_eq!(tupled, 4110974955);
        assert_eq!(per_call.digest(), 4110974955);
        assert_eq!(flat, 4110974955);
    }

    #[test]
    fn test_abc_vector_whole_and_split() {
        assert_eq!(hashxx(&[Value::Bytes(b"abc")]), Ok(0x32D153FF));

        let mut acc = Hashxx::new();
        acc.update(&[Value::Bytes(b"a")]).unwrap();
        acc.update(&[Value::Bytes(b"bc")]).unwrap();
        assert_eq!(acc.digest(), 0x32D153FF);
    }

    #[test]
    fn test_deeply_nested_sequence() {
        let leaf = [Value::Bytes(b"abc")];
        let mid = [Value::Seq(&leaf), Value::Nothing];
        let top = [Value::Nothing, Value::Seq(&mid)];
        assert_eq!(hashxx(&[Value::Seq(&top)]), Ok(0x32D153FF));
    }

    #[test]
    fn test_errors_agree_across_entry_points() {
        let mut acc = Hashxx::new();
        let from_acc = acc.update(&[Value::Text("hi")]).unwrap_err();
        let from_oneshot = hashxx(&[Value::Text("hi")]).unwrap_err();
        assert_eq!(from_acc, from_oneshot);
    }
}
