//! Incremental hashing accumulator.

use std::fmt;

use crate::absorb::{absorb_all, absorb_value};
use crate::error::HashxxResult;
use crate::value::Value;
use crate::xx32::Xxh32;

/// An incremental XXH32 accumulator over structured values.
///
/// Feed values with [`update`](Self::update) over time and query the running
/// digest at any point with [`digest`](Self::digest). The seed is fixed at
/// construction. The underlying hash state is owned exclusively by the
/// accumulator and released exactly once when it is dropped.
///
/// Not synchronized: share an accumulator across threads only behind the
/// caller's own serialization (`&mut self` enforces this statically).
///
/// # Example
///
/// ```
/// use hashxx::{Hashxx, Value};
///
/// let mut acc = Hashxx::new();
/// acc.update(&[Value::Bytes(b"hello")])?;
/// acc.update(&[Value::Bytes(b"goodbye")])?;
/// assert_eq!(acc.digest(), 4110974955);
/// # Ok::<(), hashxx::HashxxError>(())
/// ```
pub struct Hashxx {
    state: Xxh32,
    seed: u32,
}

impl Hashxx {
    /// Create an accumulator with the default seed 0.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create an accumulator with an explicit seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            state: Xxh32::new(seed),
            seed,
        }
    }

    /// The seed this accumulator was constructed with.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Absorb one or more values, in order.
    ///
    /// Fails with `MissingArguments` on an empty slice. On the first value
    /// that fails normalization the error is returned and later values are
    /// skipped; bytes absorbed from earlier values in the same call remain
    /// absorbed (absorption is append-only, not transactional).
    pub fn update(&mut self, values: &[Value<'_>]) -> HashxxResult<()> {
        absorb_all(&mut self.state, values)
    }

    /// Absorb a single value.
    ///
    /// Equivalent to [`update`](Self::update) with a one-element slice.
    pub fn update_one<'a>(&mut self, value: impl Into<Value<'a>>) -> HashxxResult<()> {
        absorb_value(&mut self.state, &value.into())
    }

    /// The digest of everything absorbed so far.
    ///
    /// Non-destructive and idempotent: calling this repeatedly, or between
    /// [`update`](Self::update) calls, never disturbs the running state.
    #[inline]
    pub fn digest(&self) -> u32 {
        self.state.digest()
    }
}

impl Default for Hashxx {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hashxx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hashxx")
            .field("seed", &self.seed)
            .field("digest", &self.digest())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HashxxError;

    #[test]
    fn test_update_accumulates_across_calls() {
        let mut acc = Hashxx::new();
        acc.update(&[Value::Bytes(b"hello")]).unwrap();
        acc.update(&[Value::Bytes(b"goodbye")]).unwrap();
        assert_eq!(acc.digest(), 4110974955);
    }

    #[test]
    fn test_update_with_no_values_fails() {
        let mut acc = Hashxx::new();
        assert_eq!(acc.update(&[]), Err(HashxxError::MissingArguments));
        // The failed call absorbed nothing.
        assert_eq!(acc.digest(), Hashxx::new().digest());
    }

    #[test]
    fn test_digest_is_idempotent() {
        let mut acc = Hashxx::new();
        acc.update(&[Value::Bytes(b"hello")]).unwrap();
        let first = acc.digest();
        assert_eq!(acc.digest(), first);
    }

    #[test]
    fn test_digest_interleaves_with_update() {
        let mut acc = Hashxx::new();
        acc.update(&[Value::Bytes(b"hello")]).unwrap();
        assert_eq!(acc.digest(), 4211111929);
        acc.update(&[Value::Bytes(b"goodbye")]).unwrap();
        assert_eq!(acc.digest(), 4110974955);
    }

    #[test]
    fn test_seed_is_immutable_and_observable() {
        let acc = Hashxx::with_seed(9);
        assert_eq!(acc.seed(), 9);
    }

    #[test]
    fn test_update_one_matches_update() {
        let mut a = Hashxx::new();
        a.update_one(b"hello").unwrap();

        let mut b = Hashxx::new();
        b.update(&[Value::Bytes(b"hello")]).unwrap();

        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn test_failed_update_keeps_earlier_bytes() {
        let mut acc = Hashxx::new();
        let err = acc
            .update(&[Value::Bytes(b"hello"), Value::Text("oops")])
            .unwrap_err();
        assert!(matches!(err, HashxxError::UnsupportedType(_)));
        assert_eq!(acc.digest(), 4211111929);
    }
}
