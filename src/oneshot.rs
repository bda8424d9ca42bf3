//! One-shot hashing entry points.
//!
//! These compute a digest from fully-known input without exposing an
//! accumulator to the caller. The common case of a single flat buffer takes a
//! fast path through the stateless XXH32 form; everything else allocates a
//! streaming state and shares the normalizer with [`crate::Hashxx`], so both
//! paths produce identical digests for identical flattened bytes.

use crate::absorb::absorb_all;
use crate::error::{HashxxError, HashxxResult};
use crate::kwargs::{self, Kwarg};
use crate::value::Value;
use crate::xx32::{self, Xxh32};

/// Hash one or more values with the default seed 0.
///
/// # Example
///
/// ```
/// use hashxx::{hashxx, Value};
///
/// assert_eq!(hashxx(&[Value::Bytes(b"hello")])?, 4211111929);
/// # Ok::<(), hashxx::HashxxError>(())
/// ```
pub fn hashxx(values: &[Value<'_>]) -> HashxxResult<u32> {
    hashxx_seeded(0, values)
}

/// Hash one or more values with an explicit seed.
///
/// Fails with `MissingArguments` on an empty slice, and with
/// `UnsupportedType` on any value (or nested element) that is neither bytes,
/// a sequence, nor nothing.
pub fn hashxx_seeded(seed: u32, values: &[Value<'_>]) -> HashxxResult<u32> {
    match values {
        [] => Err(HashxxError::MissingArguments),
        // Single flat buffer: stateless hash, no streaming state allocated.
        [Value::Bytes(bytes)] => Ok(xx32::oneshot(bytes, seed)),
        [Value::Nothing] => Ok(xx32::oneshot(&[], seed)),
        _ => {
            let mut state = Xxh32::new(seed);
            absorb_all(&mut state, values)?;
            Ok(state.digest())
        }
    }
}

/// Hash one or more values, taking the seed as an optional keyword argument.
///
/// Keyword validation happens before anything is hashed: more than one
/// keyword, or a keyword not named `seed`, fails with `InvalidArguments`; a
/// `seed` whose value is not representable as a `u32` fails with
/// `InvalidSeedType`. No keywords means seed 0.
pub fn hashxx_with(kwargs: &[Kwarg<'_>], values: &[Value<'_>]) -> HashxxResult<u32> {
    let seed = kwargs::resolve_seed(kwargs)?;
    hashxx_seeded(seed, values)
}

// =============================================================================
// Tests
// =============================================================================
