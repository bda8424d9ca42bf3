//! Dynamic keyword arguments for the one-shot entry point.
//!
//! The one-shot call accepts its seed through an optional `seed` keyword
//! argument with a loosely-typed value, and validates it strictly: anything
//! other than a single `seed` keyword carrying a `u32`-representable value is
//! an error. [`crate::hashxx_seeded`] bypasses all of this with a statically
//! typed seed.

use crate::error::{HashxxError, HashxxResult};

/// A named argument supplied to [`crate::hashxx_with`].
#[derive(Debug, Clone, Copy)]
pub struct Kwarg<'a> {
    /// Argument name; only `seed` is accepted.
    pub name: &'a str,
    /// Argument value, validated against the parameter it names.
    pub value: KwargValue<'a>,
}

impl<'a> Kwarg<'a> {
    /// Create a keyword argument.
    pub fn new(name: &'a str, value: KwargValue<'a>) -> Self {
        Self { name, value }
    }

    /// Shorthand for a well-formed `seed` argument.
    pub fn seed(seed: u32) -> Self {
        Self::new("seed", KwargValue::Uint(seed))
    }
}

/// The loosely-typed value of a keyword argument.
#[derive(Debug, Clone, Copy)]
pub enum KwargValue<'a> {
    /// An unsigned 32-bit integer; always a valid seed.
    Uint(u32),
    /// A signed integer; a valid seed only within `0..=u32::MAX`.
    Int(i64),
    /// A floating-point number; never a valid seed.
    Float(f64),
    /// Text; never a valid seed.
    Text(&'a str),
}

/// Resolve the seed from the supplied keyword arguments.
///
/// No arguments means the default seed 0. Exactly one argument named `seed`
/// is validated by kind; anything else fails with `InvalidArguments`.
pub(crate) fn resolve_seed(kwargs: &[Kwarg<'_>]) -> HashxxResult<u32> {
    match kwargs {
        [] => Ok(0),
        [kw] if kw.name == "seed" => seed_from(kw.value),
        [kw] => Err(HashxxError::unexpected_kwarg(kw.name)),
        rest => Err(HashxxError::too_many_kwargs(rest.len())),
    }
}

fn seed_from(value: KwargValue<'_>) -> HashxxResult<u32> {
    match value {
        KwargValue::Uint(seed) => Ok(seed),
        KwargValue::Int(raw) => {
            u32::try_from(raw).map_err(|_| HashxxError::InvalidSeedType("out-of-range integer"))
        }
        KwargValue::Float(_) => Err(HashxxError::InvalidSeedType("float")),
        KwargValue::Text(_) => Err(HashxxError::InvalidSeedType("text")),
    }
}

// =============================================================================
// Tests
// =============================================================================
