//! Input value model for the hashing entry points.
//!
//! A [`Value`] is a borrowed, closed tagged union over everything the hasher
//! accepts (or deliberately rejects). Normalization into the byte stream is an
//! exhaustive match over these variants, never open-ended type inspection.

/// A borrowed input value accepted by [`crate::hashxx`] and [`crate::Hashxx`].
///
/// Only `Bytes`, `Seq`, and `Nothing` contribute to a digest. `Text` and
/// `Opaque` exist so that rejection is part of the closed model: both always
/// fail normalization with [`crate::HashxxError::UnsupportedType`].
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    /// Raw bytes, absorbed verbatim with no transformation or re-encoding.
    Bytes(&'a [u8]),

    /// Ordered sequence of values, flattened left-to-right, depth-first.
    ///
    /// Grouping never affects the digest: `(a, (b, c))` hashes identically
    /// to `a, b, c`. Nesting depth is bounded only by the call stack.
    Seq(&'a [Value<'a>]),

    /// Explicit absence of data; contributes zero bytes.
    Nothing,

    /// Decoded text. Always rejected: the byte encoding of text is the
    /// caller's choice and is never guessed here.
    Text(&'a str),

    /// Any other runtime value kind crossing the boundary. Always rejected;
    /// the error message names `type_name`.
    Opaque {
        /// Runtime type name reported in the error message.
        type_name: &'static str,
    },
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Value<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [Value<'a>]> for Value<'a> {
    fn from(items: &'a [Value<'a>]) -> Self {
        Self::Seq(items)
    }
}

impl From<()> for Value<'static> {
    fn from(_: ()) -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Tests
// =============================================================================
