//! Recursive normalization of input values into a running hash state.
//!
//! This is the single source of truth for byte-flattening semantics: both the
//! accumulator and the one-shot slow path feed values through here, so a
//! digest depends only on the seed and the flattened byte stream, never on
//! how values were grouped into calls or nested into sequences.

use crate::error::{HashxxError, HashxxResult};
use crate::value::Value;
use crate::xx32::Xxh32;

/// Absorb one value into `state`.
///
/// Absorption is append-only: on error, bytes already absorbed from earlier
/// elements stay absorbed. Sequence recursion is bounded only by the call
/// stack.
pub(crate) fn absorb_value(state: &mut Xxh32, value: &Value<'_>) -> HashxxResult<()> {
    match value {
        Value::Bytes(bytes) => {
            state.update(bytes);
            Ok(())
        }
        Value::Nothing => Ok(()),
        Value::Seq(items) => {
            for item in *items {
                absorb_value(state, item)?;
            }
            Ok(())
        }
        Value::Text(_) => Err(HashxxError::unencoded_text()),
        Value::Opaque { type_name } => Err(HashxxError::unsupported(type_name)),
    }
}

/// Absorb a non-empty run of values in order, stopping at the first failure.
pub(crate) fn absorb_all(state: &mut Xxh32, values: &[Value<'_>]) -> HashxxResult<()> {
    if values.is_empty() {
        return Err(HashxxError::MissingArguments);
    }
    for value in values {
        absorb_value(state, value)?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
