//! Decoding logic: factoradic coefficients back to a positional integer.
//!
//! Validation runs to completion before any arithmetic, so a malformed
//! sequence can never yield a partial result.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{ConvertError, ConvertResult};

/// Convert a factoradic coefficient sequence to the integer it represents.
///
/// The coefficient at index i multiplies the place value i!. Sequences
/// padded with trailing zero coefficients are accepted; padding does not
/// change the represented value.
///
/// # Errors
///
/// Returns [`ConvertError::EmptyCoefficients`] when the sequence has no
/// elements, and [`ConvertError::CoefficientOutOfRange`] when a
/// coefficient exceeds its own index.
pub fn from_factoradic(coefficients: &[u64]) -> ConvertResult<BigUint> {
    validate_coefficients(coefficients)?;
    Ok(decode_unchecked(coefficients))
}

/// Check the structural invariants of a coefficient sequence: at least
/// one element, and every coefficient no greater than its index.
pub(crate) fn validate_coefficients(coefficients: &[u64]) -> ConvertResult<()> {
    if coefficients.is_empty() {
        return Err(ConvertError::EmptyCoefficients);
    }
    for (index, &coefficient) in coefficients.iter().enumerate() {
        if coefficient > index as u64 {
            return Err(ConvertError::CoefficientOutOfRange { coefficient, index });
        }
    }
    Ok(())
}

/// Sum coefficient[i] × i! over a sequence already known to be valid.
///
/// The place value is carried incrementally (i! = (i−1)! × i) rather than
/// recomputed per index.
pub(crate) fn decode_unchecked(coefficients: &[u64]) -> BigUint {
    let mut total = BigUint::zero();
    let mut place = BigUint::one(); // 0! = 1

    for (index, &coefficient) in coefficients.iter().enumerate() {
        if index > 0 {
            place *= index as u64;
        }
        if coefficient != 0 {
            total += &place * coefficient;
        }
    }

    total
}
