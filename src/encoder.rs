//! Encoding logic: positional integer to factoradic coefficients.
//!
//! Repeated division by an increasing radix. The remainder at radix r
//! becomes the coefficient at index r − 1, so the coefficient at index 0
//! (the remainder of division by 1) is always 0.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{ConvertError, ConvertResult};

/// Convert an integer to its factoradic coefficient sequence.
///
/// The returned sequence is minimal: the coefficient at index i multiplies
/// the place value i!, the length is the smallest k ≥ 1 for which k!
/// exceeds `n`, and the final coefficient is non-zero except for `n = 0`,
/// which encodes as `[0]`.
///
/// # Errors
///
/// Returns [`ConvertError::Negative`] when `n` is negative.
pub fn to_factoradic(n: &BigInt) -> ConvertResult<Vec<u64>> {
    if n.sign() == Sign::Minus {
        return Err(ConvertError::Negative(n.to_string()));
    }
    Ok(encode_magnitude(n.magnitude()))
}

/// Repeated-division core over an unsigned magnitude.
///
/// Terminates because the quotient is non-increasing and the radix grows
/// past any fixed value.
pub(crate) fn encode_magnitude(n: &BigUint) -> Vec<u64> {
    // 24 coefficients hold anything below 24! (~2^79); larger inputs grow the buffer
    let mut coefficients = Vec::with_capacity(24);
    let mut quotient = n.clone();
    let mut radix = BigUint::one();

    loop {
        let (q, remainder) = quotient.div_rem(&radix);
        // The remainder is strictly less than the radix, so a single u64
        // limb holds it; zero has no limbs at all.
        coefficients.push(remainder.iter_u64_digits().next().unwrap_or(0));
        quotient = q;
        if quotient.is_zero() {
            break;
        }
        radix += 1u64;
    }

    coefficients
}
