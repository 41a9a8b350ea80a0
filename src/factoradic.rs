use std::cmp::Ordering;
use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::FromPrimitive;

use crate::decoder::{decode_unchecked, validate_coefficients};
use crate::encoder::{encode_magnitude, to_factoradic};
use crate::error::{ConvertError, ConvertResult};

/// A non-negative integer held in factoradic representation.
///
/// The struct owns a validated coefficient sequence: index 0 first, the
/// coefficient at index i multiplying the place value i!, every
/// coefficient no greater than its index. Construction either encodes an
/// integer (always yielding the minimal sequence) or validates a sequence
/// supplied by the caller, which may carry trailing zero padding.
///
/// Equality and ordering are numeric: two representations that differ
/// only in trailing-zero padding compare equal, and ordering matches the
/// ordering of the represented integers without decoding either side.
#[derive(Debug, Clone)]
pub struct Factoradic {
    coefficients: Vec<u64>,
}

impl Factoradic {
    /// Encode an integer into factoradic form.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Negative`] when `n` is negative.
    pub fn from_integer(n: &BigInt) -> ConvertResult<Self> {
        Ok(Self {
            coefficients: to_factoradic(n)?,
        })
    }

    /// Take ownership of a coefficient sequence after validating it.
    ///
    /// Trailing zero padding is preserved as given; use
    /// [`canonical()`](Self::canonical) to drop it.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::EmptyCoefficients`] when the sequence has
    /// no elements, and [`ConvertError::CoefficientOutOfRange`] when a
    /// coefficient exceeds its own index.
    pub fn from_coefficients(coefficients: Vec<u64>) -> ConvertResult<Self> {
        validate_coefficients(&coefficients)?;
        Ok(Self { coefficients })
    }

    /// Take ownership of a coefficient sequence without validation.
    ///
    /// The caller guarantees the sequence is non-empty and every
    /// coefficient is no greater than its index.
    #[must_use]
    pub const fn from_coefficients_unchecked(coefficients: Vec<u64>) -> Self {
        Self { coefficients }
    }

    /// The coefficient sequence, index 0 first
    #[must_use]
    pub fn as_coefficients(&self) -> &[u64] {
        &self.coefficients
    }

    /// Consume and return the coefficient sequence
    #[must_use]
    pub fn into_coefficients(self) -> Vec<u64> {
        self.coefficients
    }

    /// Decode back to the represented integer.
    ///
    /// Infallible: the invariants were checked at construction.
    #[must_use]
    pub fn to_integer(&self) -> BigUint {
        decode_unchecked(&self.coefficients)
    }

    /// Check whether this represents zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&c| c == 0)
    }

    /// Check whether the sequence is in minimal form, with no trailing
    /// zero coefficients beyond the mandatory digit at index 0.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.coefficients.len() == canonical_len(&self.coefficients)
    }

    /// Drop trailing zero padding, leaving the minimal sequence.
    #[must_use]
    pub fn canonical(mut self) -> Self {
        let len = canonical_len(&self.coefficients);
        self.coefficients.truncate(len);
        self
    }

    fn canonical_coefficients(&self) -> &[u64] {
        &self.coefficients[..canonical_len(&self.coefficients)]
    }
}

/// Length of the shortest prefix representing the same value. Never less
/// than 1: zero still takes one digit.
fn canonical_len(coefficients: &[u64]) -> usize {
    coefficients
        .iter()
        .rposition(|&c| c != 0)
        .map_or(1, |last| last + 1)
}

impl From<BigUint> for Factoradic {
    fn from(n: BigUint) -> Self {
        Self::from(&n)
    }
}

impl From<&BigUint> for Factoradic {
    fn from(n: &BigUint) -> Self {
        Self {
            coefficients: encode_magnitude(n),
        }
    }
}

impl From<u64> for Factoradic {
    fn from(n: u64) -> Self {
        Self::from(&BigUint::from(n))
    }
}

impl From<u128> for Factoradic {
    fn from(n: u128) -> Self {
        Self::from(&BigUint::from(n))
    }
}

impl TryFrom<&BigInt> for Factoradic {
    type Error = ConvertError;

    fn try_from(n: &BigInt) -> Result<Self, Self::Error> {
        Self::from_integer(n)
    }
}

impl TryFrom<f64> for Factoradic {
    type Error = ConvertError;

    /// Encode a floating-point value that happens to hold a non-negative
    /// integer.
    ///
    /// The sign check comes first, so negative infinity reports as a
    /// negative number rather than a non-finite one.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value < 0.0 {
            return Err(ConvertError::Negative(value.to_string()));
        }
        if !value.is_finite() {
            return Err(ConvertError::NonFinite(value.to_string()));
        }
        if value.fract() != 0.0 {
            return Err(ConvertError::NonIntegral(value.to_string()));
        }
        let n = BigUint::from_f64(value)
            .ok_or_else(|| ConvertError::NonFinite(value.to_string()))?;
        Ok(Self::from(&n))
    }
}

impl fmt::Display for Factoradic {
    /// Coefficients space-separated, index 0 first — written digit by
    /// digit to avoid an intermediate allocation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, coefficient) in self.coefficients.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{coefficient}")?;
        }
        Ok(())
    }
}

impl PartialEq for Factoradic {
    fn eq(&self, other: &Self) -> bool {
        // Padding carries no value, so compare the minimal prefixes
        self.canonical_coefficients() == other.canonical_coefficients()
    }
}

impl Eq for Factoradic {}

impl PartialOrd for Factoradic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Factoradic {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.canonical_coefficients();
        let b = other.canonical_coefficients();
        // A longer minimal sequence is always the larger value: the
        // smallest (k+1)-digit number is k!, one past the largest
        // k-digit number. Equal lengths compare from the highest place
        // value down.
        a.len()
            .cmp(&b.len())
            .then_with(|| a.iter().rev().cmp(b.iter().rev()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_type() {
        let n = BigInt::from(5039u32);
        let factoradic = Factoradic::from_integer(&n).unwrap();
        assert_eq!(factoradic.as_coefficients(), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(BigInt::from(factoradic.to_integer()), n);
    }

    #[test]
    fn test_padding_is_equal() {
        let minimal = Factoradic::from_coefficients(vec![0, 1]).unwrap();
        let padded = Factoradic::from_coefficients(vec![0, 1, 0, 0]).unwrap();
        assert_eq!(minimal, padded);
        assert_eq!(minimal.cmp(&padded), Ordering::Equal);
    }

    #[test]
    fn test_ordering_matches_values() {
        let values = [0u64, 1, 2, 5, 6, 23, 24, 119, 120, 5039, 5040];
        let encoded: Vec<Factoradic> = values.iter().map(|&n| Factoradic::from(n)).collect();

        for i in 1..encoded.len() {
            assert!(
                encoded[i - 1] < encoded[i],
                "order not preserved: {} < {} failed",
                values[i - 1],
                values[i]
            );
        }
    }

    #[test]
    fn test_ordering_ignores_padding() {
        let two = Factoradic::from_coefficients(vec![0, 0, 1, 0, 0]).unwrap();
        let three = Factoradic::from_coefficients(vec![0, 1, 1]).unwrap();
        assert!(two < three);
    }

    #[test]
    fn test_canonical() {
        let padded = Factoradic::from_coefficients(vec![0, 1, 0, 0]).unwrap();
        assert!(!padded.is_canonical());

        let canonical = padded.canonical();
        assert!(canonical.is_canonical());
        assert_eq!(canonical.as_coefficients(), &[0, 1]);

        // Zero keeps its single mandatory digit
        let zero = Factoradic::from_coefficients(vec![0, 0, 0]).unwrap();
        assert_eq!(zero.canonical().as_coefficients(), &[0]);
    }

    #[test]
    fn test_is_zero() {
        assert!(Factoradic::from(0u64).is_zero());
        assert!(Factoradic::from_coefficients(vec![0, 0, 0]).unwrap().is_zero());
        assert!(!Factoradic::from(1u64).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Factoradic::from(5u64).to_string(), "0 1 2");
        assert_eq!(Factoradic::from(0u64).to_string(), "0");
    }

    #[test]
    fn test_try_from_float_integral() {
        let factoradic = Factoradic::try_from(6.0).unwrap();
        assert_eq!(factoradic.as_coefficients(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_try_from_float_rejections() {
        assert!(matches!(
            Factoradic::try_from(2.5),
            Err(ConvertError::NonIntegral(_))
        ));
        assert!(matches!(
            Factoradic::try_from(f64::NAN),
            Err(ConvertError::NonFinite(_))
        ));
        assert!(matches!(
            Factoradic::try_from(f64::INFINITY),
            Err(ConvertError::NonFinite(_))
        ));
        // The sign check wins over the finiteness check
        assert!(matches!(
            Factoradic::try_from(f64::NEG_INFINITY),
            Err(ConvertError::Negative(_))
        ));
        assert!(matches!(
            Factoradic::try_from(-3.0),
            Err(ConvertError::Negative(_))
        ));
    }

    #[test]
    fn test_from_coefficients_validates() {
        assert_eq!(
            Factoradic::from_coefficients(vec![]),
            Err(ConvertError::EmptyCoefficients)
        );
        assert_eq!(
            Factoradic::from_coefficients(vec![0, 2]),
            Err(ConvertError::CoefficientOutOfRange {
                coefficient: 2,
                index: 1
            })
        );
    }
}
